//! Toro Drift - a toroidal arena steering and projectile simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, wrap-around re-anchoring, projectiles)
//! - `config`: Data-driven actor tuning
//!
//! The crate is headless: a host supplies per-frame elapsed time and intent
//! flags, then reads back the canonical position, heading, velocity and the
//! live projectile list for presentation.

pub mod config;
pub mod sim;

pub use config::ActorConfig;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default arena dimensions (world units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player steering defaults. Velocity is a per-tick displacement, so the
    /// speed limits are in units per tick; thrust is scaled by the frame's dt.
    pub const THRUST_ACCEL: f32 = 6.0;
    pub const MIN_SPEED: f32 = 0.5;
    pub const MAX_SPEED: f32 = 8.0;
    /// Turn step in radians per tick
    pub const ROTATION_DELTA: f32 = 0.06;
    /// First-order velocity decay per tick
    pub const FRICTION: f32 = 0.01;

    /// Projectile defaults
    pub const PROJECTILE_CAPACITY: usize = 3;
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Shot time-to-live in seconds
    pub const PROJECTILE_LIFETIME: f32 = 1.5;
}

/// Rotate a vector by an angle in radians (positive = counter-clockwise)
#[inline]
pub fn rotate_vec(v: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Angle of a vector relative to the +X axis, in `[-π, π]`
#[inline]
pub fn vec_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate_vec(Vec2::X, FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec_angle() {
        assert!(vec_angle(Vec2::X).abs() < 1e-6);
        assert!((vec_angle(Vec2::Y) - FRAC_PI_2).abs() < 1e-6);
        assert!((vec_angle(Vec2::new(-1.0, 0.0)).abs() - PI).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn rotate_by_zero_is_identity(x in -1e3f32..1e3, y in -1e3f32..1e3) {
            let v = Vec2::new(x, y);
            let r = rotate_vec(v, 0.0);
            prop_assert!((r - v).length() < 1e-4);
        }

        #[test]
        fn rotate_round_trips(
            x in -1e3f32..1e3,
            y in -1e3f32..1e3,
            theta in -PI..PI,
        ) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let v = Vec2::new(x, y);
            let back = rotate_vec(rotate_vec(v, theta), -theta);
            prop_assert!((back - v).length() < v.length() * 1e-4 + 1e-4);
        }

        #[test]
        fn rotate_preserves_length(
            x in -1e3f32..1e3,
            y in -1e3f32..1e3,
            theta in -PI..PI,
        ) {
            let v = Vec2::new(x, y);
            let r = rotate_vec(v, theta);
            prop_assert!((r.length() - v.length()).abs() < v.length() * 1e-4 + 1e-4);
        }

        #[test]
        fn normalize_yields_unit_length(x in -1e3f32..1e3, y in -1e3f32..1e3) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let n = Vec2::new(x, y).normalize();
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }
}
