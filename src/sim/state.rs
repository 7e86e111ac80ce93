//! Actor state and steering primitives
//!
//! An [`Actor`] bundles the continuous steering state (position, facing,
//! velocity) with its toroidal field and projectile pool. The per-tick
//! ordering of the steering steps lives in [`super::tick`]; this module
//! holds the individual mutations.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::{ArenaBounds, ToroidalField};
use super::projectile::ProjectilePool;
use crate::config::ActorConfig;
use crate::rotate_vec;

/// A steerable actor on a toroidal field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Canonical position, re-anchored against the arena every tick
    pub pos: Vec2,
    /// Facing direction. Never the zero vector; not necessarily unit length
    pub dir: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub config: ActorConfig,
    pub field: ToroidalField,
    pub pool: ProjectilePool,
}

impl Actor {
    /// Spawn an actor at `pos` facing the default `(1, 1)` diagonal.
    pub fn new(pos: Vec2, bounds: ArenaBounds, config: ActorConfig) -> Self {
        let pool = ProjectilePool::new(config.projectile_capacity, config.despawn);
        Self {
            pos,
            dir: Vec2::new(1.0, 1.0),
            vel: Vec2::ZERO,
            config,
            field: ToroidalField::new(bounds),
            pool,
        }
    }

    /// Current speed, derived from velocity
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Unit facing vector.
    ///
    /// A zero direction is a contract violation: fatal in debug builds,
    /// clamped to +X in release so steering stays defined.
    pub fn heading(&self) -> Vec2 {
        debug_assert!(self.dir != Vec2::ZERO, "actor direction must be non-zero");
        let heading = self.dir.normalize_or_zero();
        if heading == Vec2::ZERO {
            log::warn!("zero actor direction clamped to +X");
            Vec2::X
        } else {
            heading
        }
    }

    /// Replace the arena bounds; wrap offsets are recomputed before the
    /// next tick.
    pub fn set_bounds(&mut self, bounds: ArenaBounds) {
        self.field.set_bounds(bounds);
    }

    /// Rotate nose and velocity together so speed is carried through the
    /// turn. Rotation preserves length, so a non-zero direction stays
    /// non-zero.
    pub(super) fn turn(&mut self, radians: f32) {
        self.dir = rotate_vec(self.dir, radians);
        self.vel = rotate_vec(self.vel, radians);
    }

    /// Accelerate along the nose; the sign of `accel` selects
    /// forward/backward.
    pub(super) fn thrust(&mut self, accel: f32, dt: f32) {
        self.vel += self.heading() * accel * dt;
    }

    /// Kick a perfectly inert actor back to a steerable minimum speed along
    /// its nose.
    pub(super) fn floor_velocity(&mut self) {
        if self.vel.length() == 0.0 {
            self.vel = self.heading() * self.config.min_speed;
        }
    }

    /// Rescale velocity to exactly the ceiling when it is exceeded
    pub(super) fn clamp_speed(&mut self) {
        self.vel = self.vel.clamp_length_max(self.config.max_speed);
    }

    /// First-order decay, applied after integration
    pub(super) fn apply_friction(&mut self) {
        self.vel += -self.vel * self.config.friction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn test_actor() -> Actor {
        Actor::new(
            Vec2::new(50.0, 50.0),
            ArenaBounds::new(0.0, 100.0, 0.0, 100.0),
            ActorConfig::default(),
        )
    }

    #[test]
    fn test_spawn_state() {
        let actor = test_actor();
        assert_eq!(actor.pos, Vec2::new(50.0, 50.0));
        assert_eq!(actor.dir, Vec2::new(1.0, 1.0));
        assert_eq!(actor.vel, Vec2::ZERO);
        assert_eq!(actor.speed(), 0.0);
    }

    #[test]
    fn test_heading_is_unit_length() {
        let actor = test_actor();
        assert!((actor.heading().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_floor_velocity_magnitude() {
        let mut actor = test_actor();
        actor.floor_velocity();
        assert!((actor.speed() - actor.config.min_speed).abs() < 1e-6);

        // Floor only applies to an exactly inert actor
        let vel = actor.vel;
        actor.floor_velocity();
        assert_eq!(actor.vel, vel);
    }

    #[test]
    fn test_turn_carries_speed() {
        let mut actor = test_actor();
        actor.vel = Vec2::new(3.0, 0.0);
        actor.turn(FRAC_PI_2);
        assert!((actor.speed() - 3.0).abs() < 1e-5);
        assert!((actor.vel - Vec2::new(0.0, 3.0)).length() < 1e-5);
        // Direction turned by the same angle
        assert!((actor.dir - Vec2::new(-1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_clamp_speed_rescales_to_ceiling() {
        let mut actor = test_actor();
        actor.vel = Vec2::new(100.0, 0.0);
        actor.clamp_speed();
        assert!((actor.speed() - actor.config.max_speed).abs() < 1e-4);

        actor.vel = Vec2::new(0.0, 1.0);
        actor.clamp_speed();
        assert_eq!(actor.vel, Vec2::new(0.0, 1.0));
    }
}
