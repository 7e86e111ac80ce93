//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame tick, elapsed time supplied by the host
//! - Single writer per tick, no internal timing, no I/O
//! - No rendering or platform dependencies

pub mod field;
pub mod projectile;
pub mod state;
pub mod tick;

pub use field::{ArenaBounds, ToroidalField, WRAP_OFFSET_COUNT};
pub use projectile::{DespawnRule, Projectile, ProjectilePool};
pub use state::Actor;
pub use tick::{TickInput, tick};
