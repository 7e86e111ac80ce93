//! Per-frame simulation tick
//!
//! Advances one actor: steering integration, wrap re-anchoring, projectile
//! pool. Exactly one tick runs per rendered frame, to completion, with the
//! elapsed time supplied by the host frame driver.

use super::state::Actor;

/// Intent flags for a single tick, decoupled from the input device that
/// produced them
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub fire: bool,
}

/// Advance the actor by one frame.
///
/// Step order is part of the contract: the zero-velocity floor is evaluated
/// on the velocity entering the tick, before any intent applies, and
/// friction decays velocity only after integration.
pub fn tick(actor: &mut Actor, input: &TickInput, dt: f32) {
    // An exactly inert actor is unsteerable; give it min_speed along the nose
    actor.floor_velocity();

    // Turn step is fixed radians per tick, not per second. Left turns
    // toward smaller angles, right toward larger.
    let mut turn = 0.0;
    if input.rotate_left {
        turn -= actor.config.rotation_delta;
    }
    if input.rotate_right {
        turn += actor.config.rotation_delta;
    }
    if turn != 0.0 {
        actor.turn(turn);
    }

    // Both thrusts may apply in the same tick and simply cancel
    if input.thrust_backward {
        actor.thrust(-actor.config.thrust_accel, dt);
    }
    if input.thrust_forward {
        actor.thrust(actor.config.thrust_accel, dt);
    }

    actor.clamp_speed();

    // Velocity is the per-tick displacement; only thrust scales with dt
    actor.pos += actor.vel;
    actor.pos = actor.field.rewrap(actor.pos);

    actor.apply_friction();

    if input.fire {
        let origin = actor.pos;
        let heading = actor.heading();
        actor.pool.try_fire(origin, heading, actor.config.projectile_speed);
    }
    actor.pool.tick(dt);
}
