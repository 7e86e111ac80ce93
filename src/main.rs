//! Toro Drift entry point
//!
//! Headless demo driver: runs the simulation at a fixed timestep with a
//! seeded intent script and logs telemetry the way a rendering host would
//! read it back.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use toro_drift::config::{ActorConfig, ActorKind};
use toro_drift::consts::*;
use toro_drift::sim::{Actor, ArenaBounds, TickInput, tick};
use toro_drift::vec_angle;

/// Demo length in ticks (10 seconds at 60 Hz)
const DEMO_TICKS: u64 = 600;
/// Re-roll the intent script every half second
const SCRIPT_PERIOD: u64 = 30;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xD81F);
    log::info!("Toro Drift (headless) starting with seed {seed}");

    let mut rng = Pcg32::seed_from_u64(seed);

    // Optional second arg: path to a JSON tuning file
    let config = match std::env::args().nth(2) {
        Some(path) => ActorConfig::load(Path::new(&path)),
        None => ActorKind::Player.config(),
    };

    let bounds = ArenaBounds::new(0.0, ARENA_WIDTH, 0.0, ARENA_HEIGHT);
    let start = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
    let mut actor = Actor::new(start, bounds, config);

    let mut input = TickInput::default();
    for tick_index in 0..DEMO_TICKS {
        if tick_index % SCRIPT_PERIOD == 0 {
            input = TickInput {
                rotate_left: rng.random_bool(0.3),
                rotate_right: rng.random_bool(0.3),
                thrust_forward: rng.random_bool(0.6),
                thrust_backward: rng.random_bool(0.1),
                fire: rng.random_bool(0.4),
            };
        }

        tick(&mut actor, &input, SIM_DT);

        if tick_index % 60 == 0 {
            log::info!(
                "t={tick_index:4} pos=({:6.1},{:6.1}) heading={:5.2} speed={:5.2} shots={}",
                actor.pos.x,
                actor.pos.y,
                vec_angle(actor.dir),
                actor.speed(),
                actor.pool.shots().len(),
            );
        }
    }

    log::info!(
        "done: pos=({:.1},{:.1}) speed={:.2}",
        actor.pos.x,
        actor.pos.y,
        actor.speed(),
    );
}
