//! Actor tuning and configuration
//!
//! Steering and projectile parameters are data-driven: each actor kind is a
//! plain config struct consumed by the same simulation code, with intents
//! supplied by whatever source the host wires up (input device, AI policy).
//! Configs are JSON-loadable from disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::DespawnRule;

/// Actor kinds sharing the same steering and pool logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActorKind {
    #[default]
    Player,
    Drone,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Player => "Player",
            ActorKind::Drone => "Drone",
        }
    }

    /// Tuning preset for this kind
    pub fn config(&self) -> ActorConfig {
        match self {
            ActorKind::Player => ActorConfig::default(),
            // Drones are slower, turn harder and carry a single short-range shot
            ActorKind::Drone => ActorConfig {
                thrust_accel: THRUST_ACCEL * 0.6,
                max_speed: MAX_SPEED * 0.5,
                rotation_delta: ROTATION_DELTA * 1.5,
                projectile_capacity: 1,
                despawn: DespawnRule::Range { max_dist: 200.0 },
                ..ActorConfig::default()
            },
        }
    }
}

/// Steering and projectile tuning for one actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Acceleration along the nose, scaled by the frame's dt
    pub thrust_accel: f32,
    /// Velocity floor for an otherwise inert actor (units per tick)
    pub min_speed: f32,
    /// Velocity ceiling (units per tick)
    pub max_speed: f32,
    /// Turn step in radians per tick, not per second, so turn rate follows
    /// the frame rate
    pub rotation_delta: f32,
    /// First-order velocity decay per tick; 0 = coast forever
    pub friction: f32,
    /// Maximum simultaneous live shots
    pub projectile_capacity: usize,
    /// Shot displacement per tick
    pub projectile_speed: f32,
    /// When shots die: after a lifetime in seconds, or past a max range
    pub despawn: DespawnRule,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            thrust_accel: THRUST_ACCEL,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            rotation_delta: ROTATION_DELTA,
            friction: FRICTION,
            projectile_capacity: PROJECTILE_CAPACITY,
            projectile_speed: PROJECTILE_SPEED,
            despawn: DespawnRule::Age {
                max_secs: PROJECTILE_LIFETIME,
            },
        }
    }
}

impl ActorConfig {
    /// Load a config from a JSON file, falling back to defaults on any
    /// read or parse failure.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded actor config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Bad actor config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No actor config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save the config as pretty-printed JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save actor config {}: {err}", path.display());
                } else {
                    log::info!("Actor config saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("Failed to serialize actor config: {err}"),
        }
    }
}
