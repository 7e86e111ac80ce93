//! Projectile spawning and lifetime management
//!
//! Each actor owns one bounded pool of live shots. The pool enforces the
//! concurrency cap, advances shots every tick and prunes the dead ones; a
//! full pool is a normal steady state, not an error.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Despawn policy the pool applies to every shot each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DespawnRule {
    /// Shot dies after a fixed number of seconds
    Age { max_secs: f32 },
    /// Shot dies once it has travelled this far from its origin
    Range { max_dist: f32 },
}

/// A single fired shot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Firing position, kept for range-based despawn
    pub origin: Vec2,
    /// Unit (or near-unit) travel direction
    pub dir: Vec2,
    /// Displacement per tick
    pub speed: f32,
    pub pos: Vec2,
    pub alive: bool,
    /// Seconds since the shot was fired
    pub age_secs: f32,
}

impl Projectile {
    fn new(origin: Vec2, dir: Vec2, speed: f32) -> Self {
        Self {
            origin,
            dir,
            speed,
            pos: origin,
            alive: true,
            age_secs: 0.0,
        }
    }

    /// Step one tick forward and age the shot. Displacement is per tick,
    /// matching the actor's own integration units.
    fn advance(&mut self, dt: f32) {
        self.pos += self.dir.normalize_or_zero() * self.speed;
        self.age_secs += dt;
    }

    /// Distance travelled from the firing position
    pub fn travel(&self) -> f32 {
        (self.pos - self.origin).length()
    }
}

/// Bounded pool of live projectiles for one actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectilePool {
    capacity: usize,
    despawn: DespawnRule,
    shots: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new(capacity: usize, despawn: DespawnRule) -> Self {
        Self {
            capacity,
            despawn,
            shots: Vec::with_capacity(capacity),
        }
    }

    /// Live shots, oldest first
    #[inline]
    pub fn shots(&self) -> &[Projectile] {
        &self.shots
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn despawn_rule(&self) -> DespawnRule {
        self.despawn
    }

    /// Fire a new shot from `origin` along `dir` if the pool has room.
    /// At capacity the request is silently dropped.
    pub fn try_fire(&mut self, origin: Vec2, dir: Vec2, speed: f32) {
        if self.shots.len() >= self.capacity {
            log::trace!("projectile pool full, shot dropped");
            return;
        }
        self.shots.push(Projectile::new(origin, dir, speed));
    }

    /// Advance every live shot, apply the despawn rule, then prune the dead
    /// so capacity is free before the next fire attempt.
    pub fn tick(&mut self, dt: f32) {
        for shot in &mut self.shots {
            shot.advance(dt);
            let expired = match self.despawn {
                DespawnRule::Age { max_secs } => shot.age_secs >= max_secs,
                DespawnRule::Range { max_dist } => shot.travel() >= max_dist,
            };
            if expired {
                shot.alive = false;
            }
        }
        self.shots.retain(|shot| shot.alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_capacity_cap_is_silent() {
        let mut pool = ProjectilePool::new(3, DespawnRule::Age { max_secs: 1.0 });
        for _ in 0..5 {
            pool.try_fire(Vec2::ZERO, Vec2::X, 10.0);
        }
        assert_eq!(pool.shots().len(), 3);

        // One more attempt is still a no-op
        pool.try_fire(Vec2::ZERO, Vec2::X, 10.0);
        assert_eq!(pool.shots().len(), 3);
    }

    #[test]
    fn test_tick_advances_along_direction() {
        let mut pool = ProjectilePool::new(1, DespawnRule::Age { max_secs: 10.0 });
        pool.try_fire(Vec2::new(5.0, 5.0), Vec2::new(0.0, 2.0), 10.0);
        pool.tick(DT);

        let shot = pool.shots()[0];
        // Direction is normalized before stepping
        assert!((shot.pos - Vec2::new(5.0, 15.0)).length() < 1e-4);
        assert!((shot.travel() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_age_rule_prunes_expired_shots() {
        let mut pool = ProjectilePool::new(2, DespawnRule::Age { max_secs: 3.0 * DT });
        pool.try_fire(Vec2::ZERO, Vec2::X, 1.0);

        pool.tick(DT);
        pool.tick(DT);
        assert_eq!(pool.shots().len(), 1);

        // Third tick reaches the TTL and the shot is pruned
        pool.tick(DT);
        assert!(pool.shots().is_empty());
    }

    #[test]
    fn test_range_rule_prunes_travelled_shots() {
        let mut pool = ProjectilePool::new(2, DespawnRule::Range { max_dist: 25.0 });
        pool.try_fire(Vec2::ZERO, Vec2::X, 10.0);

        pool.tick(DT);
        pool.tick(DT);
        assert_eq!(pool.shots().len(), 1);

        // 30 units out exceeds the 25 unit range
        pool.tick(DT);
        assert!(pool.shots().is_empty());
    }

    #[test]
    fn test_pruning_frees_capacity_for_next_fire() {
        let mut pool = ProjectilePool::new(1, DespawnRule::Age { max_secs: DT });
        pool.try_fire(Vec2::ZERO, Vec2::X, 1.0);
        pool.try_fire(Vec2::ZERO, Vec2::Y, 1.0);
        assert_eq!(pool.shots().len(), 1);

        pool.tick(DT);
        assert!(pool.shots().is_empty());

        pool.try_fire(Vec2::ZERO, Vec2::Y, 1.0);
        assert_eq!(pool.shots().len(), 1);
    }
}
