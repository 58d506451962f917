//! Obstacle spawning, movement, pruning and collision queries
//!
//! The manager exclusively owns the live obstacles. Obstacles are created
//! only by spawning and destroyed only by off-screen pruning or `reset`.
//! All randomness comes from the manager's own seeded RNG, so the same seed
//! and input sequence always produce the same traffic.

use std::sync::Arc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision;
use super::state::{Direction, Obstacle};
use crate::consts::TINT_COUNT;
use crate::tuning::GameConfig;

#[derive(Debug, Clone)]
pub struct ObstacleManager {
    config: Arc<GameConfig>,
    /// Live obstacles, oldest first
    obstacles: Vec<Obstacle>,
    rng: Pcg32,
    spawn_chance: f32,
    speed_bonus: f32,
    next_id: u32,
}

impl ObstacleManager {
    pub fn new(config: Arc<GameConfig>, seed: u64) -> Self {
        let spawn_chance = config.tuning().spawn_chance_for_level(1);
        Self {
            config,
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            spawn_chance,
            speed_bonus: 0.0,
            next_id: 1,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Spawn probability for the current level
    pub fn spawn_chance(&self) -> f32 {
        self.spawn_chance
    }

    /// Speed added on top of the base speed for the current level
    pub fn speed_bonus(&self) -> f32 {
        self.speed_bonus
    }

    /// Obstacle speed for the current level
    pub fn speed(&self) -> f32 {
        self.config.tuning().base_speed + self.speed_bonus
    }

    /// Recompute difficulty for `level`. Call once per frame before spawning.
    pub fn set_level(&mut self, level: u32) {
        let tuning = self.config.tuning();
        self.spawn_chance = tuning.spawn_chance_for_level(level);
        self.speed_bonus = tuning.speed_bonus_for_level(level);
    }

    /// With probability `spawn_chance`, spawn one obstacle in a random lane
    /// and direction. Returns the new obstacle's id.
    pub fn maybe_spawn(&mut self, spawn_chance: f32) -> Option<u32> {
        if self.rng.random::<f32>() >= spawn_chance {
            return None;
        }

        let lanes = self.config.lanes();
        let lane_y = lanes[self.rng.random_range(0..lanes.len())];
        let direction = if self.rng.random_bool(0.5) {
            Direction::LeftToRight
        } else {
            Direction::RightToLeft
        };
        let tint = self.rng.random_range(0..TINT_COUNT);
        Some(self.spawn(lane_y, direction, tint))
    }

    /// Place an obstacle just outside the edge it enters from
    pub fn spawn(&mut self, lane_y: f32, direction: Direction, tint: u8) -> u32 {
        let edge = self.config.half_width() + self.config.tuning().spawn_offset;
        let x = -direction.sign() * edge;
        self.insert(Vec2::new(x, lane_y), direction, tint)
    }

    /// Add an obstacle at an arbitrary position
    pub fn insert(&mut self, pos: Vec2, direction: Direction, tint: u8) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            pos,
            direction,
            tint,
        });
        log::debug!("Spawned obstacle {} at {:?} heading {:?}", id, pos, direction);
        id
    }

    /// Move every obstacle by `speed` along its direction, then drop those
    /// that left the field. Returns how many were dropped.
    pub fn advance(&mut self, speed: f32) -> usize {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
        }

        let limit = self.config.half_width() + self.config.tuning().prune_margin;
        let before = self.obstacles.len();
        self.obstacles.retain(|o| (-limit..=limit).contains(&o.pos.x));
        let pruned = before - self.obstacles.len();
        if pruned > 0 {
            log::debug!("Pruned {} obstacles, {} live", pruned, self.obstacles.len());
        }
        pruned
    }

    /// First obstacle touching `target`, if any
    pub fn hit(&self, target: Vec2) -> Option<&Obstacle> {
        collision::first_hit(
            &self.obstacles,
            target,
            self.config.tuning().collision_distance,
        )
    }

    /// True when any obstacle touches `target`
    pub fn collides_with(&self, target: Vec2) -> bool {
        self.hit(target).is_some()
    }

    /// Drop all obstacles and the speed bonus
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.speed_bonus = 0.0;
    }
}
