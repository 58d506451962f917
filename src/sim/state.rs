//! Game state and core simulation types

use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleManager;
use crate::consts::PLAYER_X;
use crate::highscores::ProgressTracker;
use crate::persistence::HighScoreStore;
use crate::tuning::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the first start
    Ready,
    /// Active gameplay
    Running,
    /// Frozen mid-round
    Paused,
    /// Round ended by a collision, waiting for restart
    GameOver,
    /// Quit requested; the loop stops at the end of this tick
    Terminated,
}

impl GamePhase {
    /// Status text for the HUD
    pub fn label(&self) -> &'static str {
        match self {
            GamePhase::Ready => "READY",
            GamePhase::Running => "RUNNING",
            GamePhase::Paused => "PAUSED",
            GamePhase::GameOver => "GAME OVER",
            GamePhase::Terminated => "QUIT",
        }
    }
}

/// Horizontal travel direction of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// +1 for left-to-right, -1 for right-to-left
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Direction::LeftToRight => 1.0,
            Direction::RightToLeft => -1.0,
        }
    }
}

/// The player, climbing a fixed column toward the finish line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    start_y: f32,
    step: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, config.start_y()),
            start_y: config.start_y(),
            step: config.tuning().player_step,
        }
    }

    /// Climb one step. Not clamped: crossing the finish is handled by the tick.
    pub fn move_up(&mut self) {
        self.pos.y += self.step;
    }

    /// Back to the start line
    pub fn reset_position(&mut self) {
        self.pos.y = self.start_y;
    }
}

/// An obstacle travelling along a lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// `pos.y` is the lane
    pub pos: Vec2,
    pub direction: Direction,
    /// Cosmetic palette index, see `renderer::hud::PALETTE`
    pub tint: u8,
}

impl Obstacle {
    #[inline]
    pub fn lane_y(&self) -> f32 {
        self.pos.y
    }

    /// Move along the lane by `speed` in the travel direction
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.pos.x += self.direction.sign() * speed;
    }
}

/// Things that happened during a tick, for renderers and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    Paused,
    Resumed,
    /// Player reached the finish line; `level` is the new level
    LevelUp { level: u32 },
    NewHighScore { score: u32 },
    /// Round over
    Collision { obstacle_id: u32 },
    Quit,
}

/// Complete session state; the frame loop is its only mutator
#[derive(Debug)]
pub struct GameState {
    config: Arc<GameConfig>,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: ObstacleManager,
    pub progress: ProgressTracker,
    /// Simulated frames in the current round
    pub time_ticks: u64,
}

impl GameState {
    /// New session on the start screen
    pub fn new(config: Arc<GameConfig>, seed: u64, store: Box<dyn HighScoreStore>) -> Self {
        Self {
            phase: GamePhase::Ready,
            player: Player::new(&config),
            obstacles: ObstacleManager::new(Arc::clone(&config), seed),
            progress: ProgressTracker::new(store),
            time_ticks: 0,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset player, obstacles and level, and start running
    pub fn start_round(&mut self) {
        self.player.reset_position();
        self.obstacles.reset();
        self.progress.reset();
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
    }

    /// Player is at or beyond the finish line
    pub fn reached_finish(&self) -> bool {
        self.player.pos.y >= self.config.finish_y()
    }
}
