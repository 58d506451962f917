//! Lane Dodge - a lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, obstacles, collisions, game phases)
//! - `highscores`: Level progression and the high-score hook
//! - `persistence`: High-score stores (file, in-memory)
//! - `platform`: Input sources, frame pacing and the fixed-rate frame loop
//! - `renderer`: Per-tick render snapshots and text/JSON renderers
//! - `settings`: Runtime settings loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::ProgressTracker;
pub use settings::Settings;
pub use tuning::{ConfigError, GameConfig, Tuning};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the loop
    pub const TICK_HZ: u32 = 60;
    /// Highest accepted frame rate
    pub const MAX_TICK_HZ: u32 = 1000;

    /// Visible field dimensions, centered on the origin
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Gap between the field edge and the start/finish lines
    pub const MARGIN: f32 = 40.0;

    /// Player column and per-press climb
    pub const PLAYER_X: f32 = 0.0;
    pub const PLAYER_STEP: f32 = 20.0;

    /// First lane sits this far above the start line, the rest follow every `LANE_STEP`
    pub const LANE_OFFSET: f32 = 20.0;
    pub const LANE_STEP: f32 = 40.0;
    /// Upper bound on the lane table size
    pub const MAX_LANES: usize = 256;

    /// Per-frame spawn probability at level 1, its growth per level and its ceiling
    pub const BASE_SPAWN_CHANCE: f32 = 0.06;
    pub const SPAWN_CHANCE_GROWTH: f32 = 0.01;
    pub const SPAWN_CHANCE_CAP: f32 = 0.18;

    /// Obstacle speed (units per frame) at level 1 and its growth per level
    pub const BASE_SPEED: f32 = 4.0;
    pub const SPEED_GROWTH: f32 = 0.8;

    /// Player/obstacle centers closer than this collide
    pub const COLLISION_DISTANCE: f32 = 24.0;
    /// Obstacles enter this far outside the field edge
    pub const SPAWN_OFFSET: f32 = 30.0;
    /// Obstacles further than this outside the field edge are dropped
    pub const PRUNE_MARGIN: f32 = 60.0;

    /// Number of cosmetic obstacle tints
    pub const TINT_COUNT: u8 = 8;

    /// High score used when nothing valid is stored
    pub const DEFAULT_HIGH_SCORE: u32 = 1;
    /// Default high-score file, relative to the working directory
    pub const HIGH_SCORE_FILE: &str = "highscore.txt";

    /// Capacity of the input queue feeding the frame loop
    pub const INPUT_QUEUE_CAPACITY: usize = 1024;
}
