//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic and
//! free of platform concerns:
//! - One fixed frame per `tick`
//! - Seeded RNG only
//! - Stable iteration order (obstacles oldest first)
//! - No rendering, input devices or clocks; persistence only through the
//!   `HighScoreStore` trait

pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{first_hit, within_distance};
pub use obstacles::ObstacleManager;
pub use state::{Direction, GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{InputEvent, tick};
