//! Rendering boundary
//!
//! The simulation never draws. After every tick the frame loop captures a
//! `RenderState` snapshot and hands it to a `Renderer`, which maps entities
//! to whatever it draws with. Renderers only read the snapshot.

pub mod hud;
pub mod json;

use std::io;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Direction, GameEvent, GamePhase, GameState};

pub use hud::TextRenderer;
pub use json::JsonRenderer;

/// Obstacle colors, indexed by `Obstacle::tint`
pub const PALETTE: [&str; 8] = [
    "royal blue",
    "tomato",
    "gold",
    "violet",
    "lime green",
    "orange red",
    "deep pink",
    "turquoise",
];

/// Color name for a tint index
pub fn tint_color(tint: u8) -> &'static str {
    PALETTE[tint as usize % PALETTE.len()]
}

/// How one obstacle should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleSprite {
    pub pos: Vec2,
    pub direction: Direction,
    pub color: &'static str,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    /// Frame counter of the loop (counts paused frames too)
    pub frame: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub high_score: u32,
    pub player: Vec2,
    pub obstacles: Vec<ObstacleSprite>,
    /// What happened during this tick
    pub events: Vec<GameEvent>,
}

impl RenderState {
    /// Snapshot `state` after a tick
    pub fn capture(state: &GameState, frame: u64, events: Vec<GameEvent>) -> Self {
        Self {
            frame,
            phase: state.phase,
            level: state.progress.level(),
            high_score: state.progress.high_score(),
            player: state.player.pos,
            obstacles: state
                .obstacles
                .obstacles()
                .iter()
                .map(|o| ObstacleSprite {
                    pos: o.pos,
                    direction: o.direction,
                    color: tint_color(o.tint),
                })
                .collect(),
            events,
        }
    }
}

/// Consumer of per-tick snapshots
pub trait Renderer {
    fn render(&mut self, frame: &RenderState) -> io::Result<()>;
}
