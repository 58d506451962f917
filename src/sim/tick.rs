//! Fixed-rate simulation tick
//!
//! One call advances the session by exactly one frame: the input batch is
//! applied in arrival order, then, if the round is running, difficulty is
//! refreshed, obstacles spawn and move, and the collision and finish-line
//! checks run. A tick is never partially applied.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};

/// Discrete input commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    MoveUp,
    PauseToggle,
    StartOrRestart,
    Quit,
}

impl InputEvent {
    /// Map a key name to a command. Unknown keys map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "up" | "w" | "k" => Some(InputEvent::MoveUp),
            "p" | "pause" => Some(InputEvent::PauseToggle),
            "space" | " " | "start" | "s" => Some(InputEvent::StartOrRestart),
            "q" | "quit" | "escape" | "esc" => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

/// Advance the session by one frame. Returns what happened.
pub fn tick(state: &mut GameState, input: &[InputEvent]) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for &command in input {
        apply_input(state, command, &mut events);
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;
    let level = state.progress.level();

    state.obstacles.set_level(level);
    let spawn_chance = state.obstacles.spawn_chance();
    state.obstacles.maybe_spawn(spawn_chance);
    let speed = state.obstacles.speed();
    state.obstacles.advance(speed);

    if let Some(hit) = state.obstacles.hit(state.player.pos) {
        let obstacle_id = hit.id;
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at level {} (hit obstacle {} after {} ticks)",
            level,
            obstacle_id,
            state.time_ticks
        );
        events.push(GameEvent::Collision { obstacle_id });
    } else if state.reached_finish() {
        let new_high = state.progress.level_up();
        state.player.reset_position();

        let level = state.progress.level();
        log::info!("Level up: {}", level);
        events.push(GameEvent::LevelUp { level });
        if new_high {
            log::info!("New high score: {}", level);
            events.push(GameEvent::NewHighScore { score: level });
        }
    }

    events
}

/// Apply one command according to the phase transition table
fn apply_input(state: &mut GameState, command: InputEvent, events: &mut Vec<GameEvent>) {
    match (state.phase, command) {
        (GamePhase::Terminated, _) => {}
        (_, InputEvent::Quit) => {
            state.phase = GamePhase::Terminated;
            events.push(GameEvent::Quit);
        }
        (GamePhase::Ready | GamePhase::GameOver, InputEvent::StartOrRestart) => {
            state.start_round();
            log::info!("Round started (high score {})", state.progress.high_score());
            events.push(GameEvent::RoundStarted);
        }
        (GamePhase::Running, InputEvent::PauseToggle) => {
            state.phase = GamePhase::Paused;
            events.push(GameEvent::Paused);
        }
        (GamePhase::Paused, InputEvent::PauseToggle) => {
            state.phase = GamePhase::Running;
            events.push(GameEvent::Resumed);
        }
        (GamePhase::Running, InputEvent::MoveUp) => state.player.move_up(),
        _ => {}
    }
}
