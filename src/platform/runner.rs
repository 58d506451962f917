//! The frame loop
//!
//! Single mutator of the session: each iteration drains input, runs one
//! `sim::tick`, hands a snapshot to the renderer and sleeps out the frame.
//! Paused and game-over frames still render, so the HUD stays up.

use std::io;
use std::time::Instant;

use super::input::InputSource;
use super::time::FramePacer;
use crate::renderer::{RenderState, Renderer};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames the loop executed
    pub frames: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub high_score: u32,
}

#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    pacer: FramePacer,
    frame: u64,
    max_frames: Option<u64>,
}

impl GameLoop {
    pub fn new(state: GameState, pacer: FramePacer) -> Self {
        Self {
            state,
            pacer,
            frame: 0,
            max_frames: None,
        }
    }

    /// Stop after `frames` frames even without a quit
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Run one frame without pacing. Returns false once the session has quit.
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> io::Result<bool> {
        let commands = input.drain();
        let events = tick(&mut self.state, &commands);
        self.frame += 1;

        for event in &events {
            if let GameEvent::Paused | GameEvent::Resumed = event {
                log::debug!("{:?} at frame {}", event, self.frame);
            }
        }

        let snapshot = RenderState::capture(&self.state, self.frame, events);
        renderer.render(&snapshot)?;
        Ok(self.state.phase != GamePhase::Terminated)
    }

    /// Run paced frames until quit (or the frame limit). Renderer errors end the run.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> io::Result<RunSummary> {
        log::info!(
            "Frame loop started ({:?} per frame)",
            self.pacer.budget()
        );

        loop {
            let frame_start = Instant::now();
            if !self.step(input, renderer)? {
                break;
            }
            if self.max_frames.is_some_and(|max| self.frame >= max) {
                log::info!("Frame limit reached");
                break;
            }
            self.pacer.wait(frame_start);
        }

        let summary = self.summary();
        log::info!(
            "Frame loop stopped after {} frames (level {}, high score {})",
            summary.frames,
            summary.level,
            summary.high_score
        );
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frame,
            phase: self.state.phase,
            level: self.state.progress.level(),
            high_score: self.state.progress.high_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::persistence::MemoryStore;
    use crate::platform::input::ScriptedInput;
    use crate::sim::InputEvent;
    use crate::tuning::{GameConfig, Tuning};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<RenderState>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, frame: &RenderState) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    struct Broken;

    impl Renderer for Broken {
        fn render(&mut self, _frame: &RenderState) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    fn game_loop() -> GameLoop {
        let config = Arc::new(GameConfig::new(Tuning::default()).unwrap());
        let state = GameState::new(config, 1, Box::new(MemoryStore::new()));
        GameLoop::new(state, FramePacer::from_hz(1000))
    }

    #[test]
    fn test_renders_every_frame_until_quit() {
        let mut game = game_loop();
        let mut input = ScriptedInput::new([
            vec![],
            vec![InputEvent::StartOrRestart],
            vec![InputEvent::PauseToggle],
            vec![],
            vec![InputEvent::Quit],
            vec![InputEvent::StartOrRestart],
        ]);
        let mut recorder = Recorder::default();

        let summary = game.run(&mut input, &mut recorder).unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.phase, GamePhase::Terminated);
        assert_eq!(input.remaining(), 1);

        let phases: Vec<_> = recorder.frames.iter().map(|f| f.phase).collect();
        assert_eq!(
            phases,
            vec![
                GamePhase::Ready,
                GamePhase::Running,
                GamePhase::Paused,
                GamePhase::Paused,
                GamePhase::Terminated
            ]
        );
        let numbers: Vec<_> = recorder.frames.iter().map(|f| f.frame).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_frame_limit() {
        let mut game = game_loop().with_max_frames(3);
        let mut input = ScriptedInput::default();
        let mut recorder = Recorder::default();
        let summary = game.run(&mut input, &mut recorder).unwrap();
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.phase, GamePhase::Ready);
    }

    #[test]
    fn test_renderer_error_stops_run() {
        let mut game = game_loop();
        let mut input = ScriptedInput::default();
        let err = game.run(&mut input, &mut Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(game.summary().frames, 1);
    }
}
