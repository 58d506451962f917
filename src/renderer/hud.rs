//! Text HUD
//!
//! Writes the status line whenever it changes, plus the start and game-over
//! screens when the phase enters them. Obstacles are not drawn.

use std::io::{self, Write};

use super::{RenderState, Renderer};
use crate::sim::{GameEvent, GamePhase};

pub const TITLE: &str = "Traffic Dodge";

pub const START_SCREEN: [&str; 4] = [
    TITLE,
    "Reach the top to level up. Avoid the traffic!",
    "Controls: up move   p pause/resume   q quit",
    "Press SPACE to start",
];

pub const GAME_OVER_SCREEN: [&str; 2] = ["GAME OVER", "Press SPACE to play again, or Q to quit"];

/// One-line HUD text for a frame
pub fn hud_line(frame: &RenderState) -> String {
    format!(
        "Level: {}   High: {}   [{}]    (↑=move, P=pause, Q=quit)",
        frame.level,
        frame.high_score,
        frame.phase.label()
    )
}

pub struct TextRenderer<W: Write> {
    out: W,
    last_hud: Option<String>,
    last_phase: Option<GamePhase>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_hud: None,
            last_phase: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn screen(&mut self, lines: &[&str]) -> io::Result<()> {
        writeln!(self.out)?;
        for line in lines {
            writeln!(self.out, "    {}", line)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &RenderState) -> io::Result<()> {
        if self.last_phase != Some(frame.phase) {
            match frame.phase {
                GamePhase::Ready => self.screen(&START_SCREEN)?,
                GamePhase::GameOver => self.screen(&GAME_OVER_SCREEN)?,
                _ => {}
            }
            self.last_phase = Some(frame.phase);
        }

        for event in &frame.events {
            if let GameEvent::NewHighScore { score } = event {
                writeln!(self.out, "New high score: {}!", score)?;
            }
        }

        if frame.phase == GamePhase::Terminated {
            self.out.flush()?;
            return Ok(());
        }

        let hud = hud_line(frame);
        if self.last_hud.as_deref() != Some(hud.as_str()) {
            writeln!(self.out, "{}", hud)?;
            self.last_hud = Some(hud);
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn frame(phase: GamePhase, level: u32, high_score: u32) -> RenderState {
        RenderState {
            frame: 0,
            phase,
            level,
            high_score,
            player: Vec2::ZERO,
            obstacles: Vec::new(),
            events: Vec::new(),
        }
    }

    #[test]
    fn test_hud_line() {
        assert_eq!(
            hud_line(&frame(GamePhase::Paused, 3, 7)),
            "Level: 3   High: 7   [PAUSED]    (↑=move, P=pause, Q=quit)"
        );
    }

    #[test]
    fn test_writes_only_changes() {
        let mut renderer = TextRenderer::new(Vec::new());
        for _ in 0..3 {
            renderer.render(&frame(GamePhase::Ready, 1, 1)).unwrap();
        }
        for _ in 0..3 {
            renderer.render(&frame(GamePhase::Running, 1, 1)).unwrap();
        }
        let mut up = frame(GamePhase::Running, 2, 2);
        up.events = vec![
            GameEvent::LevelUp { level: 2 },
            GameEvent::NewHighScore { score: 2 },
        ];
        renderer.render(&up).unwrap();
        renderer.render(&frame(GamePhase::GameOver, 2, 2)).unwrap();
        renderer.render(&frame(GamePhase::Terminated, 2, 2)).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.matches("Press SPACE to start").count(), 1);
        assert_eq!(text.matches("[READY]").count(), 1);
        assert_eq!(text.matches("[RUNNING]").count(), 2);
        assert_eq!(text.matches("New high score: 2!").count(), 1);
        assert_eq!(text.matches("GAME OVER").count(), 2); // screen + HUD status
        assert!(!text.contains("[QUIT]"));
    }
}
