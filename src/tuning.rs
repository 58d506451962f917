//! Data-driven game balance
//!
//! `Tuning` is the raw, serializable set of numbers. `GameConfig` is the
//! validated form the simulation runs on: it is built once per session, holds
//! the precomputed lane table and is shared read-only by every component.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while building the session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A tuning value breaks an invariant the simulation relies on
    #[error("invalid tuning: {0}")]
    Invalid(String),
    /// The settings file could not be read
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The settings file is not valid JSON for `Settings`
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub margin: f32,
    pub player_step: f32,
    pub lane_offset: f32,
    pub lane_step: f32,
    pub base_spawn_chance: f32,
    pub spawn_chance_growth: f32,
    pub spawn_chance_cap: f32,
    pub base_speed: f32,
    pub speed_growth: f32,
    pub collision_distance: f32,
    pub spawn_offset: f32,
    pub prune_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            margin: MARGIN,
            player_step: PLAYER_STEP,
            lane_offset: LANE_OFFSET,
            lane_step: LANE_STEP,
            base_spawn_chance: BASE_SPAWN_CHANCE,
            spawn_chance_growth: SPAWN_CHANCE_GROWTH,
            spawn_chance_cap: SPAWN_CHANCE_CAP,
            base_speed: BASE_SPEED,
            speed_growth: SPEED_GROWTH,
            collision_distance: COLLISION_DISTANCE,
            spawn_offset: SPAWN_OFFSET,
            prune_margin: PRUNE_MARGIN,
        }
    }
}

impl Tuning {
    /// Extra obstacle speed earned by reaching `level`
    pub fn speed_bonus_for_level(&self, level: u32) -> f32 {
        level.saturating_sub(1) as f32 * self.speed_growth
    }

    /// Obstacle speed at `level`: linear in the level, uncapped
    pub fn speed_for_level(&self, level: u32) -> f32 {
        self.base_speed + self.speed_bonus_for_level(level)
    }

    /// Per-frame spawn probability at `level`: linear in the level up to the cap
    pub fn spawn_chance_for_level(&self, level: u32) -> f32 {
        let chance =
            self.base_spawn_chance + level.saturating_sub(1) as f32 * self.spawn_chance_growth;
        chance.min(self.spawn_chance_cap)
    }

    /// Y coordinate of the start line
    pub fn start_y(&self) -> f32 {
        -self.screen_height / 2.0 + self.margin
    }

    /// Y coordinate of the finish line
    pub fn finish_y(&self) -> f32 {
        self.screen_height / 2.0 - self.margin
    }

    /// Check every invariant the simulation assumes
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("margin", self.margin),
            ("player_step", self.player_step),
            ("lane_offset", self.lane_offset),
            ("lane_step", self.lane_step),
            ("base_spawn_chance", self.base_spawn_chance),
            ("spawn_chance_growth", self.spawn_chance_growth),
            ("spawn_chance_cap", self.spawn_chance_cap),
            ("base_speed", self.base_speed),
            ("speed_growth", self.speed_growth),
            ("collision_distance", self.collision_distance),
            ("spawn_offset", self.spawn_offset),
            ("prune_margin", self.prune_margin),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(invalid("screen dimensions must be positive"));
        }
        if self.margin < 0.0 {
            return Err(invalid("margin must not be negative"));
        }
        if self.finish_y() <= self.start_y() {
            return Err(invalid(format!(
                "finish line ({}) must lie above the start line ({})",
                self.finish_y(),
                self.start_y()
            )));
        }
        if self.player_step <= 0.0 {
            return Err(invalid("player_step must be positive"));
        }
        if self.lane_step <= 0.0 {
            return Err(invalid("lane_step must be positive"));
        }
        if self.lane_offset < 0.0 {
            return Err(invalid("lane_offset must not be negative"));
        }
        for (name, value) in [
            ("base_spawn_chance", self.base_spawn_chance),
            ("spawn_chance_cap", self.spawn_chance_cap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if self.spawn_chance_growth < 0.0 || self.speed_growth < 0.0 {
            return Err(invalid("difficulty growth rates must not be negative"));
        }
        if self.base_speed < 0.0 {
            return Err(invalid("base_speed must not be negative"));
        }
        if self.collision_distance <= 0.0 {
            return Err(invalid("collision_distance must be positive"));
        }
        if self.spawn_offset < 0.0 || self.prune_margin < self.spawn_offset {
            return Err(invalid(
                "prune_margin must be at least spawn_offset, and both non-negative",
            ));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

/// Validated, immutable session configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    tuning: Tuning,
    start_y: f32,
    finish_y: f32,
    half_width: f32,
    lanes: Box<[f32]>,
}

impl GameConfig {
    /// Validate `tuning` and precompute the derived geometry
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let start_y = tuning.start_y();
        let finish_y = tuning.finish_y();
        let lanes = lane_table(start_y + tuning.lane_offset, finish_y, tuning.lane_step)?;

        Ok(Self {
            half_width: tuning.screen_width / 2.0,
            tuning,
            start_y,
            finish_y,
            lanes,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Y coordinate the player starts each attempt from
    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    /// Reaching this Y coordinate (or beyond) completes a level
    pub fn finish_y(&self) -> f32 {
        self.finish_y
    }

    /// Half the visible field width; the field spans `[-half_width, half_width]`
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Lane Y coordinates, bottom to top
    pub fn lanes(&self) -> &[f32] {
        &self.lanes
    }
}

/// Evenly spaced lanes from `first` up to and including `last`
fn lane_table(first: f32, last: f32, step: f32) -> Result<Box<[f32]>, ConfigError> {
    if first > last {
        return Err(invalid(format!(
            "no lanes fit between {first} and the finish line at {last}"
        )));
    }
    let count = ((last - first) / step).floor() as usize + 1;
    if count > MAX_LANES {
        return Err(invalid(format!(
            "lane_step {step} yields {count} lanes, more than {MAX_LANES}"
        )));
    }
    Ok((0..count).map(|i| first + i as f32 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_lanes() {
        let config = GameConfig::new(Tuning::default()).unwrap();
        assert_eq!(config.start_y(), -260.0);
        assert_eq!(config.finish_y(), 260.0);
        assert_eq!(config.half_width(), 300.0);

        let lanes = config.lanes();
        assert_eq!(lanes.len(), 13);
        assert_eq!(lanes[0], -240.0);
        assert_eq!(lanes[12], 240.0);
        assert!(lanes.windows(2).all(|w| (w[1] - w[0] - 40.0).abs() < 1e-4));
    }

    #[test]
    fn test_speed_scenario() {
        let tuning = Tuning {
            base_speed: 4.0,
            speed_growth: 0.8,
            ..Default::default()
        };
        assert_eq!(tuning.speed_for_level(1), 4.0);
        assert!((tuning.speed_for_level(3) - 5.6).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_chance_capped() {
        let tuning = Tuning {
            base_spawn_chance: 0.06,
            spawn_chance_growth: 0.01,
            spawn_chance_cap: 0.18,
            ..Default::default()
        };
        assert_eq!(tuning.spawn_chance_for_level(20), 0.18);
        assert!((tuning.spawn_chance_for_level(2) - 0.07).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_empty_lane_set() {
        let tuning = Tuning {
            lane_offset: 1000.0,
            ..Default::default()
        };
        assert!(matches!(GameConfig::new(tuning), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            Tuning {
                lane_step: 0.0,
                ..Default::default()
            },
            Tuning {
                player_step: -5.0,
                ..Default::default()
            },
            Tuning {
                spawn_chance_cap: 1.5,
                ..Default::default()
            },
            Tuning {
                margin: 400.0,
                ..Default::default()
            },
            Tuning {
                base_speed: f32::NAN,
                ..Default::default()
            },
            Tuning {
                prune_margin: 10.0,
                ..Default::default()
            },
            Tuning {
                lane_step: 0.001,
                ..Default::default()
            },
        ];
        for tuning in cases {
            assert!(GameConfig::new(tuning.clone()).is_err(), "accepted {tuning:?}");
        }
    }

    #[test]
    fn test_tuning_json_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "base_speed": 6.5 }"#).unwrap();
        assert_eq!(tuning.base_speed, 6.5);
        assert_eq!(tuning.lane_step, LANE_STEP);
    }

    proptest! {
        #[test]
        fn prop_speed_non_decreasing(level in 1u32..10_000) {
            let tuning = Tuning::default();
            prop_assert!(tuning.speed_for_level(level + 1) >= tuning.speed_for_level(level));
        }

        #[test]
        fn prop_spawn_chance_within_cap(
            level in 1u32..10_000,
            base in 0.0f32..=1.0,
            growth in 0.0f32..0.5,
            cap in 0.0f32..=1.0,
        ) {
            let tuning = Tuning {
                base_spawn_chance: base,
                spawn_chance_growth: growth,
                spawn_chance_cap: cap,
                ..Default::default()
            };
            prop_assert!(tuning.spawn_chance_for_level(level) <= cap);
            prop_assert!(tuning.spawn_chance_for_level(level + 1) >= tuning.spawn_chance_for_level(level));
        }
    }
}
