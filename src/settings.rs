//! Runtime settings
//!
//! Loaded once at startup from an optional JSON file. Every field has a
//! default, so a file only needs the values it overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::{ConfigError, GameConfig, Tuning};

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame loop rate in Hz
    pub tick_hz: u32,
    /// RNG seed; a fresh one is picked per run when absent
    pub seed: Option<u64>,
    /// Where the high score is kept
    pub high_score_path: PathBuf,
    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            seed: None,
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check the loop settings and the tuning
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_hz == 0 || self.tick_hz > MAX_TICK_HZ {
            return Err(ConfigError::Invalid(format!(
                "tick_hz must be within 1..={MAX_TICK_HZ}, got {}",
                self.tick_hz
            )));
        }
        self.tuning.validate()
    }

    /// Build the validated session configuration
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.tuning.clone())
    }

    /// Wall-clock budget of one frame
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.tick_hz.max(1)
    }
}
