//! Level progression and the persisted high score
//!
//! The high score is the highest level ever reached. It is read from the
//! store once at construction and written back whenever it is beaten.
//! Storage problems never reach gameplay: a failed read starts from the
//! default, a failed write is logged and dropped.

use std::fmt;

use crate::consts::DEFAULT_HIGH_SCORE;
use crate::persistence::{HighScoreStore, StoreError};

pub struct ProgressTracker {
    level: u32,
    high_score: u32,
    store: Box<dyn HighScoreStore>,
}

impl ProgressTracker {
    /// Create a tracker at level 1, reading the high score from `store`
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let high_score = match store.load() {
            Ok(score) if score >= DEFAULT_HIGH_SCORE => {
                log::info!("Loaded high score {}", score);
                score
            }
            Ok(score) => {
                log::warn!("Ignoring stored high score {}", score);
                DEFAULT_HIGH_SCORE
            }
            Err(StoreError::Missing(path)) => {
                log::info!("No high score at {}, starting fresh", path.display());
                DEFAULT_HIGH_SCORE
            }
            Err(e) => {
                log::warn!("Could not load high score ({}), starting fresh", e);
                DEFAULT_HIGH_SCORE
            }
        };

        Self {
            level: 1,
            high_score,
            store,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Advance one level. Returns true when this set a new high score.
    pub fn level_up(&mut self) -> bool {
        self.level += 1;
        if self.level <= self.high_score {
            return false;
        }

        self.high_score = self.level;
        if let Err(e) = self.store.save(self.high_score) {
            log::warn!("High score {} not saved: {}", self.high_score, e);
        }
        true
    }

    /// Back to level 1 for a new round; the high score stays
    pub fn reset(&mut self) {
        self.level = 1;
    }
}

impl fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("level", &self.level)
            .field("high_score", &self.high_score)
            .finish_non_exhaustive()
    }
}
