//! In-memory high score, for runs that should not touch the disk

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use super::{HighScoreStore, StoreError};

/// Stores the score in a shared cell; clones see the same value.
/// Zero means nothing has been saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<AtomicU32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `score` already stored
    pub fn with_score(score: u32) -> Self {
        Self {
            slot: Arc::new(AtomicU32::new(score)),
        }
    }

    /// Currently stored score, if any
    pub fn stored(&self) -> Option<u32> {
        match self.slot.load(Ordering::Relaxed) {
            0 => None,
            score => Some(score),
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        self.stored()
            .ok_or_else(|| StoreError::Unavailable("nothing stored in memory".into()))
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.slot.store(score, Ordering::Relaxed);
        Ok(())
    }
}
