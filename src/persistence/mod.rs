//! High-score persistence
//!
//! The backing store holds a single integer. Stores report failures as
//! `StoreError`; callers decide whether a failure matters (for the high score
//! it never does).

pub mod file;
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Failure of a high-score load or save
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been stored yet
    #[error("no high score stored at {0}")]
    Missing(PathBuf),
    #[error("high score I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed high score in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("high score store unavailable: {0}")]
    Unavailable(String),
}

/// Load/save collaborator for the high score
pub trait HighScoreStore: Send {
    /// Read the stored high score
    fn load(&self) -> Result<u32, StoreError>;

    /// Replace the stored high score
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}
