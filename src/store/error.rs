use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::league::LeagueError;

/// Error type for player store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing document could not be decoded at construction.
    #[error("problem loading league: {0}")]
    Load(#[from] LeagueError),
    /// Same as `Load`, for a store opened from a path.
    #[error("problem loading league from {}: {source}", .path.display())]
    LoadFile {
        path: PathBuf,
        #[source]
        source: LeagueError,
    },
    /// The league could not be serialized.
    #[error("failed to encode league: {0}")]
    Encode(#[source] serde_json::Error),
    /// Opening, writing or syncing the backing failed.
    #[error("failed to persist league: {0}")]
    Io(#[from] io::Error),
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    /// The player's win count is already at its maximum.
    #[error("win count for player {0:?} cannot be increased further")]
    WinsOverflow(String),
}

impl StoreError {
    /// Map this error to an HTTP-style status code. Every store failure is a
    /// server-side failure.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Load(_)
            | StoreError::LoadFile { .. }
            | StoreError::Encode(_)
            | StoreError::Io(_)
            | StoreError::LockPoisoned(_)
            | StoreError::WinsOverflow(_) => 500,
        }
    }
}
