//! InMemoryPlayerStore - HashMap-backed player store for tests and
//! ephemeral deployments.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::league::{League, Player};

use super::{read_or_recover, PlayerStore, StoreError};

/// Volatile player store. Nothing is persisted; state is lost with the
/// process.
///
/// The league it reports has no defined order. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryPlayerStore {
    scores: Arc<RwLock<HashMap<String, u64>>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn player_score(&self, name: &str) -> u64 {
        let scores = read_or_recover(&self.scores, "player score");
        scores.get(name).copied().unwrap_or(0)
    }

    fn league(&self) -> League {
        let scores = read_or_recover(&self.scores, "league");
        scores
            .iter()
            .map(|(name, wins)| Player::new(name.clone(), *wins))
            .collect()
    }

    fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut scores = self
            .scores
            .write()
            .map_err(|_| StoreError::LockPoisoned("record win"))?;
        let wins = scores.entry(name.to_string()).or_insert(0);
        *wins = wins
            .checked_add(1)
            .ok_or_else(|| StoreError::WinsOverflow(name.to_string()))?;
        Ok(())
    }
}
