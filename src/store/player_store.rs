use crate::league::League;

use super::StoreError;

/// Read/mutate contract shared by every player store.
///
/// Implementations are `Send + Sync` and synchronize internally, so a single
/// instance can be shared (behind `Arc` or by cloning) across request
/// handlers.
pub trait PlayerStore: Send + Sync {
    /// Wins recorded for `name`, or 0 if the player is unknown.
    fn player_score(&self, name: &str) -> u64;

    /// A snapshot of the current league. Changing it does not touch the store.
    fn league(&self) -> League;

    /// Record one win for `name`, adding the player with 1 win if unknown.
    /// Durable stores persist before returning; a persistence failure is
    /// returned and leaves the store unchanged.
    fn record_win(&self, name: &str) -> Result<(), StoreError>;
}

impl<S: PlayerStore + ?Sized> PlayerStore for std::sync::Arc<S> {
    fn player_score(&self, name: &str) -> u64 {
        (**self).player_score(name)
    }

    fn league(&self) -> League {
        (**self).league()
    }

    fn record_win(&self, name: &str) -> Result<(), StoreError> {
        (**self).record_win(name)
    }
}
