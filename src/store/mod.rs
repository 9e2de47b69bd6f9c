//! Player stores - the read/mutate contract the serving layer consumes,
//! with a durable and a volatile implementation.
//!
//! ## Example
//!
//! ```ignore
//! use player_league::{FileSystemPlayerStore, PlayerStore};
//!
//! let store = FileSystemPlayerStore::open("game.db.json")?;
//! store.record_win("Alam")?;
//! assert_eq!(store.player_score("Alam"), 1);
//! ```

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

mod error;
mod file_system;
mod in_memory;
mod player_store;

pub use error::StoreError;
pub use file_system::FileSystemPlayerStore;
pub use in_memory::InMemoryPlayerStore;
pub use player_store::PlayerStore;

/// Take a read lock, recovering from poisoning. Writers only leave the table
/// in a decodable state, so a panic elsewhere does not invalidate reads.
pub(crate) fn read_or_recover<'a, T>(
    lock: &'a RwLock<T>,
    operation: &str,
) -> RwLockReadGuard<'a, T> {
    lock.read().unwrap_or_else(|poisoned: PoisonError<_>| {
        log::warn!("recovering poisoned store lock during {}", operation);
        poisoned.into_inner()
    })
}
