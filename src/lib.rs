//! Player win tracking backed by a single-file JSON league.
//!
//! - [`League`] / [`Player`]: the ordered table of players and their wins.
//! - [`Tape`]: a writer that truncates its backing before every write.
//! - [`PlayerStore`]: the read/mutate contract, implemented by
//!   [`FileSystemPlayerStore`] (durable) and [`InMemoryPlayerStore`].
//! - `http` (feature `http`): axum routes over any `PlayerStore`.

mod league;
mod store;
mod tape;

#[cfg(feature = "http")]
pub mod http;

pub use league::{League, LeagueError, Player};
pub use store::{FileSystemPlayerStore, InMemoryPlayerStore, PlayerStore, StoreError};
pub use tape::{Backing, Tape};
