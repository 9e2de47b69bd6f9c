//! FileSystemPlayerStore - league persisted as one JSON document in a single
//! file, rewritten in full on every recorded win.

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::league::{League, LeagueError, Player};
use crate::tape::{Backing, Tape};

use super::{read_or_recover, PlayerStore, StoreError};

struct State<B> {
    league: League,
    tape: Tape<B>,
}

/// Durable player store over a [`Backing`] (a `File` unless stated).
///
/// The league is loaded once at construction and kept in memory. Every
/// `record_win` rewrites the whole league through a [`Tape`] while holding
/// the store's write lock, so concurrent writers cannot interleave their
/// truncate and write steps. Clone-friendly via Arc.
pub struct FileSystemPlayerStore<B = File> {
    state: Arc<RwLock<State<B>>>,
}

impl<B> Clone for FileSystemPlayerStore<B> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl FileSystemPlayerStore<File> {
    /// Open (creating if absent) the database file at `path` and load it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let league = load(&mut file).map_err(|source| StoreError::LoadFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded {} players from {}",
            league.len(),
            path.display()
        );

        Ok(Self::from_parts(league, Tape::new(file)))
    }
}

impl<B: Backing> FileSystemPlayerStore<B> {
    /// Load the league from `backing`, reading from its start.
    pub fn new(mut backing: B) -> Result<Self, StoreError> {
        let league = load(&mut backing)?;
        log::debug!("loaded {} players", league.len());
        Ok(Self::from_parts(league, Tape::new(backing)))
    }

    /// Sync the backing to durable media after every persist.
    pub fn with_sync(self, sync: bool) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .tape
            .set_sync(sync);
        self
    }

    fn from_parts(league: League, tape: Tape<B>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State { league, tape })),
        }
    }
}

fn load<B: Backing>(backing: &mut B) -> Result<League, LeagueError> {
    backing.seek(SeekFrom::Start(0))?;
    League::parse(backing)
}

fn persist<B: Backing>(league: &League, tape: &mut Tape<B>) -> Result<usize, StoreError> {
    let bytes = league.to_json().map_err(StoreError::Encode)?;
    Ok(tape.write(&bytes)?)
}

impl<B: Backing> PlayerStore for FileSystemPlayerStore<B> {
    fn player_score(&self, name: &str) -> u64 {
        let state = read_or_recover(&self.state, "player score");
        state.league.find(name).map(|p| p.wins).unwrap_or(0)
    }

    fn league(&self) -> League {
        read_or_recover(&self.state, "league").league.clone()
    }

    fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| StoreError::LockPoisoned("record win"))?;
        let State { league, tape } = &mut *guard;

        let added = match league.find_mut(name) {
            Some(player) => {
                player.wins = player
                    .wins
                    .checked_add(1)
                    .ok_or_else(|| StoreError::WinsOverflow(name.to_string()))?;
                false
            }
            None => {
                league.push(Player::new(name, 1));
                true
            }
        };

        match persist(league, tape) {
            Ok(written) => {
                log::debug!("persisted {} players ({} bytes)", league.len(), written);
                Ok(())
            }
            Err(err) => {
                if added {
                    league.pop();
                } else if let Some(player) = league.find_mut(name) {
                    player.wins -= 1;
                }
                log::error!("failed to record win for {:?}, change rolled back: {}", name, err);

                // The failed write may have truncated the file; put the
                // previous document back if the backing still accepts writes.
                if let Err(restore) = persist(league, tape) {
                    log::error!("failed to restore previous league: {}", restore);
                }
                Err(err)
            }
        }
    }
}
