//! League - the ordered table of players and their win counts.
//!
//! The league is what gets persisted: one JSON array, one object per player,
//! in insertion order.
//!
//! ```ignore
//! let league = League::from_json(r#"[{"Name":"Alam","Wins":10}]"#)?;
//! assert_eq!(league.find("Alam").map(|p| p.wins), Some(10));
//! ```

use std::collections::HashSet;
use std::io::{self, Read};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single player and the number of wins recorded for them.
///
/// Field names are PascalCase on the wire to stay readable by existing
/// database files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub name: String,
    pub wins: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u64) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// Error raised while decoding a league document.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("failed to read league document: {0}")]
    Io(#[from] io::Error),
    #[error("malformed league document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("league document lists player {0:?} more than once")]
    DuplicateName(String),
}

/// Ordered collection of players, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl League {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Decode a league from a reader. Empty (or whitespace-only) input is an
    /// empty league, not an error.
    pub fn parse<R: Read>(mut source: R) -> Result<Self, LeagueError> {
        let mut buf = Vec::new();
        source.read_to_end(&mut buf)?;
        Self::from_slice(&buf)
    }

    /// Decode a league from an in-memory document.
    pub fn from_json(source: &str) -> Result<Self, LeagueError> {
        Self::from_slice(source.as_bytes())
    }

    /// Decode a league from raw bytes. Invalid UTF-8 is a malformed document.
    pub fn from_slice(source: &[u8]) -> Result<Self, LeagueError> {
        if source.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }
        let league: Self = serde_json::from_slice(source)?;

        let duplicate = {
            let mut seen = HashSet::with_capacity(league.len());
            league
                .iter()
                .find(|p| !seen.insert(p.name.as_str()))
                .map(|p| p.name.clone())
        };
        match duplicate {
            Some(name) => Err(LeagueError::DuplicateName(name)),
            None => Ok(league),
        }
    }

    /// Encode the whole league as one newline-terminated document.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut bytes = serde_json::to_vec(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Linear scan by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.name == name)
    }

    /// Like [`find`](Self::find), but the returned player is the one stored in
    /// the table, so mutating it updates the league.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.name == name)
    }

    /// Append a player. Callers must check [`find`](Self::find) first; the
    /// table does not deduplicate.
    pub(crate) fn push(&mut self, player: Player) {
        self.0.push(player);
    }

    pub(crate) fn pop(&mut self) -> Option<Player> {
        self.0.pop()
    }

    pub fn players(&self) -> &[Player] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }
}

impl From<Vec<Player>> for League {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl FromIterator<Player> for League {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for League {
    type Item = Player;
    type IntoIter = std::vec::IntoIter<Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a League {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
