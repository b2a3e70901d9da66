//! Player registry across pools, and roster persistence.
//!
//! The roster file is a JSON array of player records:
//!
//! ```json
//! [
//!   {
//!     "first_name": "Ada",
//!     "last_name": "Lovelace",
//!     "email": "ada.lovelace0@example.com",
//!     "player_id": 0,
//!     "player_type": "casual",
//!     "money_left": 1500,
//!     "rounds_left": 7,
//!     "history": [["win", 40], ["push", 25]]
//!   }
//! ]
//! ```
//!
//! `history` may be omitted and defaults to empty.

use std::fs;
use std::path::{Path, PathBuf};

use crate::casino::Casino;
use crate::error::RosterError;
use crate::player::Player;
use crate::pool::WaitingPool;

/// Where a player currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whereabouts {
    /// Seated at a table.
    Seated {
        /// The table id.
        table: usize,
        /// The seat index.
        seat: usize,
    },
    /// In the waiting pool.
    Waiting,
    /// In the finished pool.
    Finished,
}

/// A player found by [`Roster::locate`].
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    /// The player's record.
    pub player: &'a Player,
    /// Which pool owns the player.
    pub whereabouts: Whereabouts,
}

/// Head counts per pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolCounts {
    /// Players seated at a table.
    pub active: usize,
    /// Players waiting for a seat.
    pub waiting: usize,
    /// Players who have left their seat.
    pub finished: usize,
}

/// Read-only view over every player in the casino.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    casino: &'a Casino,
    waiting: &'a WaitingPool,
}

impl<'a> Roster<'a> {
    /// Creates a roster over a casino and its waiting pool.
    #[must_use]
    pub const fn new(casino: &'a Casino, waiting: &'a WaitingPool) -> Self {
        Self { casino, waiting }
    }

    /// Returns every player: seated ones in table and seat order, then the
    /// waiting pool front to back, then the finished pool.
    #[must_use]
    pub fn players(&self) -> Vec<&'a Player> {
        self.casino
            .tables()
            .iter()
            .flat_map(|t| t.players())
            .chain(self.waiting.iter())
            .chain(self.casino.finished())
            .collect()
    }

    /// Finds a player by first name, ignoring case.
    ///
    /// Seats are searched first, then the waiting pool, then the finished
    /// pool.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<Located<'a>> {
        for table in self.casino.tables() {
            for seat in table.seats() {
                if let Some(player) = seat.player().filter(|p| p.is_named(name)) {
                    return Some(Located {
                        player,
                        whereabouts: Whereabouts::Seated {
                            table: table.id(),
                            seat: seat.index(),
                        },
                    });
                }
            }
        }

        let waiting = self.waiting.iter().map(|p| (p, Whereabouts::Waiting));
        let finished = self
            .casino
            .finished()
            .iter()
            .map(|p| (p, Whereabouts::Finished));
        waiting
            .chain(finished)
            .find(|(p, _)| p.is_named(name))
            .map(|(player, whereabouts)| Located {
                player,
                whereabouts,
            })
    }

    /// Returns head counts per pool.
    #[must_use]
    pub fn counts(&self) -> PoolCounts {
        PoolCounts {
            active: self.casino.seated(),
            waiting: self.waiting.len(),
            finished: self.casino.finished().len(),
        }
    }
}

/// Serializes players to the roster JSON format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(players: &[&Player]) -> Result<String, RosterError> {
    Ok(serde_json::to_string_pretty(players)?)
}

/// Parses players from the roster JSON format.
///
/// # Errors
///
/// Returns [`RosterError::InvalidRecord`] if a record is malformed.
pub fn from_json(json: &str) -> Result<Vec<Player>, RosterError> {
    Ok(serde_json::from_str(json)?)
}

/// Writes players to a roster file, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(path: &Path, players: &[&Player]) -> Result<(), RosterError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, to_json(players)?)?;
    Ok(())
}

/// Reads players from a roster file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record is malformed.
pub fn load(path: &Path) -> Result<Vec<Player>, RosterError> {
    from_json(&fs::read_to_string(path)?)
}

/// Receives the full roster after every tick.
pub trait RosterStore {
    /// Stores a snapshot of every player.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot could not be stored.
    fn store(&mut self, players: &[&Player]) -> Result<(), RosterError>;
}

/// Stores roster snapshots in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRoster {
    path: PathBuf,
}

impl JsonRoster {
    /// Creates a store writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonRoster {
    fn store(&mut self, players: &[&Player]) -> Result<(), RosterError> {
        save(&self.path, players)
    }
}
