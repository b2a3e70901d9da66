//! The casino aggregate and its round engine.

use crate::error::ConfigError;
use crate::player::Player;
use crate::pool::WaitingPool;
use crate::shoe::DEFAULT_DECKS;
use crate::table::Table;

mod revival;
mod round;
mod showdown;

pub use revival::{REVIVE_BALANCE, REVIVE_ROUNDS};
pub use round::{MAX_BET, MIN_BET};
pub use showdown::resolve;

/// A casino floor: its tables, the players who have finished playing, and the
/// house ledger.
///
/// Profit is kept from the house's point of view, so it grows when players
/// lose. The casino owns every table; players waiting for a seat live in a
/// separate [`WaitingPool`] that is lent to each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Casino {
    name: String,
    decks: u8,
    tables: Vec<Table>,
    finished: Vec<Player>,
    profit: i64,
    hands_played: u64,
}

impl Casino {
    /// Creates an empty casino whose rounds use shoes of `decks` decks.
    #[must_use]
    pub fn new(name: impl Into<String>, decks: u8) -> Self {
        Self {
            name: name.into(),
            decks,
            tables: Vec::new(),
            finished: Vec::new(),
            profit: 0,
            hands_played: 0,
        }
    }

    /// Creates a casino with one table per entry of `seats`.
    ///
    /// Tables are numbered from 0 in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks, no tables, or a table without
    /// seats.
    pub fn with_tables(
        name: impl Into<String>,
        decks: u8,
        seats: &[usize],
    ) -> Result<Self, ConfigError> {
        if decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if seats.is_empty() {
            return Err(ConfigError::NoTables);
        }
        if let Some(table) = seats.iter().position(|&n| n == 0) {
            return Err(ConfigError::NoSeats(table));
        }

        let mut casino = Self::new(name, decks);
        for &count in seats {
            casino.add_table(count);
        }
        Ok(casino)
    }

    /// Adds a table with `num_seats` seats and returns its id.
    pub fn add_table(&mut self, num_seats: usize) -> usize {
        let id = self.tables.len();
        self.tables.push(Table::new(id, num_seats));
        id
    }

    /// Returns the casino name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of decks per shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns all tables, in id order.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Returns the table with the given id.
    #[must_use]
    pub fn table(&self, id: usize) -> Option<&Table> {
        self.tables.get(id)
    }

    /// Returns the players who have left their seats.
    #[must_use]
    pub fn finished(&self) -> &[Player] {
        &self.finished
    }

    /// Returns the house profit so far.
    #[must_use]
    pub const fn profit(&self) -> i64 {
        self.profit
    }

    /// Returns the number of hands played across all tables.
    #[must_use]
    pub const fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn seated(&self) -> usize {
        self.tables.iter().map(Table::occupied).sum()
    }

    /// Fills empty seats at every table, in table order, from the waiting pool.
    ///
    /// Returns the number of players seated.
    pub fn fill_empty_seats(&mut self, waiting: &mut WaitingPool) -> usize {
        self.tables
            .iter_mut()
            .map(|table| table.fill_empty_seats(waiting))
            .sum()
    }
}

impl Default for Casino {
    fn default() -> Self {
        Self::new("Casino", DEFAULT_DECKS)
    }
}
