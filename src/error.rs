//! Error types for casino operations.

use thiserror::Error;

/// A card was drawn from an empty shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct ShoeExhausted;

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The shoe ran out of cards mid-round.
    #[error("shoe exhausted during round")]
    ShoeExhausted,
    /// No table exists at this index.
    #[error("table {0} not found")]
    TableNotFound(usize),
}

impl From<ShoeExhausted> for RoundError {
    fn from(_: ShoeExhausted) -> Self {
        Self::ShoeExhausted
    }
}

/// Errors that can occur while loading or saving the roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be read or written.
    #[error("roster i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A persisted player record is malformed.
    #[error("invalid persisted record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

/// Errors that can occur while rendering a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The tracked player is not seated, waiting, or finished.
    #[error("player {0} no longer in simulation")]
    UnknownTrackedPlayer(String),
    /// Writing to the output sink failed.
    #[error("failed to write view: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in the casino configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe needs at least one deck.
    #[error("shoe needs at least one deck")]
    NoDecks,
    /// The casino has no tables.
    #[error("casino needs at least one table")]
    NoTables,
    /// A table was configured without seats.
    #[error("table {0} has no seats")]
    NoSeats(usize),
    /// Seat counts were given for some tables but not all.
    #[error("got {seats} seat counts for {tables} tables")]
    SeatLayoutMismatch {
        /// Number of tables.
        tables: usize,
        /// Number of seat counts given.
        seats: usize,
    },
    /// The tracked table does not exist.
    #[error("tracked table {table} is out of range (0 to {max})")]
    TrackedTableOutOfRange {
        /// The requested table id.
        table: usize,
        /// The highest valid table id.
        max: usize,
    },
    /// The tracked player name is empty.
    #[error("tracked player name is empty")]
    EmptyPlayerName,
    /// The player category weights cannot be sampled.
    #[error("invalid player category weights: {0}")]
    CategoryWeights(#[from] rand::distr::weighted::Error),
}

/// Errors that abort a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
