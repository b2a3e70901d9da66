//! Simulation configuration options.

use std::time::Duration;

use crate::error::ConfigError;
use crate::event::RoundEvent;
use crate::shoe::DEFAULT_DECKS;

/// Which slice of the floor is shown after each tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Summary of every table.
    #[default]
    Casino,
    /// Detailed breakdown of one table, by id.
    Table(usize),
    /// Live view of one player, by first name (case-insensitive).
    Player(String),
}

impl ViewMode {
    /// Picks the events this view is interested in.
    ///
    /// ```
    /// use bjfloor::ViewMode;
    ///
    /// assert!(ViewMode::Table(3).select(&[]).is_empty());
    /// ```
    #[must_use]
    pub fn select<'e>(&self, events: &'e [RoundEvent]) -> Vec<&'e RoundEvent> {
        match self {
            Self::Casino => events.iter().collect(),
            Self::Table(id) => events.iter().filter(|e| e.table_id == *id).collect(),
            Self::Player(name) => events
                .iter()
                .filter(|e| e.result_for(name).is_some())
                .collect(),
        }
    }
}

/// Configuration options for a simulation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use std::time::Duration;
/// use bjfloor::{CasinoOptions, ViewMode};
///
/// let options = CasinoOptions::default()
///     .with_decks(6)
///     .with_duration_minutes(10)
///     .with_tick_delay(Duration::ZERO)
///     .with_view(ViewMode::Table(0));
/// assert!(options.validate(2).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasinoOptions {
    /// Number of decks in each round's shoe.
    pub decks: u8,
    /// Simulated duration of the run, in minutes.
    pub duration_minutes: u64,
    /// Real-time pause between ticks.
    pub tick_delay: Duration,
    /// What to show after each tick.
    pub view: ViewMode,
}

impl Default for CasinoOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            duration_minutes: 32,
            tick_delay: Duration::from_millis(500),
            view: ViewMode::Casino,
        }
    }
}

impl CasinoOptions {
    /// Sets the number of decks per shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjfloor::CasinoOptions;
    ///
    /// let options = CasinoOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the simulated duration in minutes.
    #[must_use]
    pub fn with_duration_minutes(mut self, minutes: u64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the pause between ticks.
    #[must_use]
    pub fn with_tick_delay(mut self, delay: Duration) -> Self {
        self.tick_delay = delay;
        self
    }

    /// Sets the view mode.
    ///
    /// # Example
    ///
    /// ```
    /// use bjfloor::{CasinoOptions, ViewMode};
    ///
    /// let options = CasinoOptions::default().with_view(ViewMode::Player("Ada".into()));
    /// assert_eq!(options.view, ViewMode::Player("Ada".into()));
    /// ```
    #[must_use]
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// Checks the options against a casino with `table_count` tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe has no decks, the tracked table does not
    /// exist, or the tracked player name is blank.
    pub fn validate(&self, table_count: usize) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        match &self.view {
            ViewMode::Casino => Ok(()),
            ViewMode::Table(table) if *table >= table_count => {
                Err(ConfigError::TrackedTableOutOfRange {
                    table: *table,
                    max: table_count.saturating_sub(1),
                })
            }
            ViewMode::Table(_) => Ok(()),
            ViewMode::Player(name) if name.trim().is_empty() => {
                Err(ConfigError::EmptyPlayerName)
            }
            ViewMode::Player(_) => Ok(()),
        }
    }
}
