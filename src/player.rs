//! Player records and their bounded outcome history.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Number of outcomes kept in a player's history.
pub const HISTORY_LEN: usize = 5;

/// Players below this balance leave their seat at turnover.
pub const MIN_BALANCE: i64 = 100;

/// Player category, fixing the initial balance and session length ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Small bankroll, short sessions.
    Casual,
    /// Medium bankroll, longer sessions.
    Regular,
    /// Larger bankroll, medium sessions.
    Aggressive,
    /// Large bankroll, long sessions.
    HighRoller,
}

impl Category {
    /// All categories with their generation weights (out of 100).
    pub const WEIGHTED: [(Self, u32); 4] = [
        (Self::Casual, 70),
        (Self::Regular, 20),
        (Self::Aggressive, 8),
        (Self::HighRoller, 2),
    ];

    /// Starting balance range.
    #[must_use]
    pub const fn balance_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Casual => 1000..=2500,
            Self::Regular => 2000..=4000,
            Self::Aggressive => 3000..=8000,
            Self::HighRoller => 8000..=20000,
        }
    }

    /// Session length range, in rounds.
    #[must_use]
    pub const fn rounds_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Casual => 5..=10,
            Self::Regular => 10..=20,
            Self::Aggressive => 8..=15,
            Self::HighRoller => 15..=40,
        }
    }
}

/// Result of a single hand from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player won the bet.
    Win,
    /// Player lost the bet.
    Loss,
    /// Tie, no money moved.
    Push,
}

impl Outcome {
    /// Returns the house's gain for a hand with this outcome.
    ///
    /// Positive means the house took the bet, negative means it paid out.
    #[must_use]
    pub const fn house_delta(self, bet: i64) -> i64 {
        match self {
            Self::Win => -bet,
            Self::Loss => bet,
            Self::Push => 0,
        }
    }
}

/// One history entry: the outcome and the stake it was played for.
///
/// Persisted as a two-element array, e.g. `["win", 40]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry(pub Outcome, pub i64);

/// The last [`HISTORY_LEN`] outcomes, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Entry>", into = "Vec<Entry>")]
pub struct History(VecDeque<Entry>);

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self(VecDeque::new())
    }

    /// Appends an entry, dropping the oldest once full.
    pub fn push(&mut self, outcome: Outcome, stake: i64) {
        self.0.push_back(Entry(outcome, stake));
        while self.0.len() > HISTORY_LEN {
            self.0.pop_front();
        }
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<Entry> {
        self.0.back().copied()
    }

    /// Iterates entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.0.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts entries with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|e| e.0 == outcome).count()
    }

    /// Percentage of recorded hands that were won, or 0 when empty.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "history holds at most five entries"
    )]
    pub fn win_rate(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.count(Outcome::Win) as f64 / self.0.len() as f64 * 100.0
    }

    /// Mean of the positive stakes in the history, or 0 when there are none.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "stakes and counts are small"
    )]
    pub fn average_bet(&self) -> f64 {
        let stakes: Vec<i64> = self.0.iter().map(|e| e.1).filter(|&s| s > 0).collect();
        if stakes.is_empty() {
            return 0.0;
        }
        stakes.iter().sum::<i64>() as f64 / stakes.len() as f64
    }
}

impl From<Vec<Entry>> for History {
    fn from(entries: Vec<Entry>) -> Self {
        let skip = entries.len().saturating_sub(HISTORY_LEN);
        Self(entries.into_iter().skip(skip).collect())
    }
}

impl From<History> for Vec<Entry> {
    fn from(history: History) -> Self {
        history.0.into()
    }
}

/// A casino patron.
///
/// Field names on disk follow the roster file format, see
/// [`crate::roster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// First name, also used as the display name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email, unique per pool.
    pub email: String,
    /// Numeric identifier.
    #[serde(rename = "player_id")]
    pub id: u32,
    /// Player category.
    #[serde(rename = "player_type")]
    pub category: Category,
    /// Current balance. May dip below zero before the player is evicted.
    #[serde(rename = "money_left")]
    pub balance: i64,
    /// Rounds left in the current session.
    pub rounds_left: i64,
    /// Recent outcomes.
    #[serde(default)]
    pub history: History,
}

impl Player {
    /// Returns the name shown at the table.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.first_name
    }

    /// Returns whether `name` matches this player's first name, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.first_name.eq_ignore_ascii_case(name)
    }

    /// Applies a settled hand: moves the balance and records the outcome.
    ///
    /// Returns the house's gain for the hand.
    pub fn settle(&mut self, outcome: Outcome, bet: i64) -> i64 {
        let house = outcome.house_delta(bet);
        self.balance -= house;
        self.history.push(outcome, bet);
        house
    }

    /// Returns whether the player should leave their seat.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.balance < MIN_BALANCE || self.rounds_left <= 0
    }
}
