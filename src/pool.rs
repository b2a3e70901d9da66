//! The queue of players waiting for a seat.

use std::collections::VecDeque;

use crate::player::Player;

/// Players waiting for a seat, served first in, first out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitingPool {
    players: VecDeque<Player>,
}

impl WaitingPool {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: VecDeque::new(),
        }
    }

    /// Adds a player to the back of the queue.
    pub fn push_back(&mut self, player: Player) {
        self.players.push_back(player);
    }

    /// Removes the player at the front of the queue.
    pub fn pop_front(&mut self) -> Option<Player> {
        self.players.pop_front()
    }

    /// Iterates players from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns the number of waiting players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl From<Vec<Player>> for WaitingPool {
    fn from(players: Vec<Player>) -> Self {
        Self {
            players: players.into(),
        }
    }
}

impl FromIterator<Player> for WaitingPool {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}
