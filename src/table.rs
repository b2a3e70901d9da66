//! Tables and seats.

use crate::player::Player;
use crate::pool::WaitingPool;

/// A seat at a table, optionally holding a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    index: usize,
    player: Option<Player>,
}

impl Seat {
    /// Creates an empty seat.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            player: None,
        }
    }

    /// Returns the seat's position at the table.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the seated player, if any.
    #[must_use]
    pub const fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Returns the seated player mutably, if any.
    pub const fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// Returns whether the seat is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.player.is_none()
    }

    /// Seats a player, handing back whoever was there before.
    pub fn sit(&mut self, player: Player) -> Option<Player> {
        self.player.replace(player)
    }

    /// Removes and returns the seated player.
    pub fn vacate(&mut self) -> Option<Player> {
        self.player.take()
    }
}

/// A blackjack table with a fixed number of seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: usize,
    seats: Vec<Seat>,
    round: u64,
}

impl Table {
    /// Creates a table with `num_seats` empty seats, starting at round 1.
    #[must_use]
    pub fn new(id: usize, num_seats: usize) -> Self {
        Self {
            id,
            seats: (0..num_seats).map(Seat::new).collect(),
            round: 1,
        }
    }

    /// Returns the table id.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Returns the number of the next round to be played.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Advances the round counter.
    pub const fn advance_round(&mut self) {
        self.round += 1;
    }

    /// Returns the seats in index order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the seats mutably.
    pub fn seats_mut(&mut self) -> &mut [Seat] {
        &mut self.seats
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Iterates the seated players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().filter_map(Seat::player)
    }

    /// Returns the number of occupied seats.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.players().count()
    }

    /// Moves every finished player out of their seat into `finished`.
    ///
    /// Returns the number of players evicted.
    pub fn evict_finished(&mut self, finished: &mut Vec<Player>) -> usize {
        let mut evicted = 0;
        for seat in &mut self.seats {
            if seat.player().is_some_and(Player::is_finished) {
                if let Some(player) = seat.vacate() {
                    finished.push(player);
                    evicted += 1;
                }
            }
        }
        evicted
    }

    /// Fills empty seats, in seat order, from the front of the waiting pool.
    ///
    /// Returns the number of players seated.
    pub fn fill_empty_seats(&mut self, waiting: &mut WaitingPool) -> usize {
        let mut seated = 0;
        for seat in self.seats.iter_mut().filter(|s| s.is_empty()) {
            let Some(player) = waiting.pop_front() else {
                break;
            };
            seat.sit(player);
            seated += 1;
        }
        seated
    }
}
