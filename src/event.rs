//! Round event types produced by the round engine.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::card::Card;
use crate::table::Table;

/// Settlement of a single seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatResult {
    /// The seat index.
    pub seat: usize,
    /// Name of the player who played the hand.
    pub player_name: String,
    /// Money moved, from the house's side: positive when the player lost,
    /// negative when the player won, zero on a push.
    pub delta: i64,
}

/// The occupant of a seat after turnover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupant {
    /// Player name.
    pub name: String,
    /// Balance after the round.
    pub balance: i64,
    /// Rounds left after the round.
    pub rounds_left: i64,
}

/// State of a seat after turnover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatSnapshot {
    /// The seat index.
    pub seat: usize,
    /// Who sits there now, if anyone.
    pub occupant: Option<Occupant>,
}

/// Everything that happened at one table in one round.
///
/// Events are built once by [`crate::Casino::play_round`] and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundEvent {
    /// The table id.
    pub table_id: usize,
    /// The round number at the table.
    pub round: u64,
    /// Bets by seat index, for seats occupied when the round started.
    pub bets: BTreeMap<usize, i64>,
    /// Settlements in seat order.
    pub results: Vec<SeatResult>,
    /// Every seat after turnover.
    pub seats_after: Vec<SeatSnapshot>,
    /// Change in casino profit over the round.
    pub profit_delta: i64,
    /// Final hand of each seat that played, by seat index.
    pub hands: BTreeMap<usize, Vec<Card>>,
    /// The dealer's final hand.
    pub dealer_hand: Vec<Card>,
}

impl RoundEvent {
    /// Returns the settlement of the named player, ignoring case.
    #[must_use]
    pub fn result_for(&self, name: &str) -> Option<&SeatResult> {
        self.results
            .iter()
            .find(|r| r.player_name.eq_ignore_ascii_case(name))
    }

    /// Returns the snapshot of the seat holding the named player, ignoring case.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<(usize, &Occupant)> {
        self.seats_after.iter().find_map(|s| {
            s.occupant
                .as_ref()
                .filter(|o| o.name.eq_ignore_ascii_case(name))
                .map(|o| (s.seat, o))
        })
    }

    /// Returns the number of occupied seats after turnover.
    #[must_use]
    pub fn seated(&self) -> usize {
        self.seats_after
            .iter()
            .filter(|s| s.occupant.is_some())
            .count()
    }
}

/// Captures every seat of `table` as it stands now.
pub(crate) fn snapshot_seats(table: &Table) -> Vec<SeatSnapshot> {
    table
        .seats()
        .iter()
        .map(|seat| SeatSnapshot {
            seat: seat.index(),
            occupant: seat.player().map(|p| Occupant {
                name: p.name().to_owned(),
                balance: p.balance,
                rounds_left: p.rounds_left,
            }),
        })
        .collect()
}
