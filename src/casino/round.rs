use std::collections::BTreeMap;

use rand::Rng;

use crate::error::RoundError;
use crate::event::{RoundEvent, SeatResult, snapshot_seats};
use crate::hand::Hand;
use crate::pool::WaitingPool;
use crate::shoe::Shoe;
use crate::table::Seat;

use super::Casino;
use super::showdown::resolve;

/// Smallest bet a seated player places.
pub const MIN_BET: i64 = 10;

/// Largest bet a seated player places.
pub const MAX_BET: i64 = 100;

/// A seat's stake and cards for the current round.
struct Play {
    seat: usize,
    bet: i64,
    hand: Hand,
}

impl Casino {
    /// Plays one round at a table with a freshly shuffled shoe.
    ///
    /// Every seated player bets, is dealt in, draws to 18 and is settled
    /// against the dealer. Afterwards finished players leave for the finished
    /// pool and empty seats are filled from `waiting`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table does not exist or the shoe runs out. In
    /// both cases no player, table or ledger state has been touched.
    pub fn play_round<R: Rng>(
        &mut self,
        table: usize,
        waiting: &mut WaitingPool,
        rng: &mut R,
    ) -> Result<RoundEvent, RoundError> {
        let mut shoe = Shoe::new(self.decks);
        shoe.shuffle(rng);
        self.play_round_with_shoe(table, waiting, shoe, rng)
    }

    /// Plays one round at a table, drawing from `shoe` as given.
    ///
    /// The shoe is not shuffled. `rng` is only used for bets.
    ///
    /// # Errors
    ///
    /// Returns an error if the table does not exist or the shoe runs out. In
    /// both cases no player, table or ledger state has been touched.
    pub fn play_round_with_shoe<R: Rng>(
        &mut self,
        table: usize,
        waiting: &mut WaitingPool,
        mut shoe: Shoe,
        rng: &mut R,
    ) -> Result<RoundEvent, RoundError> {
        let Self {
            tables,
            finished,
            profit,
            hands_played,
            ..
        } = self;
        let table = tables
            .get_mut(table)
            .ok_or(RoundError::TableNotFound(table))?;
        let starting_profit = *profit;
        let round = table.round();

        let seats: Vec<usize> = table
            .seats()
            .iter()
            .filter(|s| !s.is_empty())
            .map(Seat::index)
            .collect();
        let bets: BTreeMap<usize, i64> = seats
            .iter()
            .map(|&seat| (seat, rng.random_range(MIN_BET..=MAX_BET)))
            .collect();

        // Every card comes out of the shoe before anything is settled.
        let mut plays = Vec::with_capacity(seats.len());
        for (&seat, &bet) in &bets {
            plays.push(Play {
                seat,
                bet,
                hand: Hand::deal(&mut shoe)?,
            });
        }
        let mut dealer = Hand::deal(&mut shoe)?;
        for play in &mut plays {
            play.hand.play_out(&mut shoe)?;
        }
        dealer.play_out(&mut shoe)?;

        *hands_played += plays.len() as u64;
        let dealer_total = dealer.value();
        let mut results = Vec::with_capacity(plays.len());
        for play in &plays {
            let Some(player) = table
                .seats_mut()
                .get_mut(play.seat)
                .and_then(Seat::player_mut)
            else {
                continue;
            };
            let outcome = resolve(play.hand.value(), dealer_total);
            let delta = player.settle(outcome, play.bet);
            *profit += delta;
            results.push(SeatResult {
                seat: play.seat,
                player_name: player.name().to_owned(),
                delta,
            });
        }

        for seat in table.seats_mut() {
            if let Some(player) = seat.player_mut() {
                player.rounds_left -= 1;
            }
        }
        let evicted = table.evict_finished(finished);
        let seated = table.fill_empty_seats(waiting);
        table.advance_round();

        log::debug!(
            "table {} round {}: {} hands, {} evicted, {} seated",
            table.id(),
            round,
            plays.len(),
            evicted,
            seated
        );

        Ok(RoundEvent {
            table_id: table.id(),
            round,
            bets,
            results,
            seats_after: snapshot_seats(table),
            profit_delta: *profit - starting_profit,
            hands: plays
                .into_iter()
                .map(|play| (play.seat, play.hand.into_cards()))
                .collect(),
            dealer_hand: dealer.into_cards(),
        })
    }
}
