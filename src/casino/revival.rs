use std::ops::RangeInclusive;

use rand::Rng;

use crate::pool::WaitingPool;

use super::Casino;

/// Balance added to each revived player.
pub const REVIVE_BALANCE: RangeInclusive<i64> = 500..=1000;

/// Rounds added to each revived player.
pub const REVIVE_ROUNDS: RangeInclusive<i64> = 3..=10;

impl Casino {
    /// Tops up every finished player and sends them to the back of the
    /// waiting pool.
    ///
    /// Returns the number of players revived.
    pub fn revive_finished<R: Rng>(&mut self, waiting: &mut WaitingPool, rng: &mut R) -> usize {
        let revived = self.finished.len();
        for mut player in self.finished.drain(..) {
            player.balance += rng.random_range(REVIVE_BALANCE);
            player.rounds_left += rng.random_range(REVIVE_ROUNDS);
            waiting.push_back(player);
        }
        revived
    }
}
