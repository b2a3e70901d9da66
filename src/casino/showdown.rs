use std::cmp::Ordering;

use crate::hand::BUST_LIMIT;
use crate::player::Outcome;

/// Decides a hand given the player's and the dealer's totals.
///
/// A busted player loses even if the dealer also busts. Otherwise a dealer
/// bust wins for the player, and remaining hands compare totals.
///
/// ```
/// use bjfloor::{Outcome, resolve};
///
/// assert_eq!(resolve(23, 25), Outcome::Loss);
/// assert_eq!(resolve(18, 24), Outcome::Win);
/// assert_eq!(resolve(20, 19), Outcome::Win);
/// assert_eq!(resolve(19, 19), Outcome::Push);
/// ```
#[must_use]
pub fn resolve(player_total: u32, dealer_total: u32) -> Outcome {
    if player_total > BUST_LIMIT {
        return Outcome::Loss;
    }
    if dealer_total > BUST_LIMIT {
        return Outcome::Win;
    }
    match player_total.cmp(&dealer_total) {
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Loss,
        Ordering::Equal => Outcome::Push,
    }
}
