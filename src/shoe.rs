//! Multi-deck shoe.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeExhausted;

/// Number of decks in a default shoe.
pub const DEFAULT_DECKS: u8 = 20;

/// Number of shuffle passes applied by [`Shoe::shuffle`].
const SHUFFLE_PASSES: usize = 3;

/// A shoe of one or more standard decks.
///
/// Cards are drawn from the end of the underlying vector, so the shoe behaves
/// as a stack. A shoe is never refilled; build a new one per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates an unshuffled shoe with `num_decks` full decks.
    #[must_use]
    pub fn new(num_decks: u8) -> Self {
        let mut cards = Vec::with_capacity(usize::from(num_decks) * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Creates a shoe that yields `draws` in the given order.
    ///
    /// Useful for replaying a known sequence of cards.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the shoe in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for _ in 0..SHUFFLE_PASSES {
            self.cards.shuffle(rng);
        }
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        self.cards.pop().ok_or(ShoeExhausted)
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new(DEFAULT_DECKS)
    }
}
