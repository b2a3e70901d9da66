//! Hand representation and the fixed drawing rule.

use crate::card::Card;
use crate::error::ShoeExhausted;
use crate::shoe::Shoe;

/// Totals at or above this value stop drawing.
pub const STAND_THRESHOLD: u32 = 18;

/// Highest total that is not a bust.
pub const BUST_LIMIT: u32 = 21;

/// A hand of cards held by a seat or the dealer.
///
/// The total is the raw sum of card values. An ace is always worth 11; there
/// are no soft totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Draws two cards from the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if the shoe runs out.
    pub fn deal(shoe: &mut Shoe) -> Result<Self, ShoeExhausted> {
        let mut hand = Self::new();
        hand.add_card(shoe.draw()?);
        hand.add_card(shoe.draw()?);
        Ok(hand)
    }

    /// Draws until the total reaches [`STAND_THRESHOLD`].
    ///
    /// The same rule is used for players and the dealer. A hand that passes
    /// 21 stops drawing since it is already above the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if the shoe runs out.
    pub fn play_out(&mut self, shoe: &mut Shoe) -> Result<(), ShoeExhausted> {
        while self.value() < STAND_THRESHOLD {
            self.add_card(shoe.draw()?);
        }
        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the hand and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the raw total of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.value())).sum()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
