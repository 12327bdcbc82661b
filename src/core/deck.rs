//! The draw pile and the discard log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::rng::GameRng;

/// Draw pile. The top of the deck is the end of the sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// All 42 cards, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Card::universe().collect();
        rng.shuffle(&mut cards);
        cards.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pop the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Peek at the top card without drawing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl FromIterator<Card> for Deck {
    /// Build a deck from bottom to top: the last card yielded is drawn first.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Append-only log of requested cards.
///
/// Entries are records of what was asked for. They do not own the card:
/// a requested card that changed hands is both in a hand and in the log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    entries: Vector<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, card: Card) {
        self.entries.push_back(card);
    }

    /// Most recent entry.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.entries.back().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.entries.iter().copied()
    }
}
