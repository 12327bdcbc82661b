//! A player's hand.
//!
//! Logic treats the hand as a set: lookups scan for a matching card and
//! order does not matter. Display goes through [`Hand::sorted`], which
//! gives the stable family-then-member order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Family, MEMBER_COUNT};

/// The six cards of one family, as pulled out of a hand.
pub type FamilyCards = SmallVec<[Card; MEMBER_COUNT]>;

/// Cards held by a player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Add a card to the hand.
    pub fn insert(&mut self, card: Card) {
        debug_assert!(!self.contains(card), "{card} is already in hand");
        self.cards.push(card);
    }

    /// Remove a card from the hand.
    ///
    /// Returns the card if it was held.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let pos = self.cards.iter().position(|&c| c == card)?;
        Some(self.cards.swap_remove(pos))
    }

    /// Number of cards held from `family`.
    #[must_use]
    pub fn family_count(&self, family: Family) -> usize {
        self.cards.iter().filter(|c| c.family == family).count()
    }

    /// Whether the hand holds all six members of `family`.
    #[must_use]
    pub fn has_full_family(&self, family: Family) -> bool {
        self.family_count(family) == MEMBER_COUNT
    }

    /// Remove every card of `family`, returned in member order.
    pub fn take_family(&mut self, family: Family) -> FamilyCards {
        let mut taken: FamilyCards = SmallVec::new();
        self.cards.retain(|&c| {
            if c.family == family {
                taken.push(c);
                false
            } else {
                true
            }
        });
        taken.sort();
        taken
    }

    /// Iterate in holding order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Cards in display order (family, then member).
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort();
        cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Member;

    fn card(family: Family, member: Member) -> Card {
        Card::new(family, member)
    }

    #[test]
    fn test_insert_and_take() {
        let mut hand = Hand::new();
        hand.insert(card(Family::Cat, Member::Son));
        hand.insert(card(Family::Dog, Member::Mother));

        assert_eq!(hand.len(), 2);
        assert!(hand.contains(card(Family::Cat, Member::Son)));

        assert_eq!(
            hand.take(card(Family::Cat, Member::Son)),
            Some(card(Family::Cat, Member::Son))
        );
        assert_eq!(hand.take(card(Family::Cat, Member::Son)), None);
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_sorted_display_order() {
        let hand: Hand = [
            card(Family::Turtle, Member::Son),
            card(Family::Cat, Member::Daughter),
            card(Family::Cat, Member::Grandfather),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            hand.sorted(),
            vec![
                card(Family::Cat, Member::Grandfather),
                card(Family::Cat, Member::Daughter),
                card(Family::Turtle, Member::Son),
            ]
        );
    }

    #[test]
    fn test_full_family_detection() {
        let mut hand: Hand = Family::Frog.cards().take(5).collect();
        assert_eq!(hand.family_count(Family::Frog), 5);
        assert!(!hand.has_full_family(Family::Frog));

        hand.insert(card(Family::Frog, Member::Daughter));
        assert!(hand.has_full_family(Family::Frog));
    }

    #[test]
    fn test_take_family() {
        let mut dogs: Vec<Card> = Family::Dog.cards().collect();
        dogs.reverse();
        let mut hand: Hand = dogs.into_iter().collect();
        hand.insert(card(Family::Cat, Member::Father));

        let taken = hand.take_family(Family::Dog);

        assert_eq!(taken.len(), 6);
        assert_eq!(taken[0], card(Family::Dog, Member::Grandfather));
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.family_count(Family::Dog), 0);
    }
}
