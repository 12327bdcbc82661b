//! Automated players.
//!
//! A `Strategy` picks a move from what its seat can see. The terminal
//! front end uses `RandomAsker` for the second seat when asked to, and
//! the tests use it to drive whole games.

use crate::core::{Card, Family, GameRng, Move};
use crate::rules::PlayerView;

/// Chooses a move for the seat a `PlayerView` belongs to.
pub trait Strategy {
    fn choose_move(&self, view: &PlayerView, rng: &mut GameRng) -> Move;
}

/// Asks for a random missing member of a family already in hand.
///
/// With an empty hand it draws, or, when the deck is empty too, asks for
/// any card it could still collect.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAsker;

impl RandomAsker {
    /// Cards worth asking for: missing members of families in hand.
    #[must_use]
    pub fn candidates(view: &PlayerView) -> Vec<Card> {
        let mut families: Vec<Family> = view.hand.iter().map(|c| c.family).collect();
        families.dedup();

        families
            .into_iter()
            .flat_map(Family::cards)
            .filter(|&card| !view.holds(card))
            .collect()
    }
}

impl Strategy for RandomAsker {
    fn choose_move(&self, view: &PlayerView, rng: &mut GameRng) -> Move {
        let candidates = Self::candidates(view);
        if let Some(&card) = rng.choose(&candidates) {
            return Move::Request(card);
        }

        if view.deck_size > 0 {
            return Move::Draw;
        }

        let fallback: Vec<Card> = Card::universe()
            .filter(|card| !view.my_completed().contains(&card.family) && !view.holds(*card))
            .collect();
        rng.choose(&fallback).map_or(Move::Draw, |&card| Move::Request(card))
    }
}
