//! Moves and move history.
//!
//! A turn is one of two moves: ask the opponent for a card, or draw from
//! the deck. A failed request also draws, but that draw is part of the
//! request move rather than a move of its own.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::PlayerId;

/// A player's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Ask the opponent for a card.
    Request(Card),
    /// Draw the top card of the deck.
    Draw,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Request(card) => write!(f, "ask for {card}"),
            Move::Draw => f.write_str("draw"),
        }
    }
}

/// A resolved move with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move taken.
    pub mv: Move,

    /// Turn number when the move was taken (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}
