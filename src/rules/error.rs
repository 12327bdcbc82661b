//! Errors returned by session operations.
//!
//! Every error is an expected gameplay outcome. A rejected operation
//! leaves the session untouched, with one exception: `DeckExhausted`
//! ends the session in a draw.

use thiserror::Error;

use crate::core::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Unknown family or member name.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Mutating call on a finished session.
    #[error("the game is over")]
    OperationAfterGameOver,

    /// Draw attempted with an empty deck.
    #[error("the deck is empty")]
    DeckExhausted,

    /// A player tried to move out of turn.
    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    /// Deal or arranged layout that does not fit the 42-card universe.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
