//! Values returned by session operations.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Completions, PlayerId};
use crate::events::GameEvent;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed all seven families.
    Winner(PlayerId),
    /// The deck ran out; nobody won.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Where the session stands after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Waiting on `current` to move.
    InProgress { current: PlayerId },
    /// Terminal.
    Finished(GameResult),
}

impl SessionStatus {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionStatus::Finished(_))
    }
}

/// How a request resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestResult {
    /// The opponent handed the card over.
    Success,
    /// The opponent did not hold it. The asker drew `drawn`, or nothing
    /// if the deck was empty (which ends the game in a draw).
    Failure { drawn: Option<Card> },
}

/// Outcome of `GameSession::request_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOutcome {
    /// The requested card.
    pub card: Card,
    pub result: RequestResult,
    /// Families the asker completed this turn.
    pub completed: Completions,
    pub status: SessionStatus,
    /// Notifications for the presentation layer, in order.
    pub events: Vec<GameEvent>,
}

impl RequestOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result == RequestResult::Success
    }
}

/// Outcome of `GameSession::draw_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The drawn card.
    pub card: Card,
    /// Families the player completed this turn.
    pub completed: Completions,
    pub status: SessionStatus,
    pub events: Vec<GameEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
        assert_eq!(result.winner(), Some(PlayerId::SECOND));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::FIRST));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_status() {
        assert!(!SessionStatus::InProgress { current: PlayerId::FIRST }.is_finished());
        assert!(SessionStatus::Finished(GameResult::Draw).is_finished());
    }
}
