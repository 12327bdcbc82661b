//! Read-only snapshot of a session from one seat.
//!
//! Mirrors what a player at the table can see: their own hand, the
//! opponent's hand size, both players' completed families, the deck
//! size and the last requested card.

use serde::{Deserialize, Serialize};

use super::outcome::SessionStatus;
use super::session::GameSession;
use crate::core::{Card, Family, PlayerId, PLAYER_COUNT};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// The seat this view belongs to.
    pub player: PlayerId,

    /// Display names, indexed by seat.
    pub names: [String; PLAYER_COUNT],

    /// Own hand in display order.
    pub hand: Vec<Card>,

    pub opponent_hand_size: usize,

    /// Completed families, indexed by seat.
    pub completed: [Vec<Family>; PLAYER_COUNT],

    pub deck_size: usize,

    pub discard_top: Option<Card>,

    pub status: SessionStatus,
}

impl PlayerView {
    pub(crate) fn new(session: &GameSession, player: PlayerId) -> Self {
        let [first, second] = session.players();

        Self {
            player,
            names: [first.name.clone(), second.name.clone()],
            hand: session.player(player).hand.sorted(),
            opponent_hand_size: session.player(player.opponent()).hand.len(),
            completed: [
                first.completed_families().to_vec(),
                second.completed_families().to_vec(),
            ],
            deck_size: session.deck_size(),
            discard_top: session.discard_top(),
            status: session.status(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.names[self.player.index()]
    }

    /// Whether it is this seat's turn.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.status == SessionStatus::InProgress { current: self.player }
    }

    /// Own completed families.
    #[must_use]
    pub fn my_completed(&self) -> &[Family] {
        &self.completed[self.player.index()]
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.binary_search(&card).is_ok()
    }
}
