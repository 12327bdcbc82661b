//! Session configuration.

use serde::{Deserialize, Serialize};

use super::card::CARD_COUNT;
use super::player::{PlayerId, PLAYER_COUNT};
use crate::rules::GameError;

/// Cards dealt to each player at setup.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Session setup parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Display names, indexed by seat.
    pub player_names: [String; PLAYER_COUNT],

    /// Cards dealt to each player (default: 7).
    pub hand_size: usize,

    /// Shuffle seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a new config with a custom name for one seat.
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names[player.index()] = name.into();
        self
    }

    /// Create a new config with a custom hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the deal fits in the deck.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.hand_size * PLAYER_COUNT > CARD_COUNT {
            return Err(GameError::InvalidLayout(format!(
                "cannot deal {} cards to {} players from a {}-card deck",
                self.hand_size, PLAYER_COUNT, CARD_COUNT
            )));
        }
        Ok(())
    }
}
