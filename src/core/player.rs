//! Players: seat identifiers and per-player game data.
//!
//! ## PlayerId
//!
//! Seat index in a two-player game. `PlayerId::FIRST` opens the game.
//!
//! ## Player
//!
//! A name, the hand, and the families the player has completed. A
//! completed family leaves the hand and is archived with its six cards;
//! completions never undo.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use super::card::{Card, Family, FAMILY_COUNT};
use super::hand::{FamilyCards, Hand};
use crate::rules::GameError;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Families completed by a single completion pass.
pub type Completions = SmallVec<[Family; 2]>;

/// Seat identifier: 0 or 1.
///
/// Serialized as the bare seat index; deserializing any other value fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a seat index.
    ///
    /// Returns `None` for anything but 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PLAYER_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| {
            GameError::InvalidLayout(format!(
                "seat {index} does not exist at a {PLAYER_COUNT}-player table"
            ))
        })
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
    completed: SmallVec<[Family; FAMILY_COUNT]>,
    archive: FxHashMap<Family, FamilyCards>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            completed: SmallVec::new(),
            archive: FxHashMap::default(),
        }
    }

    /// Families completed so far, in completion order.
    #[must_use]
    pub fn completed_families(&self) -> &[Family] {
        &self.completed
    }

    #[must_use]
    pub fn has_completed(&self, family: Family) -> bool {
        self.completed.contains(&family)
    }

    /// Whether every family has been completed.
    #[must_use]
    pub fn has_completed_all(&self) -> bool {
        self.completed.len() == FAMILY_COUNT
    }

    /// The six archived cards of a completed family.
    #[must_use]
    pub fn archived(&self, family: Family) -> Option<&[Card]> {
        self.archive.get(&family).map(|cards| cards.as_slice())
    }

    /// Every archived card, family by family in completion order.
    pub fn archived_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.completed
            .iter()
            .filter_map(|family| self.archive.get(family))
            .flat_map(|cards| cards.iter().copied())
    }

    /// Archive every family fully held in hand.
    ///
    /// Families are scanned in declaration order, skipping ones already
    /// completed. Returns the families completed by this pass; a second
    /// pass with no hand change in between returns nothing.
    pub fn check_completed_families(&mut self) -> Completions {
        let mut completed = Completions::new();

        for family in Family::ALL {
            if self.has_completed(family) || !self.hand.has_full_family(family) {
                continue;
            }

            let cards = self.hand.take_family(family);
            self.archive.insert(family, cards);
            self.completed.push(family);
            completed.push(family);

            info!(player = %self.name, %family, "family completed");
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Member;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
    }

    #[test]
    fn test_player_id_new() {
        assert_eq!(PlayerId::new(1), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::new(2), None);
        assert_eq!(PlayerId::all().count(), PLAYER_COUNT);
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::SECOND).unwrap();
        assert_eq!(json, "1");
        assert_eq!(serde_json::from_str::<PlayerId>(&json).unwrap(), PlayerId::SECOND);
    }

    #[test]
    fn test_player_id_rejects_unknown_seat() {
        assert!(serde_json::from_str::<PlayerId>("9").is_err());
        assert!(matches!(
            PlayerId::try_from(2),
            Err(GameError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_completion_archives_family() {
        let mut player = Player::new("Ada");
        player.hand = Family::Cat.cards().collect();
        player.hand.insert(Card::new(Family::Dog, Member::Son));

        let completed = player.check_completed_families();

        assert_eq!(completed.as_slice(), &[Family::Cat]);
        assert_eq!(player.hand.len(), 1);
        assert!(player.has_completed(Family::Cat));
        assert_eq!(player.archived(Family::Cat).map(<[Card]>::len), Some(6));
    }

    #[test]
    fn test_completion_is_idempotent() {
        let mut player = Player::new("Ada");
        player.hand = Family::Frog.cards().collect();

        assert_eq!(player.check_completed_families().len(), 1);
        let before = player.clone();

        assert!(player.check_completed_families().is_empty());
        assert_eq!(player, before);
    }

    #[test]
    fn test_multiple_completions_in_family_order() {
        let mut player = Player::new("Ada");
        player.hand = Family::Turtle
            .cards()
            .chain(Family::Dog.cards())
            .chain(Family::Monkey.cards().take(3))
            .collect();

        let completed = player.check_completed_families();

        assert_eq!(completed.as_slice(), &[Family::Dog, Family::Turtle]);
        assert_eq!(player.completed_families(), &[Family::Dog, Family::Turtle]);
        assert_eq!(player.hand.len(), 3);
        assert_eq!(player.archived_cards().count(), 12);
    }

    #[test]
    fn test_partial_family_is_kept() {
        let mut player = Player::new("Ada");
        player.hand = Family::Unicorn.cards().take(5).collect();

        assert!(player.check_completed_families().is_empty());
        assert_eq!(player.hand.len(), 5);
        assert!(!player.has_completed_all());
    }

    #[test]
    fn test_serialization() {
        let mut player = Player::new("Ada");
        player.hand = Family::Octopus.cards().collect();
        player.check_completed_families();

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
