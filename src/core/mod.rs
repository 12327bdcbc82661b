//! Core game types: cards, hands, deck, players, RNG, configuration, moves.
//!
//! These are plain data types with local invariants. The turn rules that
//! tie them together live in `rules`.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod hand;
pub mod player;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use card::{Card, Family, Member, CARD_COUNT, FAMILY_COUNT, MEMBER_COUNT};
pub use config::{SessionConfig, DEFAULT_HAND_SIZE};
pub use deck::{Deck, DiscardPile};
pub use hand::{FamilyCards, Hand};
pub use player::{Completions, Player, PlayerId, PLAYER_COUNT};
pub use rng::GameRng;
