//! # seven-families
//!
//! A two-player "Seven Families" card game engine.
//!
//! ## Rules
//!
//! 42 cards: seven families of six members. Each player is dealt seven
//! cards. On your turn you ask the opponent for a card; if they hold it,
//! it is yours, otherwise you draw from the deck. A family whose six
//! members you hold is set aside as completed. The first player to
//! complete all seven families wins; running out of deck ends the game
//! with no winner.
//!
//! ## Design
//!
//! - **Explicit state**: a `GameSession` value owns everything; there is
//!   no global state.
//! - **Pure outcomes**: operations return outcome values with the events
//!   they produced; a presentation layer renders from those.
//! - **Side channel**: sound and visual feedback go through `EventSink`,
//!   which the core never waits on.
//!
//! ## Modules
//!
//! - `core`: cards, hands, deck, players, RNG, configuration, moves
//! - `rules`: the session state machine, outcomes, errors, views
//! - `events`: game events, sinks, sound cues
//! - `table`: presentation-facing facade
//! - `strategy`: automated players

pub mod core;
pub mod events;
pub mod rules;
pub mod strategy;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Card, Family, Member, Hand, Deck, DiscardPile,
    Player, PlayerId, GameRng, SessionConfig,
    Move, MoveRecord,
};

pub use crate::rules::{
    GameSession, GameError, GameResult, SessionStatus,
    RequestOutcome, RequestResult, DrawOutcome, PlayerView,
};

pub use crate::events::{CueSettings, EventLog, EventSink, GameEvent, NullSink, SoundCue};

pub use crate::strategy::{RandomAsker, Strategy};

pub use crate::table::Table;
