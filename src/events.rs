//! Game events and the notification side channel.
//!
//! Session operations return the events they produced; the `Table`
//! facade forwards them to an `EventSink` once the state transition is
//! complete. Sinks return nothing, so a slow or broken sink (say, an
//! audio device that failed to open) cannot fail or stall a turn.
//!
//! ## Sound cues
//!
//! `SoundCue` maps events to opaque clip identifiers. Playing them is
//! the sink's business.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Family, PlayerId};

/// Something that happened during a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session was dealt; `first` opens.
    SessionStarted { first: PlayerId },
    /// A request succeeded.
    CardReceived {
        player: PlayerId,
        from: PlayerId,
        card: Card,
    },
    /// The opponent did not hold the requested card.
    RequestFailed { player: PlayerId, card: Card },
    /// A card moved from the deck to a hand.
    CardDrawn { player: PlayerId, card: Card },
    FamilyCompleted { player: PlayerId, family: Family },
    TurnPassed { to: PlayerId },
    GameWon { winner: PlayerId },
    /// A draw found the deck empty; the session ended without a winner.
    DeckExhausted,
}

impl GameEvent {
    /// The sound that accompanies this event, if any.
    #[must_use]
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::CardReceived { .. } | GameEvent::FamilyCompleted { .. } => {
                Some(SoundCue::Correct)
            }
            GameEvent::RequestFailed { .. } => Some(SoundCue::Fail),
            GameEvent::GameWon { .. } => Some(SoundCue::Victory),
            GameEvent::SessionStarted { .. } => Some(SoundCue::Background),
            GameEvent::CardDrawn { .. }
            | GameEvent::TurnPassed { .. }
            | GameEvent::DeckExhausted => None,
        }
    }
}

/// Audio clips the game asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Correct,
    Fail,
    Victory,
    /// Looping background track.
    Background,
}

impl SoundCue {
    /// Asset path of the clip.
    #[must_use]
    pub const fn clip(self) -> &'static str {
        match self {
            SoundCue::Correct => "sounds/correct.mp3",
            SoundCue::Fail => "sounds/fail.mp3",
            SoundCue::Victory => "sounds/victory.wav",
            SoundCue::Background => "sounds/bg_music.mp3",
        }
    }
}

/// Volume for sound cues, as a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueSettings {
    volume: u8,
}

impl Default for CueSettings {
    fn default() -> Self {
        Self { volume: 50 }
    }
}

impl CueSettings {
    pub const MAX_VOLUME: u8 = 100;

    /// Create settings with the given volume, clamped to 0-100.
    #[must_use]
    pub fn with_volume(volume: u8) -> Self {
        Self {
            volume: volume.min(Self::MAX_VOLUME),
        }
    }

    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(Self::MAX_VOLUME);
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.volume == 0
    }
}

/// Receiver for session events.
pub trait EventSink {
    /// Called once per event, in order, after the transition completed.
    fn notify(&mut self, event: &GameEvent);
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Sink that keeps every event it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Cues for the logged events, in order.
    pub fn cues(&self) -> impl Iterator<Item = SoundCue> + '_ {
        self.events.iter().filter_map(GameEvent::sound_cue)
    }

    /// Take the logged events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}
