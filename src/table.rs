//! The presentation layer's handle on a game.
//!
//! `Table` holds the current session and an `EventSink`. Every
//! operation acts for the current player and forwards the resulting
//! events to the sink after the session has settled.
//!
//! ## Example
//!
//! ```
//! use seven_families::core::{Family, Member, SessionConfig};
//! use seven_families::events::EventLog;
//! use seven_families::table::Table;
//!
//! let mut table = Table::new(SessionConfig::default().with_seed(1), EventLog::new()).unwrap();
//! assert_eq!(table.deck_size(), 28);
//!
//! table.request_card(Family::Cat, Member::Father).unwrap();
//! assert_eq!(table.session().discard().len(), 1);
//! assert!(!table.sink().events().is_empty());
//! ```

use tracing::debug;

use crate::core::{Card, Family, Member, Move, Player, PlayerId, SessionConfig, PLAYER_COUNT};
use crate::events::{EventSink, GameEvent};
use crate::rules::{DrawOutcome, GameError, GameSession, RequestOutcome};

pub struct Table<S: EventSink> {
    config: SessionConfig,
    session: GameSession,
    sink: S,
}

impl<S: EventSink> Table<S> {
    /// Deal a first session.
    pub fn new(config: SessionConfig, sink: S) -> Result<Self, GameError> {
        let session = GameSession::new(&config)?;
        let mut table = Self {
            config,
            session,
            sink,
        };
        table.announce_start();
        Ok(table)
    }

    /// Replace the session with a freshly dealt one.
    ///
    /// A configured seed is reused only for the first session; later
    /// sessions draw a new seed so "play again" gives a new deal.
    pub fn start_new_session(&mut self) -> Result<(), GameError> {
        self.config.seed = None;
        self.session = GameSession::new(&self.config)?;
        self.announce_start();
        Ok(())
    }

    /// Adopt an already built session (for example from `GameSession::from_deal`).
    pub fn resume(&mut self, session: GameSession) {
        self.session = session;
        self.announce_start();
    }

    fn announce_start(&mut self) {
        debug!(seed = ?self.session.seed(), "session started");
        self.sink.notify(&GameEvent::SessionStarted {
            first: self.session.current_player(),
        });
        for player in PlayerId::all() {
            for &family in self.session.player(player).completed_families() {
                self.sink
                    .notify(&GameEvent::FamilyCompleted { player, family });
            }
        }
    }

    /// The current player asks the opponent for a card.
    pub fn request_card(
        &mut self,
        family: Family,
        member: Member,
    ) -> Result<RequestOutcome, GameError> {
        let player = self.session.current_player();
        let outcome = self
            .session
            .request_card(player, Card::new(family, member))?;
        self.forward(&outcome.events);
        Ok(outcome)
    }

    /// The current player draws from the deck.
    pub fn draw_card(&mut self) -> Result<DrawOutcome, GameError> {
        let player = self.session.current_player();
        match self.session.draw_card(player) {
            Ok(outcome) => {
                self.forward(&outcome.events);
                Ok(outcome)
            }
            Err(GameError::DeckExhausted) => {
                self.sink.notify(&GameEvent::DeckExhausted);
                Err(GameError::DeckExhausted)
            }
            Err(e) => Err(e),
        }
    }

    /// Play a move for the current player.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        match mv {
            Move::Request(card) => self.request_card(card.family, card.member).map(|_| ()),
            Move::Draw => self.draw_card().map(|_| ()),
        }
    }

    fn forward(&mut self, events: &[GameEvent]) {
        for event in events {
            self.sink.notify(event);
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.session.current_player()
    }

    #[must_use]
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        self.session.players()
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.session.deck_size()
    }

    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.session.discard_top()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.session.winner()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventLog, SoundCue};
    use crate::rules::GameResult;

    fn table() -> Table<EventLog> {
        Table::new(SessionConfig::default().with_seed(11), EventLog::new()).unwrap()
    }

    #[test]
    fn test_start_announces_session() {
        let table = table();
        assert_eq!(
            table.sink().events()[0],
            GameEvent::SessionStarted { first: PlayerId::FIRST }
        );
        assert_eq!(table.sink().cues().next(), Some(SoundCue::Background));
        assert_eq!(table.deck_size(), 28);
        assert_eq!(table.current_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_events_are_forwarded_in_order() {
        let mut table = table();
        table.sink_mut().drain();

        let outcome = table.request_card(Family::Monkey, Member::Grandmother).unwrap();

        assert_eq!(table.sink().events(), outcome.events.as_slice());
        assert_eq!(
            table.sink().events().last(),
            Some(&GameEvent::TurnPassed { to: PlayerId::SECOND })
        );
        let expected_cue = if outcome.is_success() { SoundCue::Correct } else { SoundCue::Fail };
        assert_eq!(table.sink().cues().next(), Some(expected_cue));
    }

    #[test]
    fn test_draw_acts_for_current_player() {
        let mut table = table();
        table.draw_card().unwrap();
        assert_eq!(table.current_player(), PlayerId::SECOND);
        table.draw_card().unwrap();
        assert_eq!(table.current_player(), PlayerId::FIRST);
        assert_eq!(table.deck_size(), 26);
    }

    #[test]
    fn test_exhausted_deck_is_announced() {
        let mut table = table();
        let first: Vec<Card> = Card::universe().filter(|c| c.member == Member::Father).collect();
        let second: Vec<Card> = Card::universe().filter(|c| c.member != Member::Father).collect();
        let session =
            GameSession::from_deal(table.config(), [first, second], vec![]).unwrap();
        table.resume(session);
        table.sink_mut().drain();

        assert_eq!(table.draw_card().unwrap_err(), GameError::DeckExhausted);
        assert_eq!(table.sink().events(), &[GameEvent::DeckExhausted]);
        assert_eq!(table.session().result(), Some(GameResult::Draw));
        assert!(table.is_game_over());
        assert_eq!(table.winner(), None);
    }

    #[test]
    fn test_new_session_resets_state() {
        let mut table = table();
        table.draw_card().unwrap();

        table.start_new_session().unwrap();

        assert_eq!(table.deck_size(), 28);
        assert_eq!(table.current_player(), PlayerId::FIRST);
        assert_eq!(table.discard_top(), None);
        assert_eq!(table.session().history().count(), 0);
    }
}
