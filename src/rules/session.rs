//! The game session state machine.
//!
//! ## States
//!
//! `Setup → TurnInProgress(player) → {TurnInProgress(other), GameOver}`
//!
//! Setup shuffles the 42 cards and deals alternately, first seat first.
//! Each turn is a request or a draw; the turn passes to the opponent
//! only once the move has fully resolved and did not end the game.
//!
//! ## Card conservation
//!
//! Every card sits in exactly one of: the deck, a hand, or a player's
//! archive of completed families. The discard pile only records
//! requests and does not hold cards.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::GameError;
use super::outcome::{
    DrawOutcome, GameResult, RequestOutcome, RequestResult, SessionStatus,
};
use super::view::PlayerView;
use crate::core::{
    Card, Completions, Deck, DiscardPile, GameRng, Move, MoveRecord, Player, PlayerId,
    SessionConfig, PLAYER_COUNT,
};
use crate::events::GameEvent;

/// A two-player game in progress (or finished).
///
/// Cloning is cheap: the deck, discard pile and history are persistent
/// vectors, so the presentation layer can hold snapshots freely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    players: [Player; PLAYER_COUNT],
    current: PlayerId,
    deck: Deck,
    discard: DiscardPile,
    result: Option<GameResult>,
    turn_number: u32,
    history: Vector<MoveRecord>,
    seed: Option<u64>,
}

impl GameSession {
    /// Shuffle a fresh deck and deal a new session.
    ///
    /// The deck is seeded from `config.seed`, or from the OS when unset;
    /// either way the seed is available from [`GameSession::seed`].
    pub fn new(config: &SessionConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut deck = Deck::shuffled(&mut rng);
        let mut players = Self::seat(config);

        for _ in 0..config.hand_size {
            for player in &mut players {
                let Some(card) = deck.draw() else {
                    return Err(GameError::InvalidLayout("deck ran out while dealing".into()));
                };
                player.hand.insert(card);
            }
        }

        debug!(seed = rng.seed(), hand_size = config.hand_size, "dealt new session");
        Ok(Self::assemble(players, deck, Some(rng.seed())))
    }

    /// Build a session from explicit hands and deck order.
    ///
    /// `deck` is listed bottom to top. Together with the hands it must
    /// hold each of the 42 cards exactly once.
    pub fn from_deal(
        config: &SessionConfig,
        hands: [Vec<Card>; PLAYER_COUNT],
        deck: Vec<Card>,
    ) -> Result<Self, GameError> {
        let mut all: Vec<Card> = hands.iter().flatten().chain(deck.iter()).copied().collect();
        all.sort();
        let universe: Vec<Card> = Card::universe().collect();
        if all != universe {
            return Err(GameError::InvalidLayout(
                "hands and deck must hold each card exactly once".into(),
            ));
        }

        let mut players = Self::seat(config);
        for (player, hand) in players.iter_mut().zip(hands) {
            player.hand = hand.into_iter().collect();
        }

        Ok(Self::assemble(players, deck.into_iter().collect(), config.seed))
    }

    fn seat(config: &SessionConfig) -> [Player; PLAYER_COUNT] {
        [
            Player::new(config.player_names[0].clone()),
            Player::new(config.player_names[1].clone()),
        ]
    }

    /// Finish setup: settle families completed by the deal.
    fn assemble(players: [Player; PLAYER_COUNT], deck: Deck, seed: Option<u64>) -> Self {
        let mut session = Self {
            players,
            current: PlayerId::FIRST,
            deck,
            discard: DiscardPile::new(),
            result: None,
            turn_number: 1,
            history: Vector::new(),
            seed,
        };

        for player in PlayerId::all() {
            session.check_completed_families(player);
        }
        if let Some(winner) = PlayerId::all().find(|&p| session.player(p).has_completed_all()) {
            session.result = Some(GameResult::Winner(winner));
        }

        session
    }

    // === Operations ===

    /// Ask the opponent for `card`.
    ///
    /// On success the card changes hands. On failure the asker draws
    /// from the deck instead; an empty deck ends the game in a draw.
    /// Either way the request is logged on the discard pile and the turn
    /// passes once, unless the game ended.
    pub fn request_card(
        &mut self,
        asker: PlayerId,
        card: Card,
    ) -> Result<RequestOutcome, GameError> {
        self.ensure_can_act(asker)?;

        let opponent = asker.opponent();
        let mut events = Vec::new();

        self.discard.record(card);
        self.record_move(asker, Move::Request(card));

        let (result, completed) = match self.players[opponent.index()].hand.take(card) {
            Some(card) => {
                debug!(%asker, %card, "request succeeded");
                self.players[asker.index()].hand.insert(card);
                events.push(GameEvent::CardReceived {
                    player: asker,
                    from: opponent,
                    card,
                });
                (RequestResult::Success, self.finish_turn(asker, &mut events))
            }
            None => {
                debug!(%asker, %card, "request failed");
                events.push(GameEvent::RequestFailed {
                    player: asker,
                    card,
                });
                match self.deck.draw() {
                    Some(drawn) => {
                        self.players[asker.index()].hand.insert(drawn);
                        events.push(GameEvent::CardDrawn {
                            player: asker,
                            card: drawn,
                        });
                        let completed = self.finish_turn(asker, &mut events);
                        (RequestResult::Failure { drawn: Some(drawn) }, completed)
                    }
                    None => {
                        self.exhaust();
                        events.push(GameEvent::DeckExhausted);
                        (RequestResult::Failure { drawn: None }, Completions::new())
                    }
                }
            }
        };

        Ok(RequestOutcome {
            card,
            result,
            completed,
            status: self.status(),
            events,
        })
    }

    /// Draw the top card of the deck.
    ///
    /// An empty deck ends the session in a draw and returns
    /// `DeckExhausted`; hands and deck are left as they were.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<DrawOutcome, GameError> {
        self.ensure_can_act(player)?;

        let Some(card) = self.deck.draw() else {
            self.exhaust();
            return Err(GameError::DeckExhausted);
        };

        debug!(%player, %card, remaining = self.deck.len(), "drew card");
        self.record_move(player, Move::Draw);
        self.players[player.index()].hand.insert(card);

        let mut events = vec![GameEvent::CardDrawn { player, card }];
        let completed = self.finish_turn(player, &mut events);

        Ok(DrawOutcome {
            card,
            completed,
            status: self.status(),
            events,
        })
    }

    /// Apply a move for the current player.
    ///
    /// Returns the events it produced.
    pub fn play(&mut self, mv: Move) -> Result<Vec<GameEvent>, GameError> {
        let player = self.current;
        match mv {
            Move::Request(card) => self.request_card(player, card).map(|o| o.events),
            Move::Draw => self.draw_card(player).map(|o| o.events),
        }
    }

    /// Archive every family `player` holds in full.
    ///
    /// Runs after every hand change; calling it again without a hand
    /// change in between does nothing.
    pub fn check_completed_families(&mut self, player: PlayerId) -> Completions {
        self.players[player.index()].check_completed_families()
    }

    /// End the game if the current player has completed every family.
    ///
    /// Returns whether the game is won.
    pub fn check_end_game(&mut self) -> bool {
        if let Some(result) = self.result {
            return result.winner().is_some();
        }

        let player = self.current;
        if self.player(player).has_completed_all() {
            info!(winner = %player, name = %self.player(player).name, "game won");
            self.result = Some(GameResult::Winner(player));
            true
        } else {
            false
        }
    }

    // === Internals ===

    fn ensure_can_act(&self, player: PlayerId) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::OperationAfterGameOver);
        }
        if player != self.current {
            return Err(GameError::NotYourTurn {
                player,
                current: self.current,
            });
        }
        Ok(())
    }

    fn record_move(&mut self, player: PlayerId, mv: Move) {
        self.history
            .push_back(MoveRecord::new(player, mv, self.turn_number));
    }

    /// Completion check, end check, then pass the turn if still running.
    fn finish_turn(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) -> Completions {
        let completed = self.check_completed_families(player);
        events.extend(
            completed
                .iter()
                .map(|&family| GameEvent::FamilyCompleted { player, family }),
        );

        if self.check_end_game() {
            events.push(GameEvent::GameWon { winner: player });
        } else {
            self.current = player.opponent();
            self.turn_number += 1;
            events.push(GameEvent::TurnPassed { to: self.current });
        }

        completed
    }

    fn exhaust(&mut self) {
        info!(turn = self.turn_number, "deck exhausted, game ends in a draw");
        self.result = Some(GameResult::Draw);
    }

    // === Accessors ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.top()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.and_then(|r| r.winner())
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.result {
            Some(result) => SessionStatus::Finished(result),
            None => SessionStatus::InProgress {
                current: self.current,
            },
        }
    }

    /// Turn number (starts at 1, increments each time the turn passes).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Resolved moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter()
    }

    /// Seed the deck was shuffled with, if known.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether someone can still complete all seven families.
    ///
    /// A player can only win while the opponent has completed nothing.
    #[must_use]
    pub fn is_winnable(&self) -> bool {
        match self.result {
            Some(result) => result.winner().is_some(),
            None => PlayerId::all()
                .any(|p| self.player(p.opponent()).completed_families().is_empty()),
        }
    }

    /// Every card that has a location: deck, hands, then archives.
    pub fn located_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck.iter().chain(
            self.players
                .iter()
                .flat_map(|p| p.hand.iter().chain(p.archived_cards())),
        )
    }

    /// What `player` may see of the session.
    #[must_use]
    pub fn view_for(&self, player: PlayerId) -> PlayerView {
        PlayerView::new(self, player)
    }
}
