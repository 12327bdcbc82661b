//! Automated games between two `RandomAsker`s.

use seven_families::core::{Card, GameRng, Move, PlayerId, SessionConfig};
use seven_families::events::{EventLog, GameEvent};
use seven_families::rules::{GameResult, GameSession};
use seven_families::strategy::{RandomAsker, Strategy};
use seven_families::table::Table;

const MAX_MOVES: usize = 2_000;

/// Play up to `MAX_MOVES` bot moves; returns the moves played.
fn play_out(session: &mut GameSession, rng: &mut GameRng) -> Vec<Move> {
    let mut moves = Vec::new();

    while !session.is_game_over() && moves.len() < MAX_MOVES {
        let view = session.view_for(session.current_player());
        let mv = RandomAsker.choose_move(&view, rng);
        match session.play(mv) {
            Ok(_) => {}
            Err(e) => assert!(session.is_game_over(), "bot move rejected: {e}"),
        }
        moves.push(mv);
    }

    moves
}

#[test]
fn test_bot_games_keep_every_card() {
    let universe: Vec<Card> = Card::universe().collect();

    for seed in 0..25 {
        let mut session = GameSession::new(&SessionConfig::default().with_seed(seed)).unwrap();
        let mut rng = GameRng::new(seed);

        play_out(&mut session, &mut rng);

        let mut located: Vec<Card> = session.located_cards().collect();
        located.sort();
        assert_eq!(located, universe, "seed {seed}");

        match session.result() {
            Some(GameResult::Winner(p)) => {
                assert!(session.player(p).has_completed_all());
                assert!(session.player(p.opponent()).hand.is_empty());
            }
            Some(GameResult::Draw) => assert_eq!(session.deck_size(), 0),
            None => {}
        }
    }
}

#[test]
fn test_bot_requests_are_logged() {
    let mut session = GameSession::new(&SessionConfig::default().with_seed(77)).unwrap();
    let moves = play_out(&mut session, &mut GameRng::new(77));

    let requests = session
        .history()
        .filter(|r| matches!(r.mv, Move::Request(_)))
        .count();
    assert_eq!(session.discard().len(), requests);
    assert!(session.history().count() <= moves.len());
}

#[test]
fn test_replay_from_history() {
    let config = SessionConfig::default().with_seed(31337);
    let mut original = GameSession::new(&config).unwrap();
    play_out(&mut original, &mut GameRng::new(5));

    let mut replay = GameSession::new(&config).unwrap();
    for record in original.history() {
        assert_eq!(replay.current_player(), record.player);
        assert_eq!(replay.turn_number(), record.turn);
        replay.play(record.mv).unwrap();
    }

    assert_eq!(replay, original);
}

#[test]
fn test_bot_at_the_table() {
    let mut table = Table::new(SessionConfig::default().with_seed(8), EventLog::new()).unwrap();
    let mut rng = GameRng::new(8);

    for _ in 0..40 {
        if table.is_game_over() {
            break;
        }
        let view = table.session().view_for(table.current_player());
        let mv = RandomAsker.choose_move(&view, &mut rng);
        table.play(mv).unwrap();
    }

    let events = table.sink().events();
    assert_eq!(events[0], GameEvent::SessionStarted { first: PlayerId::FIRST });
    let turns = events
        .iter()
        .filter(|e| matches!(e, GameEvent::TurnPassed { .. }))
        .count();
    assert_eq!(turns as u32, table.session().turn_number() - 1);
}
