//! Seven Families in the terminal.
//!
//! Two players share the keyboard, or the second seat is played by the
//! computer with `--bot`. Sound cues are printed instead of played.

use std::io::{self, BufRead, Write};

use clap::Parser;
use seven_families::core::{Card, PlayerId, DEFAULT_HAND_SIZE};
use seven_families::{
    CueSettings, EventSink, GameError, GameEvent, GameResult, GameRng, RandomAsker,
    SessionConfig, Strategy, Table,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const RULES: &str = "\
- Collect the six members of every family.
- On your turn, ask the other player for a card.
- If they hold it, they hand it over.
- Otherwise you draw a card from the deck.
- The first to complete all seven families wins.
- If the deck runs out, nobody wins.";

const HELP: &str = "\
commands:
  ask <family> <member>   ask the other player for a card
  draw                    draw from the deck
  hand                    show the table again
  rules                   show the rules
  new                     deal a new game
  volume <0-100>          set the sound cue volume
  quit                    leave";

#[derive(Parser)]
#[command(name = "seven-families")]
#[command(about = "Play Seven Families in the terminal")]
struct Args {
    /// Shuffle seed for a reproducible first deal
    #[arg(long)]
    seed: Option<u64>,

    /// Cards dealt to each player
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Name of the first player
    #[arg(long, default_value = "Player 1")]
    player1: String,

    /// Name of the second player
    #[arg(long, default_value = "Player 2")]
    player2: String,

    /// Let the computer play the second seat
    #[arg(long)]
    bot: bool,

    /// Sound cue volume (0-100)
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    volume: u8,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Prints events and the sound cue that goes with them.
struct TerminalSink {
    names: [String; 2],
    cues: CueSettings,
}

impl TerminalSink {
    fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }
}

impl EventSink for TerminalSink {
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::SessionStarted { first } => {
                println!("\n🧠 Seven Families: new game, {} starts.", self.name(first));
            }
            GameEvent::CardReceived { player, from, card } => {
                println!("{} gets {} {} from {}.", self.name(player), card.emoji(), card, self.name(from));
            }
            GameEvent::RequestFailed { player, card } => {
                println!("{} does not have {} {}. Go fish!", self.name(player.opponent()), card.emoji(), card);
            }
            GameEvent::CardDrawn { player, .. } => {
                println!("{} draws a card.", self.name(player));
            }
            GameEvent::FamilyCompleted { player, family } => {
                println!("🎉 {} completed the {} {} family!", self.name(player), family.emoji(), family);
            }
            GameEvent::TurnPassed { to } => {
                println!("--- {}'s turn ---", self.name(to));
            }
            GameEvent::GameWon { winner } => {
                println!("🏆 {} wins!", self.name(winner));
            }
            GameEvent::DeckExhausted => {
                println!("The deck is empty. Nobody wins.");
            }
        }

        if let Some(cue) = event.sound_cue() {
            if !self.cues.is_muted() {
                println!("   ♪ {} ({}%)", cue.clip(), self.cues.volume());
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let mut config = SessionConfig::default()
        .with_player_name(PlayerId::FIRST, args.player1.clone())
        .with_player_name(PlayerId::SECOND, args.player2.clone())
        .with_hand_size(args.hand_size);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let sink = TerminalSink {
        names: config.player_names.clone(),
        cues: CueSettings::with_volume(args.volume),
    };
    let mut table = Table::new(config, sink)?;
    info!(seed = ?table.session().seed(), bot = args.bot, "game started");

    let mut bot_rng = match table.session().seed() {
        Some(seed) => GameRng::new(seed.wrapping_add(1)),
        None => GameRng::from_entropy(),
    };

    print_table(&table);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if args.bot {
            let view = table.session().view_for(PlayerId::SECOND);
            if view.is_my_turn() {
                let mv = RandomAsker.choose_move(&view, &mut bot_rng);
                debug!(%mv, "bot move");
                println!("{} chooses to {}.", view.name(), mv);
                report(table.play(mv));
                print_table(&table);
                continue;
            }
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit" | "exit" | "q"] => break,
            ["help" | "?"] => println!("{HELP}"),
            ["rules"] => println!("{RULES}"),
            ["hand"] => print_table(&table),
            ["new"] => {
                table.start_new_session()?;
                print_table(&table);
            }
            ["draw"] => {
                report(table.draw_card().map(|_| ()));
                print_table(&table);
            }
            ["volume", level] => match level.parse::<u8>() {
                Ok(level) => {
                    let cues = &mut table.sink_mut().cues;
                    cues.set_volume(level);
                    println!("Volume set to {}%.", cues.volume());
                }
                Err(_) => println!("volume must be a number from 0 to 100"),
            },
            ["ask", family, member] => match Card::parse(family, member) {
                Ok(card) => {
                    report(table.request_card(card.family, card.member).map(|_| ()));
                    print_table(&table);
                }
                Err(e) => println!("{e}"),
            },
            _ => println!("unknown command, type 'help'"),
        }
    }

    Ok(())
}

/// Show a rejected operation to the player.
fn report(result: Result<(), GameError>) {
    match result {
        Ok(()) | Err(GameError::DeckExhausted) => {}
        Err(GameError::OperationAfterGameOver) => {
            println!("The game is over. Type 'new' to play again.");
        }
        Err(e) => {
            warn!(error = %e, "operation rejected");
            println!("{e}");
        }
    }
}

fn print_table<S: EventSink>(table: &Table<S>) {
    let session = table.session();

    if let Some(result) = session.result() {
        match result {
            GameResult::Winner(p) => println!("\nGame over: {} won.", session.player(p).name),
            GameResult::Draw => println!("\nGame over: draw."),
        }
        println!("Type 'new' to play again or 'quit' to leave.");
        return;
    }

    let current = session.current_player();
    let view = session.view_for(current);
    let hand: Vec<String> = view.hand.iter().map(|c| c.emoji()).collect();
    let discard = view.discard_top.map_or_else(|| "🗑️".to_string(), |c| c.emoji());

    println!();
    println!("🎮 {}", view.name());
    println!("hand:    {}", hand.join(" "));
    println!("deck:    🂠 {}   discard: {}", view.deck_size, discard);
    for player in PlayerId::all() {
        let done: Vec<&str> = view.completed[player.index()].iter().map(|f| f.emoji()).collect();
        if !done.is_empty() {
            println!("{} completed: {}", view.names[player.index()], done.join(" "));
        }
    }
    println!("{} holds {} cards.", view.names[current.opponent().index()], view.opponent_hand_size);
    if !session.is_winnable() {
        println!("(Both players have completed a family, so nobody can collect all seven.)");
    }
}
