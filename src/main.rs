//! Reversi-Rust: play Reversi against the engine, or watch engines play.
//!
//! ## Usage
//!
//! - `reversi-rust` - Start the text console (same as `console`)
//! - `reversi-rust console` - Human (black) vs engine (white) over stdin/stdout
//! - `reversi-rust match --games 10` - Engine vs engine, print results
//! - `reversi-rust demo` - Play one engine game and show the final board

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use reversi_rust::board::Side;
use reversi_rust::console::Console;
use reversi_rust::game::{Game, Seat};
use reversi_rust::rules::Outcome;
use reversi_rust::search::{SearchConfig, SearchEngine};
use reversi_rust::strategy::Strategy;

/// Reversi-Rust: a Reversi engine with pluggable opponents
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth in plies for the search-based strategies
    #[arg(long, global = true, default_value_t = reversi_rust::constants::SEARCH_DEPTH)]
    depth: u32,

    /// Strategy for black: random, greedy, mobility-max, combined-max, combined-min, or human
    #[arg(long, global = true)]
    black: Option<String>,

    /// Strategy for white (same choices as --black)
    #[arg(long, global = true)]
    white: Option<String>,

    /// Seed for the random strategy, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play through a line-oriented text console
    Console,
    /// Play engine-vs-engine games and report the results
    Match {
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
    /// Play a single engine game and print the board
    Demo,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.depth == 0 {
        bail!("--depth must be at least 1");
    }
    let config = SearchConfig {
        depth: cli.depth,
        ..SearchConfig::default()
    };
    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    match cli.command {
        Some(Commands::Console) | None => {
            let black = seat_arg(cli.black.as_deref(), Seat::Human);
            let white = seat_arg(cli.white.as_deref(), Seat::Ai(Strategy::CombinedMax));
            let mut console = Console::with_game(Game::new(black, white), config, rng);
            console.run().context("console I/O failed")?;
        }
        Some(Commands::Match { games }) => {
            let black = seat_arg(cli.black.as_deref(), Seat::Ai(Strategy::CombinedMax));
            let white = seat_arg(cli.white.as_deref(), Seat::Ai(Strategy::Greedy));
            if black == Seat::Human || white == Seat::Human {
                bail!("match needs two computer seats");
            }
            run_match(black, white, games, config, rng);
        }
        Some(Commands::Demo) => run_demo(config, rng),
    }
    Ok(())
}

/// Interpret a seat argument. Unknown strategy tags fall back to random.
fn seat_arg(arg: Option<&str>, default: Seat) -> Seat {
    match arg {
        None => default,
        Some(tag) if tag.eq_ignore_ascii_case("human") => Seat::Human,
        Some(tag) => Seat::Ai(Strategy::from_tag(tag)),
    }
}

fn run_match(black: Seat, white: Seat, games: u32, config: SearchConfig, mut rng: fastrand::Rng) {
    let engine = SearchEngine::new(config);
    let (mut black_wins, mut white_wins, mut ties) = (0, 0, 0);

    println!("{} (black) vs {} (white)", black.display_name(), white.display_name());
    for i in 1..=games {
        let mut game = Game::new(black, white);
        game.run_ai(&engine, &mut rng);
        let s = game.score();
        let result = match game.winner() {
            Some(Outcome::Winner(side)) => {
                match side {
                    Side::Black => black_wins += 1,
                    Side::White => white_wins += 1,
                }
                format!("{side} wins")
            }
            Some(Outcome::Tie) | None => {
                ties += 1;
                "tie".to_string()
            }
        };
        println!("game {i}: black {} white {} ({result})", s.black, s.white);
    }
    println!("black {black_wins} / white {white_wins} / ties {ties}");
}

fn run_demo(config: SearchConfig, mut rng: fastrand::Rng) {
    println!("Reversi-Rust: {} vs {}\n", Strategy::CombinedMax, Strategy::Greedy);

    let engine = SearchEngine::new(config);
    let mut game = Game::new(Seat::Ai(Strategy::CombinedMax), Seat::Ai(Strategy::Greedy));
    println!("{}", game.board());

    for turn in game.run_ai(&engine, &mut rng) {
        let note = if turn.opponent_passed { " (opponent passes)" } else { "" };
        println!("{} {} flips {}{note}", turn.side, turn.mv, turn.captured.len() - 1);
    }

    let s = game.score();
    println!("\n{}", game.board());
    println!("Final score: black {} white {}", s.black, s.white);
}
