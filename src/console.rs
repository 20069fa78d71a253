//! Line-oriented text console for playing against the engine.
//!
//! The framing follows the Go Text Protocol: each command may start with a
//! numeric id, and each response is `=[id] text` on success or `?[id] text`
//! on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `clear_board` - Start a new game, keeping the seats
//! - `showboard` - Print the board
//! - `legal_moves` - List legal moves for the side to move
//! - `play <vertex>` - Play a move (e.g. `play d3`) for the side to move
//! - `genmove` - Let the engine pick and play a move for the side to move
//!
//! Whenever a command leaves a computer seat to move, the computer plays
//! until a human is to move or the game ends, and its moves are appended to
//! the response.
//! - `score` - Disc counts, plus the result once the game is over
//! - `strategy <black|white> <tag|human>` - Change who controls a side
//! - `depth <n>` - Change the search depth
//!
//! ## Example
//!
//! ```ignore
//! use reversi_rust::console::Console;
//! let mut console = Console::new();
//! console.run()?;
//! ```

use std::io::{self, BufRead, Write};

use log::info;

use crate::board::{Move, Side};
use crate::game::{Game, Seat};
use crate::rules::Outcome;
use crate::search::{SearchConfig, SearchEngine};
use crate::strategy::{Strategy, choose_move};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "depth",
    "genmove",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "quit",
    "score",
    "showboard",
    "strategy",
    "version",
];

/// Console state.
pub struct Console {
    game: Game,
    engine: SearchEngine,
    rng: fastrand::Rng,
    /// Strategy `genmove` uses for a side with a human seat.
    hint_strategy: Strategy,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Human (Black) against the combined-heuristic engine (White).
    pub fn new() -> Self {
        Self::with_game(
            Game::new(Seat::Human, Seat::Ai(Strategy::CombinedMax)),
            SearchConfig::default(),
            fastrand::Rng::new(),
        )
    }

    pub fn with_game(game: Game, config: SearchConfig, rng: fastrand::Rng) -> Self {
        Self {
            game,
            engine: SearchEngine::new(config),
            rng,
            hint_strategy: Strategy::CombinedMax,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams until EOF or `quit`.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        // A computer seat may be first to move.
        let opening = self.ai_replies();
        if !opening.is_empty() {
            info!("opening moves: {}", opening.trim_end());
        }

        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.reset();
                (true, self.ai_replies().trim_end().to_string())
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "legal_moves" => {
                let moves: Vec<String> =
                    self.game.legal_moves().iter().map(Move::to_string).collect();
                (true, moves.join(" "))
            }

            "play" => {
                let Some(vertex) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let mv: Move = match vertex.parse() {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                match self.game.play(mv) {
                    Ok(turn) => {
                        let mut reply = pass_note(turn.opponent_passed, turn.side);
                        reply.push_str(&self.ai_replies());
                        (true, reply.trim_end().to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(side) = self.game.to_move() else {
                    return (false, "the game is over".to_string());
                };
                let played = match self.game.seat(side) {
                    Seat::Ai(_) => self.game.ai_turn(&self.engine, &mut self.rng),
                    Seat::Human => {
                        let board = self.game.board();
                        let strategy = self.hint_strategy;
                        let chosen =
                            choose_move(board, side, strategy, &self.engine, &mut self.rng);
                        let Some(mv) = chosen else {
                            return (false, "no legal move".to_string());
                        };
                        self.game.play(mv)
                    }
                };
                match played {
                    Ok(turn) => {
                        let mut reply = format!("{} ", turn.mv);
                        reply.push_str(&pass_note(turn.opponent_passed, turn.side));
                        reply.push_str(&self.ai_replies());
                        (true, reply.trim_end().to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "score" => {
                let s = self.game.score();
                let result = match self.game.winner() {
                    Some(Outcome::Winner(side)) => format!(" ({side} wins)"),
                    Some(Outcome::Tie) => " (tie)".to_string(),
                    None => String::new(),
                };
                (true, format!("black {} white {}{result}", s.black, s.white))
            }

            "strategy" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let side = match args[0].to_lowercase().as_str() {
                    "black" | "b" => Side::Black,
                    "white" | "w" => Side::White,
                    other => return (false, format!("unknown side: {other}")),
                };
                let tag = args[1..].join(" ");
                let seat = if tag.eq_ignore_ascii_case("human") {
                    Seat::Human
                } else {
                    match tag.parse::<Strategy>() {
                        Ok(strategy) => Seat::Ai(strategy),
                        Err(e) => return (false, e.to_string()),
                    }
                };
                self.game.set_seat(side, seat);
                let reply = format!("{} {}", seat.display_name(), self.ai_replies());
                (true, reply.trim_end().to_string())
            }

            "depth" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<u32>() {
                    Ok(depth) if depth > 0 => {
                        let config = SearchConfig {
                            depth,
                            ..self.engine.config().clone()
                        };
                        self.engine = SearchEngine::new(config);
                        (true, String::new())
                    }
                    _ => (false, "invalid depth".to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Play pending computer turns and describe them, e.g. `white f4 `.
    fn ai_replies(&mut self) -> String {
        let mut reply = String::new();
        for turn in self.game.run_ai(&self.engine, &mut self.rng) {
            reply.push_str(&format!("{} {} ", turn.side, turn.mv));
            reply.push_str(&pass_note(turn.opponent_passed, turn.side));
        }
        reply
    }
}

fn pass_note(opponent_passed: bool, side: Side) -> String {
    if opponent_passed {
        format!("({} passes) ", side.opponent())
    } else {
        String::new()
    }
}
