//! Computer opponent strategies and the move dispatcher.
//!
//! [`choose_move`] is the single entry point a controller calls on an AI
//! turn. Randomness comes only from the `fastrand::Rng` passed in, and only
//! the [`Strategy::Random`] branch draws from it.

use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::board::{Board, Move, Side};
use crate::eval::Evaluation;
use crate::rules::{flips_for, legal_moves};
use crate::search::{Objective, SearchEngine};

/// Opponent behavior, fixed for a seat for the whole game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Uniformly random legal move.
    Random,
    /// Move that flips the most discs right now.
    Greedy,
    /// Search maximizing the mobility evaluation.
    MobilityMax,
    /// Search maximizing the combined evaluation.
    CombinedMax,
    /// Search minimizing the combined evaluation: deliberately plays badly.
    CombinedMin,
}

/// Error from strict strategy parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?} (expected one of: {list})", list = Strategy::TAGS.join(", "))]
pub struct ParseStrategyError(pub String);

impl Strategy {
    /// All strategies, in menu order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Greedy,
        Strategy::MobilityMax,
        Strategy::CombinedMax,
        Strategy::CombinedMin,
    ];

    /// Canonical tags, same order as [`Strategy::ALL`].
    pub const TAGS: [&'static str; 5] =
        ["random", "greedy", "mobility-max", "combined-max", "combined-min"];

    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Random => Self::TAGS[0],
            Strategy::Greedy => Self::TAGS[1],
            Strategy::MobilityMax => Self::TAGS[2],
            Strategy::CombinedMax => Self::TAGS[3],
            Strategy::CombinedMin => Self::TAGS[4],
        }
    }

    /// Parse a tag leniently: unknown tags fall back to [`Strategy::Random`]
    /// with a warning, since that usually means a misconfigured seat.
    pub fn from_tag(tag: &str) -> Strategy {
        tag.parse().unwrap_or_else(|e: ParseStrategyError| {
            warn!("{e}; falling back to random");
            Strategy::Random
        })
    }

    /// Evaluation and objective for the search-based strategies.
    pub fn search_params(self) -> Option<(Evaluation, Objective)> {
        match self {
            Strategy::Random | Strategy::Greedy => None,
            Strategy::MobilityMax => Some((Evaluation::Mobility, Objective::Maximize)),
            Strategy::CombinedMax => Some((Evaluation::Combined, Objective::Maximize)),
            Strategy::CombinedMin => Some((Evaluation::Combined, Objective::Minimize)),
        }
    }

    /// Opponent name shown when nothing better is available.
    pub fn fallback_name(self) -> &'static str {
        match self {
            Strategy::Random => "Random Rookie",
            Strategy::Greedy => "Greedy Grabber",
            Strategy::MobilityMax => "Mobility Squeezer",
            Strategy::CombinedMax => "Grand Strategist",
            Strategy::CombinedMin => "Generous Saboteur",
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts the canonical tags and the legacy menu labels
    /// (`Max ev1`, `Max ev2`, `Max ev3`, `Min ev3`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let strategy = match key.as_str() {
            "random" => Strategy::Random,
            "greedy" | "max ev2" => Strategy::Greedy,
            "mobility-max" | "max ev1" => Strategy::MobilityMax,
            "combined-max" | "max ev3" => Strategy::CombinedMax,
            "combined-min" | "min ev3" => Strategy::CombinedMin,
            _ => return Err(ParseStrategyError(s.to_string())),
        };
        Ok(strategy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Choose a move for `side` using `strategy`.
///
/// Returns `None` only when `side` has no legal move.
pub fn choose_move(
    board: &Board,
    side: Side,
    strategy: Strategy,
    engine: &SearchEngine,
    rng: &mut fastrand::Rng,
) -> Option<Move> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }

    match strategy {
        Strategy::Random => Some(moves[rng.usize(..moves.len())]),
        Strategy::Greedy => greedy_move(board, side, &moves),
        Strategy::MobilityMax | Strategy::CombinedMax | Strategy::CombinedMin => {
            let (eval, objective) = strategy.search_params()?;
            engine.find_best_move(board, side, eval, objective)
        }
    }
}

/// The move with the most flips; ties keep the earliest.
fn greedy_move(board: &Board, side: Side, moves: &[Move]) -> Option<Move> {
    let mut best: Option<(Move, usize)> = None;
    for &mv in moves {
        let flips = flips_for(board, mv, side).len();
        if best.is_none_or(|(_, n)| flips > n) {
            best = Some((mv, flips));
        }
    }
    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        for (strategy, tag) in Strategy::ALL.iter().zip(Strategy::TAGS) {
            assert_eq!(tag.parse::<Strategy>(), Ok(*strategy));
            assert_eq!(strategy.to_string(), tag);
        }
        assert_eq!("Max ev1".parse::<Strategy>(), Ok(Strategy::MobilityMax));
        assert_eq!("Max ev2".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("MAX EV3".parse::<Strategy>(), Ok(Strategy::CombinedMax));
        assert_eq!("Min ev3".parse::<Strategy>(), Ok(Strategy::CombinedMin));
        assert!("minimax".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_unknown_tag_falls_back_to_random() {
        assert_eq!(Strategy::from_tag("bogus"), Strategy::Random);
        assert_eq!(Strategy::from_tag("greedy"), Strategy::Greedy);
    }

    #[test]
    fn test_parse_error_lists_tags() {
        let err = "bogus".parse::<Strategy>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bogus") && msg.contains("combined-min"), "got: {msg}");
    }

    #[test]
    fn test_no_moves_returns_none() {
        let engine = SearchEngine::with_depth(2);
        let mut rng = fastrand::Rng::with_seed(1);
        for strategy in Strategy::ALL {
            assert_eq!(
                choose_move(&Board::empty(), Side::Black, strategy, &engine, &mut rng),
                None
            );
        }
    }

    #[test]
    fn test_every_strategy_returns_legal_move() {
        let engine = SearchEngine::with_depth(2);
        let mut rng = fastrand::Rng::with_seed(7);
        let board = Board::new();
        let legal = legal_moves(&board, Side::Black);
        for strategy in Strategy::ALL {
            let mv = choose_move(&board, Side::Black, strategy, &engine, &mut rng)
                .expect("opening has moves");
            assert!(legal.contains(&mv), "{strategy} chose illegal {mv}");
        }
    }

    #[test]
    fn test_greedy_prefers_most_flips() {
        // Every other move flips one disc; g4 flips two along the row.
        let board = Board::from_rows(&[
            "........", "........", "........", "...XOO..", "...OX...", "........", "........",
            "........",
        ])
        .unwrap();
        let engine = SearchEngine::with_depth(1);
        let mut rng = fastrand::Rng::with_seed(3);
        let mv = choose_move(&board, Side::Black, Strategy::Greedy, &engine, &mut rng);
        assert_eq!(mv, Some(Move::new(3, 6)));
    }

    #[test]
    fn test_greedy_tie_keeps_first() {
        let engine = SearchEngine::with_depth(1);
        let mut rng = fastrand::Rng::with_seed(3);
        let mv = choose_move(&Board::new(), Side::Black, Strategy::Greedy, &engine, &mut rng);
        assert_eq!(mv, Some(Move::new(2, 4)));
    }

    #[test]
    fn test_random_is_seed_reproducible() {
        let engine = SearchEngine::with_depth(1);
        let board = Board::new();
        let picks = |seed| {
            let mut rng = fastrand::Rng::with_seed(seed);
            (0..10)
                .map(|_| choose_move(&board, Side::Black, Strategy::Random, &engine, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_search_strategies_use_engine() {
        let engine = SearchEngine::with_depth(3);
        let mut rng = fastrand::Rng::with_seed(0);
        let board = Board::new();
        for strategy in [Strategy::MobilityMax, Strategy::CombinedMax, Strategy::CombinedMin] {
            let (eval, objective) = strategy.search_params().unwrap();
            assert_eq!(
                choose_move(&board, Side::Black, strategy, &engine, &mut rng),
                engine.find_best_move(&board, Side::Black, eval, objective)
            );
        }
    }
}
