//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The search always scores leaves from the root side's point of view:
//! maximizing plies are the root side's moves, minimizing plies are the
//! opponent's. A side with no legal move passes, which costs one ply of
//! depth without changing the board.
//!
//! Whether the root picks the highest or the lowest value is decided only
//! in [`SearchEngine::find_best_move`] through [`Objective`]; the recursive
//! search itself knows nothing about it.

use log::debug;

use crate::board::{Board, Move, Side};
use crate::constants::SEARCH_DEPTH;
use crate::eval::{EvalParams, Evaluation};
use crate::rules::{apply_move, is_terminal, legal_moves};

/// Search settings. Each engine owns its own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root, counting the root move itself.
    pub depth: u32,
    /// Parameters handed to the evaluation function at the leaves.
    pub eval: EvalParams,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            eval: EvalParams::default(),
        }
    }
}

/// Whether the root keeps the best or the worst scoring move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

/// A minimax searcher bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Engine with default evaluation parameters and the given depth.
    pub fn with_depth(depth: u32) -> Self {
        Self::new(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick the move for `side` whose searched value is best under `objective`.
    ///
    /// Each root move is applied and the resulting position is searched with
    /// the opponent to reply. Ties keep the earliest move in row-major order.
    /// Returns `None` if `side` has no legal move.
    pub fn find_best_move(
        &self,
        board: &Board,
        side: Side,
        eval: Evaluation,
        objective: Objective,
    ) -> Option<Move> {
        let depth = self.config.depth.saturating_sub(1);
        let mut best: Option<(Move, i32)> = None;

        for mv in legal_moves(board, side) {
            let (next, _) = apply_move(board, mv, side);
            let value = self.alpha_beta(&next, depth, i32::MIN, i32::MAX, false, side, eval);
            debug!("{side} {mv}: {value}");

            let better = match (best, objective) {
                (None, _) => true,
                (Some((_, b)), Objective::Maximize) => value > b,
                (Some((_, b)), Objective::Minimize) => value < b,
            };
            if better {
                best = Some((mv, value));
            }
        }

        best.map(|(mv, _)| mv)
    }

    /// Fail-soft alpha-beta value of `board` for `root`.
    ///
    /// `maximizing` says whose turn it is: `true` for `root`, `false` for
    /// its opponent. Called with the full `(i32::MIN, i32::MAX)` window this
    /// returns the same value as [`SearchEngine::minimax`].
    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Side,
        eval: Evaluation,
    ) -> i32 {
        if depth == 0 || is_terminal(board) {
            return eval.evaluate(board, root, &self.config.eval);
        }

        let mover = if maximizing { root } else { root.opponent() };
        let moves = legal_moves(board, mover);
        if moves.is_empty() {
            // Forced pass.
            return self.alpha_beta(board, depth - 1, alpha, beta, !maximizing, root, eval);
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let (next, _) = apply_move(board, mv, mover);
                let value = self.alpha_beta(&next, depth - 1, alpha, beta, false, root, eval);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let (next, _) = apply_move(board, mv, mover);
                let value = self.alpha_beta(&next, depth - 1, alpha, beta, true, root, eval);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Plain minimax with no pruning. Same tree and pass handling as
    /// [`SearchEngine::alpha_beta`]; used to check the pruned search.
    pub fn minimax(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        root: Side,
        eval: Evaluation,
    ) -> i32 {
        if depth == 0 || is_terminal(board) {
            return eval.evaluate(board, root, &self.config.eval);
        }

        let mover = if maximizing { root } else { root.opponent() };
        let moves = legal_moves(board, mover);
        if moves.is_empty() {
            return self.minimax(board, depth - 1, !maximizing, root, eval);
        }

        let values = moves.into_iter().map(|mv| {
            let (next, _) = apply_move(board, mv, mover);
            self.minimax(&next, depth - 1, !maximizing, root, eval)
        });
        if maximizing {
            values.max().unwrap_or(i32::MIN)
        } else {
            values.min().unwrap_or(i32::MAX)
        }
    }
}
