//! Static evaluation functions.
//!
//! Each evaluation scores a board from the point of view of one side:
//! higher is better for that side. The choice of evaluation is a closed
//! enum so the search can be generic over it without trait objects.

use crate::board::{Board, Side};
use crate::constants::{DISC_WEIGHT, MOBILITY_WEIGHT, N, POSITIONAL_WEIGHTS, WIN_SCORE};
use crate::rules::{self, Outcome};

/// Tunable evaluation parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalParams {
    /// Per-cell value of owning that cell.
    pub weights: [[i32; N]; N],
    /// Multiplier on the mobility differential in [`Evaluation::Combined`].
    pub mobility_weight: i32,
    /// Multiplier on the disc differential in [`Evaluation::Combined`].
    pub disc_weight: i32,
    /// Magnitude of a decided terminal position in [`Evaluation::Combined`].
    pub win_score: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            weights: POSITIONAL_WEIGHTS,
            mobility_weight: MOBILITY_WEIGHT,
            disc_weight: DISC_WEIGHT,
            win_score: WIN_SCORE,
        }
    }
}

/// Which heuristic to use when scoring a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Weight-table sum of own cells minus opponent cells.
    Positional,
    /// Own legal move count minus opponent legal move count.
    Mobility,
    /// Positional + mobility + disc differential, or the exact result
    /// once the game is over.
    Combined,
}

impl Evaluation {
    /// Score `board` for `side` using `params`.
    pub fn evaluate(self, board: &Board, side: Side, params: &EvalParams) -> i32 {
        match self {
            Evaluation::Positional => positional(board, side, params),
            Evaluation::Mobility => mobility(board, side),
            Evaluation::Combined => combined(board, side, params),
        }
    }
}

/// Positional weight of `side`'s discs minus the opponent's.
pub fn positional(board: &Board, side: Side, params: &EvalParams) -> i32 {
    board.cells().fold(0, |acc, (pos, cell)| {
        let w = params.weights[pos.row][pos.col];
        match cell {
            Some(s) if s == side => acc + w,
            Some(_) => acc - w,
            None => acc,
        }
    })
}

/// Legal move count for `side` minus that of its opponent.
pub fn mobility(board: &Board, side: Side) -> i32 {
    let own = rules::legal_moves(board, side).len() as i32;
    let theirs = rules::legal_moves(board, side.opponent()).len() as i32;
    own - theirs
}

/// Disc count for `side` minus that of its opponent.
pub fn disc_difference(board: &Board, side: Side) -> i32 {
    let s = rules::score(board);
    s.of(side) as i32 - s.of(side.opponent()) as i32
}

/// Weighted blend of the other heuristics. Terminal positions score
/// `±win_score` or 0 instead.
pub fn combined(board: &Board, side: Side, params: &EvalParams) -> i32 {
    if let Some(outcome) = rules::winner(board) {
        return match outcome {
            Outcome::Winner(s) if s == side => params.win_score,
            Outcome::Winner(_) => -params.win_score,
            Outcome::Tie => 0,
        };
    }
    positional(board, side, params)
        + mobility(board, side) * params.mobility_weight
        + disc_difference(board, side) * params.disc_weight
}
