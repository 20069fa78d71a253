//! Reversi rules: captures, legal moves, move application, and scoring.
//!
//! Every function here is pure. [`apply_move`] returns a new board and never
//! touches its input, so search code can explore freely.
//!
//! Turn order is not tracked here. A side with no legal move simply gets an
//! empty move list, and it is up to the caller to skip that side's turn.

use crate::board::{Board, Move, Side};
use crate::constants::{DIRECTIONS, N};

/// Disc totals per side. Always recomputed from a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Discs owned by `side`.
    pub fn of(&self, side: Side) -> usize {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    pub fn total(&self) -> usize {
        self.black + self.white
    }
}

/// Result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

/// Step one cell from `(row, col)` along `(dr, dc)`, or `None` at the edge.
#[inline]
fn step(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < N && c < N).then_some((r, c))
}

/// Opponent discs captured by `side` playing at `pos`.
///
/// Returns an empty list when the cell is occupied or the move captures
/// nothing; both mean "not a legal move". Directions are scanned in the
/// fixed order of [`DIRECTIONS`] and the result is their concatenation.
pub fn flips_for(board: &Board, pos: Move, side: Side) -> Vec<Move> {
    let mut flips = Vec::new();
    if board.at(pos).is_some() {
        return flips;
    }
    let opponent = side.opponent();

    for dir in DIRECTIONS {
        let mut line = Vec::new();
        let mut cur = step(pos.row, pos.col, dir);
        while let Some((r, c)) = cur {
            match board.get(r, c) {
                Some(s) if s == opponent => {
                    line.push(Move { row: r, col: c });
                    cur = step(r, c, dir);
                }
                Some(_) => {
                    flips.extend(line);
                    break;
                }
                None => break,
            }
        }
    }
    flips
}

/// True if `side` playing at `pos` captures at least one disc.
/// Same answer as `!flips_for(..).is_empty()` without building the list.
fn captures_any(board: &Board, pos: Move, side: Side) -> bool {
    if board.at(pos).is_some() {
        return false;
    }
    let opponent = side.opponent();
    DIRECTIONS.iter().any(|&dir| {
        let mut seen_opponent = false;
        let mut cur = step(pos.row, pos.col, dir);
        while let Some((r, c)) = cur {
            match board.get(r, c) {
                Some(s) if s == opponent => {
                    seen_opponent = true;
                    cur = step(r, c, dir);
                }
                Some(_) => return seen_opponent,
                None => return false,
            }
        }
        false
    })
}

/// All legal moves for `side`, in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    Board::positions()
        .filter(|&pos| captures_any(board, pos, side))
        .collect()
}

/// Whether `side` has at least one legal move.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    Board::positions().any(|pos| captures_any(board, pos, side))
}

/// Play `side` at `pos` on a copy of `board`.
///
/// Returns the new board and the captured cells: the played position first,
/// then every flipped disc. If the move captures nothing the board comes back
/// unchanged and the list is empty.
pub fn apply_move(board: &Board, pos: Move, side: Side) -> (Board, Vec<Move>) {
    let mut next = *board;
    let flips = flips_for(board, pos, side);
    if flips.is_empty() {
        return (next, flips);
    }

    let mut captured = Vec::with_capacity(flips.len() + 1);
    captured.push(pos);
    captured.extend(flips);
    for m in &captured {
        next.set(m.row, m.col, Some(side));
    }
    (next, captured)
}

/// True when neither side can move.
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White)
}

/// Count discs per side.
pub fn score(board: &Board) -> Score {
    board
        .cells()
        .fold(Score::default(), |mut acc, (_, cell)| {
            match cell {
                Some(Side::Black) => acc.black += 1,
                Some(Side::White) => acc.white += 1,
                None => {}
            }
            acc
        })
}

/// Outcome of a finished game, or `None` while moves remain.
pub fn winner(board: &Board) -> Option<Outcome> {
    if !is_terminal(board) {
        return None;
    }
    let s = score(board);
    Some(match s.black.cmp(&s.white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Side::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Side::White),
        std::cmp::Ordering::Equal => Outcome::Tie,
    })
}
