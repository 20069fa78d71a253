//! Board model: sides, cells, moves, and the 8x8 grid.
//!
//! A [`Board`] is plain data. It is `Copy`, so lookahead code can take a
//! private copy cheaply and never write back into the caller's board.
//! All game rules live in [`crate::rules`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::N;

/// One of the two players. Black always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// The other side. Never stored, always computed.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Character used for this side's discs in the text board.
    pub fn symbol(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}

/// Occupant of a board cell: `None` is empty.
pub type Cell = Option<Side>;

/// A board coordinate naming the cell to be claimed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Create a move.
    ///
    /// # Panics
    /// Panics if either coordinate is outside `0..8`.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < N && col < N,
            "coordinate ({row}, {col}) is off the {N}x{N} board"
        );
        Move { row, col }
    }
}

/// Error from parsing a coordinate such as `d3`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected a coordinate like \"d3\", got {0:?}")]
    Malformed(String),
    #[error("column {0:?} is not in a..h")]
    Column(char),
    #[error("row {0} is not in 1..8")]
    Row(usize),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse `<column letter><row number>`, e.g. `a1` is the top-left corner.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_char = chars
            .next()
            .ok_or_else(|| ParseMoveError::Malformed(s.to_string()))?
            .to_ascii_lowercase();
        if !col_char.is_ascii_lowercase() {
            return Err(ParseMoveError::Malformed(s.to_string()));
        }
        let col = (col_char as u8 - b'a') as usize;
        if col >= N {
            return Err(ParseMoveError::Column(col_char));
        }
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| ParseMoveError::Malformed(s.to_string()))?;
        if row == 0 || row > N {
            return Err(ParseMoveError::Row(row));
        }
        Ok(Move { row: row - 1, col })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

/// The 8x8 grid of cells, addressed by (row, column).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: two discs per side on the central diagonals.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let mid = N / 2;
        board.cells[mid - 1][mid - 1] = Some(Side::Black);
        board.cells[mid][mid] = Some(Side::Black);
        board.cells[mid - 1][mid] = Some(Side::White);
        board.cells[mid][mid - 1] = Some(Side::White);
        board
    }

    /// A board with no discs. Used to set up arbitrary positions.
    pub fn empty() -> Self {
        Board {
            cells: [[None; N]; N],
        }
    }

    /// Cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is off the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < N && col < N, "coordinate ({row}, {col}) is off the board");
        self.cells[row][col]
    }

    /// Overwrite a cell without any rule checking.
    ///
    /// # Panics
    /// Panics if the coordinate is off the board.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < N && col < N, "coordinate ({row}, {col}) is off the board");
        self.cells[row][col] = cell;
    }

    /// Cell at `mv`.
    ///
    /// # Panics
    /// Panics if the coordinate is off the board.
    #[inline]
    pub fn at(&self, mv: Move) -> Cell {
        self.get(mv.row, mv.col)
    }

    /// Iterate over all coordinates in row-major order.
    pub fn positions() -> impl Iterator<Item = Move> {
        (0..N).flat_map(|row| (0..N).map(move |col| Move { row, col }))
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Self::positions().map(move |mv| (mv, self.at(mv)))
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|(_, c)| c.is_none()).count()
    }

    /// Build a board from 8 rows of `X` (black), `O` (white) and `.` (empty).
    /// Whitespace inside a row is ignored. Returns `None` on any other input.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() != N {
            return None;
        }
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != N {
                return None;
            }
            for (col, ch) in cells.into_iter().enumerate() {
                board.cells[row][col] = match ch {
                    'X' | 'x' => Some(Side::Black),
                    'O' | 'o' => Some(Side::White),
                    '.' => None,
                    _ => return None,
                };
            }
        }
        Some(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..N {
            write!(f, "{} ", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..N {
            write!(f, "{} ", row + 1)?;
            for col in 0..N {
                let ch = match self.cells[row][col] {
                    Some(side) => side.symbol(),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
