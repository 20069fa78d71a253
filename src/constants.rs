//! Constants for board geometry, evaluation weights, and search defaults.
//!
//! These are defaults only. The evaluation and search code take their
//! parameters from [`crate::eval::EvalParams`] and [`crate::search::SearchConfig`],
//! which are initialized from the values here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Reversi is always played on 8x8.
pub const N: usize = 8;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Compass directions as (row delta, column delta).
/// Order: N, S, W, E, NW, NE, SW, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const SEARCH_DEPTH: u32 = 4;

// =============================================================================
// Evaluation Parameters
// =============================================================================

/// Multiplier applied to the mobility differential in the combined evaluation.
pub const MOBILITY_WEIGHT: i32 = 8;

/// Multiplier applied to the disc-count differential in the combined evaluation.
pub const DISC_WEIGHT: i32 = 2;

/// Score of a won terminal position (negated for a loss).
pub const WIN_SCORE: i32 = 10_000;

/// Positional weight table.
///
/// Corners are worth the most, X- and C-squares next to an empty corner are
/// heavily penalized, and edges are mildly positive. The table is invariant
/// under all 8 rotations and reflections of the board.
pub const POSITIONAL_WEIGHTS: [[i32; N]; N] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];
