//! Integration tests for reversi-rust
//!
//! These exercise the public API end to end: rules invariants checked over
//! many seeded random games, search determinism and pruning, and complete
//! games through the controller.

use reversi_rust::board::{Board, Move, Side};
use reversi_rust::eval::Evaluation;
use reversi_rust::game::{Game, Seat};
use reversi_rust::rules::{
    Outcome, apply_move, flips_for, is_terminal, legal_moves, score, winner,
};
use reversi_rust::search::{Objective, SearchEngine};
use reversi_rust::strategy::{Strategy, choose_move};

// =============================================================================
// Helper functions
// =============================================================================

/// Play a random game from the start, handling passes the way a controller
/// would. Returns every position reached and the moves that produced them.
fn random_game(seed: u64) -> (Vec<Board>, Vec<(Move, Side)>) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new();
    let mut side = Side::Black;
    let mut boards = vec![board];
    let mut moves = Vec::new();

    while !is_terminal(&board) {
        let legal = legal_moves(&board, side);
        if legal.is_empty() {
            side = side.opponent();
            continue;
        }
        let mv = legal[rng.usize(..legal.len())];
        let (next, _) = apply_move(&board, mv, side);
        board = next;
        boards.push(board);
        moves.push((mv, side));
        side = side.opponent();
    }
    (boards, moves)
}

fn rows(lines: [&str; 8]) -> Board {
    Board::from_rows(&lines).expect("valid test board")
}

// =============================================================================
// Starting position
// =============================================================================

#[test]
fn test_starting_board() {
    let board = Board::new();
    let s = score(&board);
    assert_eq!((s.black, s.white), (2, 2));
    assert_eq!(board.get(3, 3), Some(Side::Black));
    assert_eq!(board.get(4, 4), Some(Side::Black));
    assert_eq!(board.get(3, 4), Some(Side::White));
    assert_eq!(board.get(4, 3), Some(Side::White));
    assert_eq!(legal_moves(&board, Side::Black).len(), 4);
    assert!(!is_terminal(&board));
}

#[test]
fn test_opening_move_scores_four_to_one() {
    let board = Board::new();
    for mv in legal_moves(&board, Side::Black) {
        assert_eq!(flips_for(&board, mv, Side::Black).len(), 1);
        let (next, captured) = apply_move(&board, mv, Side::Black);
        let s = score(&next);
        assert_eq!((s.black, s.white), (4, 1), "after {mv}");
        assert_eq!(captured[0], mv);
        assert!(!is_terminal(&next));
        assert_eq!(winner(&next), None);
    }
}

// =============================================================================
// Rules invariants over random games
// =============================================================================

#[test]
fn test_apply_move_never_mutates_input() {
    for seed in 0..20 {
        let (boards, _) = random_game(seed);
        for board in &boards {
            for side in [Side::Black, Side::White] {
                for mv in legal_moves(board, side) {
                    let snapshot = *board;
                    let _ = apply_move(board, mv, side);
                    assert_eq!(*board, snapshot);
                }
            }
        }
    }
}

#[test]
fn test_flip_sequence_contents() {
    for seed in 0..20 {
        let (boards, moves) = random_game(seed);
        for (before, &(mv, side)) in boards.iter().zip(&moves) {
            let (after, captured) = apply_move(before, mv, side);
            assert_eq!(captured[0], mv);
            assert_eq!(before.at(mv), None);
            for &flipped in &captured[1..] {
                assert_eq!(before.at(flipped), Some(side.opponent()));
                assert_eq!(after.at(flipped), Some(side));
            }
            // Nothing outside the capture list changed.
            for (pos, cell) in after.cells() {
                if !captured.contains(&pos) {
                    assert_eq!(cell, before.at(pos));
                }
            }
        }
    }
}

#[test]
fn test_score_plus_empty_is_64() {
    for seed in 0..20 {
        let (boards, _) = random_game(seed);
        for (i, board) in boards.iter().enumerate() {
            let s = score(board);
            assert_eq!(s.total() + board.empty_count(), 64);
            // One disc added per move played.
            assert_eq!(s.total(), i + 4);
        }
    }
}

#[test]
fn test_legal_moves_are_row_major_and_capturing() {
    for seed in 0..10 {
        let (boards, _) = random_game(seed);
        for board in &boards {
            for side in [Side::Black, Side::White] {
                let moves = legal_moves(board, side);
                assert!(moves.windows(2).all(|w| w[0] < w[1]));
                for pos in Board::positions() {
                    let capturing = !flips_for(board, pos, side).is_empty();
                    assert_eq!(moves.contains(&pos), capturing, "{side} at {pos}");
                }
            }
        }
    }
}

#[test]
fn test_replay_reproduces_final_board() {
    for seed in 0..10 {
        let (boards, moves) = random_game(seed);
        let last = *boards.last().unwrap();

        let replayed = moves
            .iter()
            .fold(Board::new(), |b, &(mv, side)| apply_move(&b, mv, side).0);
        assert_eq!(replayed, last);

        let game = Game::replay(&moves).expect("recorded game replays");
        assert_eq!(*game.board(), last);
        assert!(game.is_over());
    }
}

// =============================================================================
// Terminal and pass positions
// =============================================================================

#[test]
fn test_side_without_moves_is_not_terminal() {
    let board = rows([
        "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXO", "XXXXXXX.", "XXXXXXX.",
        "XXXXXXX.",
    ]);
    assert!(legal_moves(&board, Side::White).is_empty());
    assert!(!legal_moves(&board, Side::Black).is_empty());
    assert!(!is_terminal(&board));
    assert_eq!(winner(&board), None);

    let engine = SearchEngine::default();
    let mut rng = fastrand::Rng::with_seed(0);
    for strategy in Strategy::ALL {
        assert_eq!(choose_move(&board, Side::White, strategy, &engine, &mut rng), None);
    }
}

#[test]
fn test_full_board_is_terminal() {
    let black_heavy = rows([
        "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "OOOOOOOO", "OOOOOOOO",
        "OOOOOOOO",
    ]);
    assert!(is_terminal(&black_heavy));
    assert_eq!(winner(&black_heavy), Some(Outcome::Winner(Side::Black)));

    let tie = rows([
        "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO",
        "OOOOOOOO",
    ]);
    assert!(is_terminal(&tie));
    assert_eq!(winner(&tie), Some(Outcome::Tie));

    let white_heavy = rows([
        "XOXOXOXO", "OOOOOOOO", "OXOXOXOX", "OOOOOOOO", "XOXOXOXO", "OOOOOOOO", "OXOXOXOX",
        "OOOOOOOO",
    ]);
    assert!(is_terminal(&white_heavy));
    assert_eq!(winner(&white_heavy), Some(Outcome::Winner(Side::White)));
}

#[test]
fn test_finished_random_games_have_consistent_winner() {
    for seed in 0..10 {
        let (boards, _) = random_game(seed);
        let last = boards.last().unwrap();
        let s = score(last);
        let expected = match s.black.cmp(&s.white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Side::White),
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        assert_eq!(winner(last), Some(expected));
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_alpha_beta_equals_minimax_on_random_positions() {
    let engine = SearchEngine::default();
    for seed in 0..4 {
        let (boards, _) = random_game(seed);
        // Sample a few positions from each game, including the late endgame.
        for board in boards.iter().step_by(15) {
            for eval in [Evaluation::Positional, Evaluation::Mobility, Evaluation::Combined] {
                let pruned =
                    engine.alpha_beta(board, 3, i32::MIN, i32::MAX, true, Side::White, eval);
                let full = engine.minimax(board, 3, true, Side::White, eval);
                assert_eq!(pruned, full, "seed {seed} {eval:?}\n{board}");
            }
        }
    }
}

#[test]
fn test_find_best_move_is_deterministic() {
    let engine = SearchEngine::default();
    let (boards, _) = random_game(3);
    let board = boards[10];
    for side in [Side::Black, Side::White] {
        for objective in [Objective::Maximize, Objective::Minimize] {
            let first = engine.find_best_move(&board, side, Evaluation::Combined, objective);
            let second = engine.find_best_move(&board, side, Evaluation::Combined, objective);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_engines_with_different_depths_coexist() {
    let shallow = SearchEngine::with_depth(1);
    let deep = SearchEngine::with_depth(3);
    assert_eq!(shallow.config().depth, 1);
    assert_eq!(deep.config().depth, 3);
    let board = Board::new();
    for engine in [&shallow, &deep] {
        let mv =
            engine.find_best_move(&board, Side::Black, Evaluation::Mobility, Objective::Maximize);
        assert!(mv.is_some());
    }
}

// =============================================================================
// Full games through the controller
// =============================================================================

#[test]
fn test_combined_beats_saboteur() {
    let engine = SearchEngine::with_depth(2);
    let mut rng = fastrand::Rng::with_seed(0);
    let mut game = Game::new(Seat::Ai(Strategy::CombinedMax), Seat::Ai(Strategy::CombinedMin));
    game.run_ai(&engine, &mut rng);
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Outcome::Winner(Side::Black)));
}

#[test]
fn test_seeded_games_are_reproducible() {
    let engine = SearchEngine::with_depth(1);
    let play = |seed| {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = Game::new(Seat::Ai(Strategy::Random), Seat::Ai(Strategy::Greedy));
        game.run_ai(&engine, &mut rng);
        game.history().to_vec()
    };
    assert_eq!(play(9), play(9));
}
