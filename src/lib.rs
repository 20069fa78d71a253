//! Reversi-Rust: a Reversi (Othello) rules engine with computer opponents.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, weight table, and search defaults
//! - [`board`] - Sides, cells, moves, and the 8x8 board
//! - [`rules`] - Legal moves, captures, move application, scoring
//! - [`eval`] - Static evaluation functions
//! - [`search`] - Alpha-beta minimax search
//! - [`strategy`] - Opponent strategies and the move dispatcher
//! - [`game`] - Turn-keeping game controller with forced passes
//! - [`console`] - Text console for interactive play
//!
//! ## Example
//!
//! ```
//! use reversi_rust::board::{Board, Side};
//! use reversi_rust::rules::{apply_move, legal_moves};
//! use reversi_rust::search::SearchEngine;
//! use reversi_rust::strategy::{Strategy, choose_move};
//!
//! let board = Board::new();
//! assert_eq!(legal_moves(&board, Side::Black).len(), 4);
//!
//! let engine = SearchEngine::with_depth(3);
//! let mut rng = fastrand::Rng::with_seed(1);
//! let mv = choose_move(&board, Side::Black, Strategy::CombinedMax, &engine, &mut rng).unwrap();
//! let (board, captured) = apply_move(&board, mv, Side::Black);
//! assert_eq!(captured.len(), 2);
//! println!("{board}");
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod strategy;
