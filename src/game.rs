//! Game controller: owns the live board and decides whose turn it is.
//!
//! The rules module never tracks turns. This is where forced passes happen:
//! after a move, the opponent plays next if it can; otherwise the same side
//! moves again; if neither can, the game is over.

use log::info;
use thiserror::Error;

use crate::board::{Board, Move, Side};
use crate::rules::{self, Outcome, Score};
use crate::search::SearchEngine;
use crate::strategy::{Strategy, choose_move};

/// Who controls a side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Ai(Strategy),
}

impl Seat {
    /// Label for the seat: `"You"` for humans, the strategy's fallback name otherwise.
    pub fn display_name(self) -> &'static str {
        match self {
            Seat::Human => "You",
            Seat::Ai(strategy) => strategy.fallback_name(),
        }
    }
}

/// Ways a controller request can be refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move {mv} for {side}")]
    IllegalMove { mv: Move, side: Side },
    #[error("the game is over")]
    GameOver,
    #[error("{0} is not controlled by the computer")]
    NotAiTurn(Side),
    #[error("{0} is controlled by the computer")]
    NotHumanTurn(Side),
}

/// Record of one accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub mv: Move,
    pub side: Side,
    /// Played cell first, then every flipped disc.
    pub captured: Vec<Move>,
    /// True if the opponent had to pass, so `side` moves again.
    pub opponent_passed: bool,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Side,
    over: bool,
    seats: [Seat; 2],
    history: Vec<(Move, Side)>,
}

impl Game {
    /// New game from the starting position, Black to move.
    pub fn new(black: Seat, white: Seat) -> Self {
        Game {
            board: Board::new(),
            to_move: Side::Black,
            over: false,
            seats: [black, white],
            history: Vec::new(),
        }
    }

    /// Rebuild a game by replaying `moves` from the start. Both seats are human.
    pub fn replay(moves: &[(Move, Side)]) -> Result<Self, GameError> {
        let mut game = Game::new(Seat::Human, Seat::Human);
        for &(mv, side) in moves {
            if game.over {
                return Err(GameError::GameOver);
            }
            if side != game.to_move {
                return Err(GameError::IllegalMove { mv, side });
            }
            game.play(mv)?;
        }
        Ok(game)
    }

    /// Start over from the initial position, keeping the seats.
    pub fn reset(&mut self) {
        *self = Game::new(self.seats[0], self.seats[1]);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Side> {
        (!self.over).then_some(self.to_move)
    }

    pub fn seat(&self, side: Side) -> Seat {
        self.seats[seat_index(side)]
    }

    pub fn set_seat(&mut self, side: Side, seat: Seat) {
        self.seats[seat_index(side)] = seat;
    }

    pub fn history(&self) -> &[(Move, Side)] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.over {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.to_move)
    }

    pub fn score(&self) -> Score {
        rules::score(&self.board)
    }

    pub fn winner(&self) -> Option<Outcome> {
        rules::winner(&self.board)
    }

    /// Play `mv` for the side to move, which must have a human seat.
    pub fn play(&mut self, mv: Move) -> Result<Turn, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        if self.seat(self.to_move) != Seat::Human {
            return Err(GameError::NotHumanTurn(self.to_move));
        }
        self.apply(mv)
    }

    /// Play `mv` for the side to move regardless of its seat.
    fn apply(&mut self, mv: Move) -> Result<Turn, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let side = self.to_move;
        let (next, captured) = rules::apply_move(&self.board, mv, side);
        if captured.is_empty() {
            return Err(GameError::IllegalMove { mv, side });
        }
        self.board = next;
        self.history.push((mv, side));

        let opponent = side.opponent();
        let mut opponent_passed = false;
        if rules::is_terminal(&self.board) {
            self.over = true;
            let s = self.score();
            info!("game over: black {} white {}", s.black, s.white);
        } else if rules::has_legal_move(&self.board, opponent) {
            self.to_move = opponent;
        } else {
            opponent_passed = true;
            info!("{opponent} has no legal move and passes");
        }

        Ok(Turn {
            mv,
            side,
            captured,
            opponent_passed,
        })
    }

    /// Let the computer seat for the side to move pick and play its move.
    pub fn ai_turn(
        &mut self,
        engine: &SearchEngine,
        rng: &mut fastrand::Rng,
    ) -> Result<Turn, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let side = self.to_move;
        let Seat::Ai(strategy) = self.seat(side) else {
            return Err(GameError::NotAiTurn(side));
        };
        // Not terminal, and `to_move` always has a move here.
        let mv = choose_move(&self.board, side, strategy, engine, rng).ok_or(GameError::GameOver)?;
        self.apply(mv)
    }

    /// Play computer turns until the game ends or a human is to move.
    pub fn run_ai(&mut self, engine: &SearchEngine, rng: &mut fastrand::Rng) -> Vec<Turn> {
        let mut turns = Vec::new();
        while let Some(side) = self.to_move() {
            if self.seat(side) == Seat::Human {
                break;
            }
            match self.ai_turn(engine, rng) {
                Ok(turn) => turns.push(turn),
                Err(_) => break,
            }
        }
        turns
    }
}

fn seat_index(side: Side) -> usize {
    match side {
        Side::Black => 0,
        Side::White => 1,
    }
}
