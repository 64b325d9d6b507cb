use thiserror::Error;

use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::{self, GameEnding};
use crate::input_handler::fen::Position;
use crate::input_handler::MoveInput;
use crate::move_generator::{generate_moves, ChessMoveList};
use crate::searcher::{MoveChoice, SearchConfig, SearchStats, Searcher};

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub starting_position: Board,
    pub starting_turn: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            starting_position: Board::starting_position(),
            starting_turn: Color::White,
        }
    }
}

impl EngineConfig {
    pub fn from_position(search: SearchConfig, position: Position) -> Self {
        Self {
            search,
            starting_position: position.board,
            starting_turn: position.turn,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("{chess_move} is not a legal move for {color}")]
    IllegalMove { chess_move: ChessMove, color: Color },
    #[error("the game is over: {ending}")]
    GameOver { ending: GameEnding },
}

/// Owns the authoritative board, whose turn it is, and the searcher used for
/// engine moves.
pub struct Engine {
    board: Board,
    turn: Color,
    searcher: Searcher,
    move_history: Vec<ChessMove>,
    last_score: Option<i32>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            turn: config.starting_turn,
            searcher: Searcher::new(config.search),
            move_history: Vec::new(),
            last_score: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    /// Score of the last engine move from the mover's point of view.
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn search_stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    pub fn legal_moves(&mut self) -> ChessMoveList {
        generate_moves(&mut self.board, self.turn)
    }

    pub fn check_game_over(&mut self) -> Option<GameEnding> {
        evaluate::game_ending(&mut self.board, self.turn)
    }

    /// Applies a move for the side to move if it is legal, then passes the turn.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<ChessMove, EngineError> {
        let chess_move = ChessMove::new(from, to);
        if !self.legal_moves().contains(&chess_move) {
            return Err(EngineError::IllegalMove {
                chess_move,
                color: self.turn,
            });
        }

        self.apply_chess_move(chess_move);
        Ok(chess_move)
    }

    /// Asks the searcher what the side to move should do, without moving.
    pub fn choose_move(&mut self) -> MoveChoice {
        let choice = self.searcher.choose_move(&mut self.board, self.turn);
        self.last_score = self.searcher.stats().best_score;
        choice
    }

    pub fn make_best_move(&mut self) -> Result<ChessMove, EngineError> {
        match self.choose_move() {
            MoveChoice::Move(chess_move) => {
                self.apply_chess_move(chess_move);
                Ok(chess_move)
            }
            MoveChoice::Checkmate => Err(EngineError::GameOver {
                ending: GameEnding::Checkmate,
            }),
            MoveChoice::Stalemate => Err(EngineError::GameOver {
                ending: GameEnding::Stalemate,
            }),
        }
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<ChessMove, EngineError> {
        match input {
            MoveInput::Coordinate(chess_move) => {
                self.make_move(chess_move.from_square(), chess_move.to_square())
            }
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    fn apply_chess_move(&mut self, chess_move: ChessMove) {
        self.board
            .make_move(chess_move.from_square(), chess_move.to_square());
        self.move_history.push(chess_move);
        self.turn = self.turn.opposite();
    }
}
