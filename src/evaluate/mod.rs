use std::fmt;

use crate::board::color::Color;
use crate::board::Board;

pub mod check;
mod piece_values;

pub use check::{
    attackers_of, is_checkmate, is_stalemate, king_in_check, no_legal_moves,
    no_legal_moves_fast, square_in_danger,
};
pub use piece_values::PieceValues;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::Checkmate => write!(f, "checkmate"),
            GameEnding::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[inline(always)]
pub fn player_is_in_check(board: &Board, player: Color) -> bool {
    king_in_check(board, player).is_some()
}

/// Returns the game ending state if `current_turn` has no legal move,
/// otherwise returns None.
pub fn game_ending(board: &mut Board, current_turn: Color) -> Option<GameEnding> {
    if !no_legal_moves_fast(board, current_turn) {
        return None;
    }

    if player_is_in_check(board, current_turn) {
        Some(GameEnding::Checkmate)
    } else {
        Some(GameEnding::Stalemate)
    }
}

/// Own material minus the opponent's, from `color`'s point of view.
pub fn material_score(board: &Board, color: Color, values: &PieceValues) -> i32 {
    board.grid().iter().fold(0, |score, &piece| {
        let value = values.piece_value(piece);
        if piece.belongs_to(color) {
            score + value
        } else {
            score - value
        }
    })
}
