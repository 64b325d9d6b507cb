use thiserror::Error;

use super::color::Color;
use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on a square that is already occupied: {square}")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Cannot put a second {color} king on the board")]
    DuplicateKingBoardPutError { color: Color },
    #[error("Cannot put an empty piece on a square")]
    EmptyPieceBoardPutError,
    #[error("Square index out of range: {index}")]
    InvalidSquareIndex { index: u8 },
    #[error("Invalid algebraic square: {input:?}")]
    InvalidAlgebraicSquare { input: String },
}
