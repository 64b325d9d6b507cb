use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::square::{Square, BOARD_HEIGHT, BOARD_WIDTH};
use crate::board::Board;

#[derive(Error, Debug, PartialEq)]
pub enum FenParseError {
    #[error("Wrong number of fields: expected 2 to 6, {field_count:?} given")]
    WrongNumberOfFields { field_count: usize },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of ranks: 8 expected, {rank_count:?} given")]
    InvalidRankCount { rank_count: usize },
    #[error("Rank too long: {invalid_rank:?}")]
    InvalidRankLength { invalid_rank: String },
    #[error("Error placing piece: {board_error:?}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Rank incomplete: {incomplete_rank:?}")]
    IncompleteRank { incomplete_rank: String },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
    #[error("Missing {color} king")]
    MissingKing { color: Color },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board together with the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub turn: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }
}

/// Parses a FEN (Forsyth–Edwards Notation) string. Only piece placement and
/// the active color are used; castling rights, en passant square and the
/// move clocks may be present but are ignored.
pub fn parse_fen(fen: &str) -> FenResult<Position> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 2 || fields.len() > 6 {
        return Err(FenParseError::WrongNumberOfFields {
            field_count: fields.len(),
        });
    }

    let mut board = Board::new();
    parse_piece_placement(&mut board, fields[0])?;
    let turn = parse_active_color(fields[1])?;

    for &color in &Color::ALL {
        if board.king_square(color).is_none() {
            return Err(FenParseError::MissingKing { color });
        }
    }

    Ok(Position { board, turn })
}

/// Parses the piece placement section of the FEN string
fn parse_piece_placement(board: &mut Board, placement: &str) -> FenResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_HEIGHT as usize {
        return Err(FenParseError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    // FEN lists rank 8 first, which is also row 0
    for (row, rank) in ranks.iter().enumerate() {
        parse_rank(board, rank, row as i8)?;
    }

    Ok(())
}

fn parse_rank(board: &mut Board, rank: &str, row: i8) -> FenResult<()> {
    let invalid_rank = || FenParseError::InvalidRankLength {
        invalid_rank: rank.to_string(),
    };
    let mut col = 0i8;

    for c in rank.chars() {
        if let Some(empty_squares) = c.to_digit(10) {
            col += empty_squares as i8;
            if col > BOARD_WIDTH as i8 {
                return Err(invalid_rank());
            }
            continue;
        }

        let piece = Piece::from_fen(c).ok_or(FenParseError::InvalidPieceCharacter {
            invalid_character: c,
        })?;
        let square = Square::from_row_col(row, col).ok_or_else(invalid_rank)?;
        board
            .put(square, piece)
            .map_err(|board_error| FenParseError::ErrorPlacingPiece { board_error })?;
        col += 1;
    }

    if col != BOARD_WIDTH as i8 {
        return Err(FenParseError::IncompleteRank {
            incomplete_rank: rank.to_string(),
        });
    }

    Ok(())
}

fn parse_active_color(active_color: &str) -> FenResult<Color> {
    match active_color {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenParseError::InvalidColor {
            invalid_color: active_color.to_string(),
        }),
    }
}

impl FromStr for Position {
    type Err = FenParseError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}

/// Writes placement and active color, with the remaining fields blank.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.board.grid().chunks(BOARD_WIDTH as usize).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }

            let mut empty = 0;
            for piece in rank {
                if piece.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    write!(f, "{}", empty)?;
                    empty = 0;
                }
                write!(f, "{}", piece.to_fen())?;
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }

        let active_color = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };
        write!(f, " {} - - 0 1", active_color)
    }
}
