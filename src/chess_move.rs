use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::square::Square;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H][1-8])([a-hA-H][1-8])$").expect("COORD_RE regex should be valid")
});

#[macro_export]
macro_rules! chess_move {
    ($from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::new($from, $to)
    };
}

#[derive(Error, Debug, PartialEq)]
pub enum ChessMoveParseError {
    #[error("expected a move like `e2e4`, got {input:?}")]
    InvalidCoordinates { input: String },
}

/// An origin/destination pair. Everything else about a move (captured piece,
/// promotion) is derived from the board when it is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChessMove {
    from_square: Square,
    to_square: Square,
}

impl ChessMove {
    pub fn new(from_square: Square, to_square: Square) -> Self {
        Self {
            from_square,
            to_square,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }
}

impl FromStr for ChessMove {
    type Err = ChessMoveParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessMoveParseError::InvalidCoordinates {
            input: input.to_string(),
        };
        let caps = COORD_RE.captures(input.trim()).ok_or_else(invalid)?;
        let from_square = Square::from_algebraic(&caps[1]).map_err(|_| invalid())?;
        let to_square = Square::from_algebraic(&caps[2]).map_err(|_| invalid())?;
        Ok(Self::new(from_square, to_square))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from_square, self.to_square)
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
