//! Move input parsing.

pub mod fen;

use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;

use crate::chess_move::ChessMove;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate(ChessMove),
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "quit" | "exit" | "q" => Err(InputError::UserExit),
            "engine" | "hint" => Ok(MoveInput::UseEngine),
            _ => trimmed
                .parse::<ChessMove>()
                .map(MoveInput::Coordinate)
                .map_err(|_| InputError::InvalidInput {
                    input: input.trim().to_string(),
                }),
        }
    }
}

/// Reads one line of move input from stdin.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_move_input(&mut handle)
}

/// Reads one line of move input. End of input counts as exiting.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}
