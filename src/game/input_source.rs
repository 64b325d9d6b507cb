use log::warn;

use crate::board::color::Color;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

/// Where the next move comes from. `Ok(None)` means the input was unusable
/// and should be asked for again.
pub trait InputSource {
    fn get_move(&mut self, current_turn: Color) -> Result<Option<MoveInput>, InputError>;
}

fn human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(error) => {
            warn!("{}", error);
            Ok(None)
        }
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&mut self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

pub struct ConditionalInput {
    pub human_color: Color,
}

impl InputSource for ConditionalInput {
    fn get_move(&mut self, current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_color {
            human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}

/// Replays a fixed list of inputs, then exits.
pub struct ScriptedInput {
    inputs: std::vec::IntoIter<MoveInput>,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<MoveInput>) -> Self {
        Self {
            inputs: inputs.into_iter(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn get_move(&mut self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        self.inputs.next().map(Some).ok_or(InputError::UserExit)
    }
}
