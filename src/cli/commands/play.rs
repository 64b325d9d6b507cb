//! Play command - play a game against the computer.

use std::time::Duration;

use negamax_chess::board::color::Color;
use negamax_chess::game::input_source::ConditionalInput;
use negamax_chess::input_handler::fen::{Position, STARTING_POSITION_FEN};
use structopt::StructOpt;

use super::util::{create_config, run_game_loop, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(short = "c", long = "color", default_value = "white")]
    pub color: Color,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Position,
    #[structopt(
        long = "delay",
        default_value = "0",
        help = "Minimum time per engine move in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for PlayArgs {
    fn execute(self) {
        println!("You are playing {}. Enter moves like e2e4, or `quit`.", self.color);
        let config = create_config(&self.search, self.starting_position);
        run_game_loop(
            ConditionalInput {
                human_color: self.color,
            },
            config,
            Duration::from_millis(self.delay_ms),
        );
    }
}
