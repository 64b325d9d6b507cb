//! Watch command - watch the computer play against itself.

use std::time::Duration;

use negamax_chess::game::input_source::EngineInput;
use negamax_chess::game::r#loop::GameLoop;
use negamax_chess::input_handler::fen::{Position, STARTING_POSITION_FEN};
use structopt::StructOpt;

use super::util::{create_config, report, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Position,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Minimum time per move in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "max-moves", help = "Stop after this many moves")]
    pub max_moves: Option<usize>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(&self.search, self.starting_position);
        let mut game = GameLoop::new(EngineInput, config)
            .with_move_delay(Duration::from_millis(self.delay_ms));
        if let Some(max_moves) = self.max_moves {
            game = game.with_move_limit(max_moves);
        }

        report(game.run());
    }
}
