//! Calculate best move command - determine the best move from a position.

use negamax_chess::game::engine::Engine;
use negamax_chess::input_handler::fen::Position;
use negamax_chess::searcher::MoveChoice;
use structopt::StructOpt;

use super::util::{create_config, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(long = "fen")]
    pub starting_position: Position,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = create_config(&self.search, self.starting_position);
        let mut engine = Engine::with_config(config);

        match engine.choose_move() {
            MoveChoice::Move(best_move) => println!("{}", best_move),
            MoveChoice::Checkmate => eprintln!("{} is checkmated.", engine.turn()),
            MoveChoice::Stalemate => eprintln!("{} is stalemated.", engine.turn()),
        }
    }
}
