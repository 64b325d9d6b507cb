//! Shared utilities for CLI commands.

use std::time::Duration;

use negamax_chess::game::engine::EngineConfig;
use negamax_chess::game::input_source::InputSource;
use negamax_chess::game::r#loop::{GameLoop, GameResult};
use negamax_chess::input_handler::fen::Position;
use negamax_chess::searcher::{SearchConfig, Strategy};
use structopt::StructOpt;

/// Search flags shared by every command.
#[derive(StructOpt)]
pub struct SearchArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(
        short,
        long,
        default_value = "alpha-beta",
        help = "One of: random, heuristic, negamax, negamax-tt, alpha-beta"
    )]
    pub strategy: Strategy,
    #[structopt(long, help = "Seed for the engine's random choices")]
    pub seed: Option<u64>,
}

impl SearchArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            strategy: self.strategy,
            search_depth: self.depth,
            seed: self.seed,
            ..SearchConfig::default()
        }
    }
}

pub(crate) fn run_game_loop<I>(input_source: I, config: EngineConfig, delay: Duration)
where
    I: InputSource,
{
    let mut game = GameLoop::new(input_source, config).with_move_delay(delay);
    report(game.run());
}

pub(crate) fn create_config(search: &SearchArgs, position: Position) -> EngineConfig {
    EngineConfig::from_position(search.search_config(), position)
}

pub(crate) fn report(result: GameResult) {
    match result {
        GameResult::Ended { ending, loser } => {
            println!("Game over: {} ({} loses)", ending, loser)
        }
        GameResult::MoveLimitReached => println!("Move limit reached."),
        GameResult::Quit => println!("Goodbye."),
    }
}
