//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "chess",
    about = "A small negamax chess engine implemented in Rust ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches with the given `--strategy` (default: alpha-beta) to the given `--depth` (default: 3). You play white unless you specify otherwise with `--color`. The initial position can be specified using FEN notation with `--fen` (default: starting position). Type `quit` to leave the game."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself. Each engine move takes at least `--delay` milliseconds (default: 1000). The initial position can be specified using FEN notation with `--fen` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the chess engine to determine the best move from a given position, provided in FEN notation with `--fen` (required). The side to move is read from the FEN."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
        }
    }
}
