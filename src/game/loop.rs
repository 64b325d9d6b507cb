use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::board::color::Color;
use crate::evaluate::GameEnding;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::input_handler::{InputError, MoveInput};

/// How a game loop finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// `loser` is the side left without a legal move.
    Ended { ending: GameEnding, loser: Color },
    MoveLimitReached,
    Quit,
}

pub struct GameLoop<T: InputSource> {
    engine: Engine,
    input: T,
    /// Minimum wall-clock time per engine move.
    move_delay: Option<Duration>,
    move_limit: Option<usize>,
    quiet: bool,
}

impl<T: InputSource> GameLoop<T> {
    pub fn new(input: T, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            input,
            move_delay: None,
            move_limit: None,
            quiet: false,
        }
    }

    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = Some(delay);
        self
    }

    pub fn with_move_limit(mut self, move_limit: usize) -> Self {
        self.move_limit = Some(move_limit);
        self
    }

    /// Skips printing the board between moves.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn run(&mut self) -> GameResult {
        loop {
            let current_turn = self.engine.turn();

            if let Some(ending) = self.engine.check_game_over() {
                self.render();
                println!(
                    "{}! {} has no legal moves.",
                    capitalize(&ending.to_string()),
                    current_turn
                );
                return GameResult::Ended {
                    ending,
                    loser: current_turn,
                };
            }

            if let Some(move_limit) = self.move_limit {
                if self.engine.move_history().len() >= move_limit {
                    info!("stopping after {} moves", move_limit);
                    return GameResult::MoveLimitReached;
                }
            }

            self.render();

            let input = match self.input.get_move(current_turn) {
                Ok(Some(input)) => input,
                Ok(None) => {
                    println!("Invalid input, enter a move like e2e4");
                    continue;
                }
                Err(InputError::UserExit) => return GameResult::Quit,
                Err(error) => {
                    warn!("{}", error);
                    return GameResult::Quit;
                }
            };

            let started = Instant::now();
            match self.engine.make_move_from_input(input) {
                Ok(chess_move) => {
                    println!("{} played {}", current_turn, chess_move);
                    if input == MoveInput::UseEngine {
                        self.pace(started);
                    }
                }
                Err(error) => {
                    warn!("{}", error);
                    println!("error: {}", error);
                }
            }
        }
    }

    /// Sleeps out whatever remains of the minimum move time.
    fn pace(&self, started: Instant) {
        if let Some(delay) = self.move_delay {
            if let Some(remaining) = remaining_delay(started.elapsed(), delay) {
                thread::sleep(remaining);
            }
        }
    }

    fn render(&self) {
        if self.quiet {
            return;
        }

        println!("{}", self.engine.board());
        if let Some(score) = self.engine.last_score() {
            let stats = self.engine.search_stats();
            println!(
                "* Score: {}\n* Positions searched: {}\n* Move took: {}",
                score,
                stats.positions_searched,
                stats
                    .duration
                    .map_or("-".to_string(), |duration| format!("{:?}", duration))
            );
        }
    }
}

pub fn remaining_delay(elapsed: Duration, minimum: Duration) -> Option<Duration> {
    minimum.checked_sub(elapsed).filter(|remaining| *remaining > Duration::ZERO)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
