//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod calculate_best_move;
pub mod play;
pub mod watch;

// Shared utilities for commands
pub(crate) mod util;
