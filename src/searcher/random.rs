use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use super::{terminal_choice, MoveChoice, Searcher};
use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::move_generator::legal_targets;

impl Searcher {
    /// Draws the side's pieces at random, without replacement, until one has
    /// a legal destination, then picks one of its destinations at random.
    pub(super) fn choose_random_move(&mut self, board: &mut Board, color: Color) -> MoveChoice {
        let mut pieces: SmallVec<[Square; 16]> =
            board.squares_of(color).map(|(square, _)| square).collect();

        while !pieces.is_empty() {
            let origin = pieces.swap_remove(self.rng.gen_range(0..pieces.len()));
            self.stats.positions_searched += 1;

            let targets = legal_targets(board, origin, color);
            if let Some(&destination) = targets.choose(&mut self.rng) {
                return MoveChoice::Move(ChessMove::new(origin, destination));
            }
        }

        terminal_choice(board, color)
    }
}
