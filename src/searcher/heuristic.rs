use log::debug;

use super::{terminal_choice, MoveChoice, Searcher, INFINITY, MATE_SCORE};
use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate::{is_checkmate, material_score};
use crate::move_generator::generate_moves;

impl Searcher {
    /// One ply: material after each move, with mating the opponent outranking
    /// any material gain.
    pub(super) fn choose_heuristic_move(&mut self, board: &mut Board, color: Color) -> MoveChoice {
        let candidates = generate_moves(board, color);
        if candidates.is_empty() {
            return terminal_choice(board, color);
        }

        let mut best_score = -INFINITY;
        let mut best_moves = Vec::new();

        for &chess_move in candidates.iter() {
            let score = {
                let mut after = board.scoped_move(chess_move.from_square(), chess_move.to_square());
                self.stats.positions_searched += 1;
                if is_checkmate(&mut after, color.opposite()) {
                    MATE_SCORE
                } else {
                    material_score(&after, color, &self.config.piece_values)
                }
            };
            debug!("{:?}: {}", chess_move, score);

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(chess_move);
            } else if score == best_score {
                best_moves.push(chess_move);
            }
        }

        self.stats.best_score = Some(best_score);
        match self.break_tie(&best_moves, best_score) {
            Some(chess_move) => MoveChoice::Move(chess_move),
            None => terminal_choice(board, color),
        }
    }
}
