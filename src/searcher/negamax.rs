//! Fixed-depth negamax without pruning, optionally backed by the
//! transposition table.

use log::debug;

use super::transposition_table::BoundType;
use super::{terminal_choice, terminal_score, MoveChoice, Searcher, INFINITY};
use crate::board::color::Color;
use crate::board::Board;
use crate::move_generator::generate_moves;

impl Searcher {
    pub(super) fn choose_negamax_move(
        &mut self,
        board: &mut Board,
        color: Color,
        use_table: bool,
    ) -> MoveChoice {
        let depth = self.depth();
        let candidates = generate_moves(board, color);
        if candidates.is_empty() {
            return terminal_choice(board, color);
        }

        let mut best_score = -INFINITY;
        let mut best_moves = Vec::new();

        for &chess_move in candidates.iter() {
            let score = {
                let mut child = board.scoped_move(chess_move.from_square(), chess_move.to_square());
                -self.negamax(&mut child, color.opposite(), depth - 1, use_table)
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

    /// Score of the position for `color`, the side to move, searched
    /// `depth` plies deep.
    pub(super) fn negamax(
        &mut self,
        board: &mut Board,
        color: Color,
        depth: u8,
        use_table: bool,
    ) -> i32 {
        self.stats.positions_searched += 1;

        if depth == 0 {
            return self.leaf_score(board, color);
        }

        let key = if use_table {
            Some(board.position_key(color))
        } else {
            None
        };

        if let Some(key) = &key {
            if let Some(entry) = self.transposition_table.probe(key, depth) {
                self.stats.cache_hits += 1;
                return entry.score;
            }
        }

        let candidates = generate_moves(board, color);
        let (best_score, best_move) = if candidates.is_empty() {
            let score = terminal_score(board, color, depth, &self.config.piece_values);
            (score, None)
        } else {
            let mut best_score = -INFINITY;
            let mut best_move = None;
            for &chess_move in candidates.iter() {
                let mut child = board.scoped_move(chess_move.from_square(), chess_move.to_square());
                let score = -self.negamax(&mut child, color.opposite(), depth - 1, use_table);
                if score > best_score {
                    best_score = score;
                    best_move = Some(chess_move);
                }
            }
            (best_score, best_move)
        };

        if let Some(key) = key {
            self.transposition_table
                .store(key, best_score, depth, BoundType::Exact, best_move);
        }

        best_score
    }
}
