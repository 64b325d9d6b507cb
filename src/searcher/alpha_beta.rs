//! Negamax with alpha-beta pruning, bucketed move ordering and a
//! bound-aware transposition table.
//!
//! The search is fail-soft: a node may return a score outside the window it
//! was given, and the table records whether that score is exact, a lower
//! bound (the node failed high) or an upper bound (it failed low).

use std::cmp::{max, min};

use log::debug;

use super::move_orderer::order_moves;
use super::transposition_table::BoundType;
use super::{terminal_choice, terminal_score, MoveChoice, Searcher, INFINITY};
use crate::board::color::Color;
use crate::board::{Board, PositionKey};
use crate::chess_move::ChessMove;
use crate::move_generator::generate_moves;

impl Searcher {
    pub(super) fn choose_alpha_beta_move(&mut self, board: &mut Board, color: Color) -> MoveChoice {
        let depth = self.depth();
        let mut candidates = generate_moves(board, color);
        if candidates.is_empty() {
            return terminal_choice(board, color);
        }
        order_moves(board, color, &mut candidates);

        let mut best_score = -INFINITY;
        let mut best_moves = Vec::new();

        for &chess_move in candidates.iter() {
            // (best - 1, inf) keeps the score of a tying move exact
            let alpha = if best_moves.is_empty() {
                -INFINITY
            } else {
                best_score - 1
            };

            let score = {
                let mut child = board.scoped_move(chess_move.from_square(), chess_move.to_square());
                -self.alpha_beta(&mut child, color.opposite(), depth - 1, -INFINITY, -alpha)
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

    pub(super) fn alpha_beta(
        &mut self,
        board: &mut Board,
        color: Color,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.positions_searched += 1;

        if depth == 0 {
            return self.leaf_score(board, color);
        }

        let key = if self.config.transposition_table {
            Some(board.position_key(color))
        } else {
            None
        };

        if let Some(key) = &key {
            if let Some(entry) = self.transposition_table.probe(key, depth) {
                self.stats.cache_hits += 1;
                match entry.bound_type {
                    BoundType::Exact => return entry.score,
                    BoundType::Lower => alpha = max(alpha, entry.score),
                    BoundType::Upper => beta = min(beta, entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        let (window_alpha, window_beta) = (alpha, beta);
        let mut candidates = generate_moves(board, color);

        let (best_score, bound_type, best_move) = if candidates.is_empty() {
            let score = terminal_score(board, color, depth, &self.config.piece_values);
            (score, BoundType::Exact, None)
        } else {
            order_moves(board, color, &mut candidates);
            if let Some(key) = &key {
                self.try_table_move_first(key, &mut candidates);
            }

            let mut best_score = -INFINITY;
            let mut best_move = None;
            for &chess_move in candidates.iter() {
                let score = {
                    let mut child =
                        board.scoped_move(chess_move.from_square(), chess_move.to_square());
                    -self.alpha_beta(&mut child, color.opposite(), depth - 1, -beta, -alpha)
                };

                if score > best_score {
                    best_score = score;
                    best_move = Some(chess_move);
                }
                alpha = max(alpha, best_score);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }

            let bound_type = if best_score <= window_alpha {
                BoundType::Upper
            } else if best_score >= window_beta {
                BoundType::Lower
            } else {
                BoundType::Exact
            };
            // a fail-low node has no trustworthy best move
            let best_move = best_move.filter(|_| bound_type != BoundType::Upper);
            (best_score, bound_type, best_move)
        };

        if let Some(key) = key {
            self.transposition_table
                .store(key, best_score, depth, bound_type, best_move);
        }

        best_score
    }

    /// Moves the best move from an earlier, possibly shallower, visit of this
    /// position to the front. The rest keep their bucket order.
    fn try_table_move_first(&self, key: &PositionKey, candidates: &mut [ChessMove]) {
        let table_move = match self.transposition_table.best_move(key) {
            Some(table_move) => table_move,
            None => return,
        };
        if let Some(index) = candidates.iter().position(|&m| m == table_move) {
            candidates[..=index].rotate_right(1);
        }
    }
}
