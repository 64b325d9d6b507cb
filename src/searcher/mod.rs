//! Move selection. One `Searcher` type serves every strategy; the strategy is
//! picked by configuration.

mod alpha_beta;
mod heuristic;
pub mod move_orderer;
mod negamax;
mod random;
pub mod transposition_table;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::{material_score, no_legal_moves_fast, player_is_in_check, PieceValues};

use transposition_table::TranspositionTable;

/// Score of being checkmated with no search depth left.
pub const MATE_SCORE: i32 = 999_999;
/// Score magnitude of a stalemate with no search depth left.
pub const STALEMATE_SCORE: i32 = 500_000;
/// Larger than any reachable score.
pub const INFINITY: i32 = 10_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Heuristic,
    Negamax,
    NegamaxTt,
    AlphaBeta,
}

#[derive(Error, Debug, PartialEq)]
pub enum StrategyParseError {
    #[error("unknown strategy {input:?}, expected one of random, heuristic, negamax, negamax-tt, alpha-beta")]
    UnknownStrategy { input: String },
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "heuristic" => Ok(Strategy::Heuristic),
            "negamax" => Ok(Strategy::Negamax),
            "negamax-tt" => Ok(Strategy::NegamaxTt),
            "alpha-beta" => Ok(Strategy::AlphaBeta),
            _ => Err(StrategyParseError::UnknownStrategy {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::Heuristic => "heuristic",
            Strategy::Negamax => "negamax",
            Strategy::NegamaxTt => "negamax-tt",
            Strategy::AlphaBeta => "alpha-beta",
        };
        write!(f, "{}", name)
    }
}

/// What the side to move should do. A side with no legal move never gets a
/// move back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    Move(ChessMove),
    Stalemate,
    Checkmate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Plies explored by the negamax family. Zero is treated as one.
    pub search_depth: u8,
    pub piece_values: PieceValues,
    /// Seeds tie-breaks and the random strategy; entropy when `None`.
    pub seed: Option<u64>,
    /// Alpha-beta only. Plain negamax never uses the table and `NegamaxTt`
    /// always does.
    pub transposition_table: bool,
    pub keep_transposition_table: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            search_depth: 3,
            piece_values: PieceValues::default(),
            seed: None,
            transposition_table: true,
            keep_transposition_table: false,
        }
    }
}

/// Counters for the most recent `choose_move` call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cache_hits: usize,
    pub cutoffs: usize,
    /// Score of the chosen move from the mover's point of view. Not set by
    /// the random strategy.
    pub best_score: Option<i32>,
    pub duration: Option<Duration>,
}

pub struct Searcher {
    config: SearchConfig,
    rng: StdRng,
    transposition_table: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            transposition_table: TranspositionTable::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.transposition_table
    }

    /// Picks a move for `color`. The board is left exactly as it was given.
    pub fn choose_move(&mut self, board: &mut Board, color: Color) -> MoveChoice {
        self.stats = SearchStats::default();
        if !self.config.keep_transposition_table {
            self.transposition_table.clear();
        }

        let start = Instant::now();
        let choice = match self.config.strategy {
            Strategy::Random => self.choose_random_move(board, color),
            Strategy::Heuristic => self.choose_heuristic_move(board, color),
            Strategy::Negamax => self.choose_negamax_move(board, color, false),
            Strategy::NegamaxTt => self.choose_negamax_move(board, color, true),
            Strategy::AlphaBeta => self.choose_alpha_beta_move(board, color),
        };
        self.stats.duration = Some(start.elapsed());

        info!(
            "{} ({}, depth {}) chose {:?} with score {:?} after {} positions in {:?}",
            color,
            self.config.strategy,
            self.config.search_depth,
            choice,
            self.stats.best_score,
            self.stats.positions_searched,
            start.elapsed()
        );
        debug!(
            "cache hits: {}, cutoffs: {}, table size: {}",
            self.stats.cache_hits,
            self.stats.cutoffs,
            self.transposition_table.size()
        );

        choice
    }

    fn depth(&self) -> u8 {
        self.config.search_depth.max(1)
    }

    /// Picks uniformly among the equally scored root moves.
    fn break_tie(&mut self, best_moves: &[ChessMove], best_score: i32) -> Option<ChessMove> {
        let chosen = best_moves.choose(&mut self.rng).copied();
        if best_moves.len() > 1 {
            debug!(
                "{} moves tied at score {}: {:?}",
                best_moves.len(),
                best_score,
                best_moves
            );
        }
        chosen
    }

    /// Score of a depth-0 node from the mover's point of view.
    fn leaf_score(&self, board: &mut Board, color: Color) -> i32 {
        if no_legal_moves_fast(board, color) {
            return terminal_score(board, color, 0, &self.config.piece_values);
        }
        material_score(board, color, &self.config.piece_values)
    }
}

/// Outcome for a side that has no legal move.
pub fn terminal_choice(board: &Board, color: Color) -> MoveChoice {
    if player_is_in_check(board, color) {
        MoveChoice::Checkmate
    } else {
        MoveChoice::Stalemate
    }
}

/// Score for `color` having no legal move with `remaining_depth` plies left.
/// Larger remaining depth means the outcome was reached sooner, so it is
/// weighted more strongly. Stalemate counts as a win for a side that is
/// behind on material and as a loss otherwise.
pub fn terminal_score(
    board: &Board,
    color: Color,
    remaining_depth: u8,
    values: &PieceValues,
) -> i32 {
    let remaining_depth = remaining_depth as i32;
    if player_is_in_check(board, color) {
        return -(MATE_SCORE + remaining_depth);
    }

    if material_score(board, color, values) < 0 {
        STALEMATE_SCORE + remaining_depth
    } else {
        -(STALEMATE_SCORE + remaining_depth)
    }
}
