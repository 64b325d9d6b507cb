//! Transposition table for caching search results by position.

use rustc_hash::FxHashMap;

use crate::board::PositionKey;
use crate::chess_move::ChessMove;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TTEntry {
    pub score: i32,
    pub depth: u8,
    pub bound_type: BoundType,
    /// Move that produced `score`. `None` for positions without a legal move
    /// and for nodes where every move failed low.
    pub best_move: Option<ChessMove>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoundType {
    Exact,
    Lower,
    Upper,
}

#[derive(Default, Debug)]
pub struct TranspositionTable {
    table: FxHashMap<PositionKey, TTEntry>,
    hits: usize,
    depth_rejected: usize,
    overwrites: usize,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(
        &mut self,
        key: PositionKey,
        score: i32,
        depth: u8,
        bound_type: BoundType,
        best_move: Option<ChessMove>,
    ) {
        let entry = TTEntry {
            score,
            depth,
            bound_type,
            best_move,
        };

        // always replace
        if self.table.insert(key, entry).is_some() {
            self.overwrites += 1;
        }
    }

    /// Returns the entry for `key` only if it was searched at least `depth`
    /// plies deep. What the caller does with a bound is up to the caller.
    pub fn probe(&mut self, key: &PositionKey, depth: u8) -> Option<TTEntry> {
        let entry = *self.table.get(key)?;
        if entry.depth >= depth {
            self.hits += 1;
            Some(entry)
        } else {
            self.depth_rejected += 1;
            None
        }
    }

    /// Best move recorded for `key` at any depth, for move ordering.
    pub fn best_move(&self, key: &PositionKey) -> Option<ChessMove> {
        self.table.get(key).and_then(|entry| entry.best_move)
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.depth_rejected = 0;
        self.overwrites = 0;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn depth_rejected(&self) -> usize {
        self.depth_rejected
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites
    }
}
