use std::ops::{Deref, DerefMut};

use super::square::Square;
use super::Board;

/// A move applied to a board for the lifetime of the guard. Dropping the guard
/// undoes the move, so every exit path of a recursive search (including early
/// returns on a cutoff) leaves the board exactly as it found it.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl<'a> MoveGuard<'a> {
    pub(super) fn new(board: &'a mut Board, origin: Square, destination: Square) -> Self {
        board.make_move(origin, destination);
        Self { board }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}
