pub mod color;
pub mod encoded_move;
pub mod error;
pub mod move_guard;
pub mod piece;
pub mod square;

mod display;


use color::Color;
use encoded_move::{EncodedMove, MoveRecord};
use error::BoardError;
use move_guard::MoveGuard;
use piece::{Piece, PieceKind};
use square::Square;

/// Bytes of the canonical position key: one piece code per square followed by
/// the side to move.
pub const POSITION_KEY_LEN: usize = 65;

/// Canonical encoding of a grid plus side to move, used as a transposition key.
pub type PositionKey = [u8; POSITION_KEY_LEN];

/// Represents the state of a chess board: the 8x8 grid of packed piece codes,
/// the cached square of each king, and the history of encoded moves that makes
/// `undo_move` exact.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: [Piece; 64],
    white_king: Option<Square>,
    black_king: Option<Square>,
    history: Vec<EncodedMove>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [Piece::EMPTY; 64],
            white_king: None,
            black_king: None,
            history: Vec::new(),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        crate::chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn grid(&self) -> &[Piece; 64] {
        &self.grid
    }

    pub fn get(&self, square: Square) -> Piece {
        self.grid[square.index()]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        !self.get(square).is_empty()
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if piece.is_empty() {
            return Err(BoardError::EmptyPieceBoardPutError);
        }
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }
        if let (Some(PieceKind::King), Some(color)) = (piece.kind(), piece.color()) {
            if self.king_square(color).is_some() {
                return Err(BoardError::DuplicateKingBoardPutError { color });
            }
        }
        self.grid[square.index()] = piece;
        if piece.kind() == Some(PieceKind::King) {
            self.set_king_square(piece, Some(square));
        }
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square);
        if piece.is_empty() {
            return None;
        }
        self.grid[square.index()] = Piece::EMPTY;
        if piece.kind() == Some(PieceKind::King) && self.king_square_for(piece) == Some(square) {
            self.set_king_square(piece, None);
        }
        Some(piece)
    }

    /// The cached king location for `color`, or `None` when that side has no king
    /// on the board (only possible in hand-built test positions).
    pub fn king_square(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<EncodedMove> {
        self.history.last().copied()
    }

    /// Moves whatever stands on `origin` to `destination`, recording enough to
    /// undo it. A pawn reaching the far rank becomes a queen. Legality is the
    /// caller's concern.
    pub fn make_move(&mut self, origin: Square, destination: Square) -> EncodedMove {
        let moved = self.get(origin);
        let captured = self.get(destination);

        let promotion = match (moved.kind(), moved.color()) {
            (Some(PieceKind::Pawn), Some(color)) => destination.row() == color.promotion_row(),
            _ => false,
        };
        let placed = match moved.color() {
            Some(color) if promotion => Piece::new(PieceKind::Queen, color),
            _ => moved,
        };

        if moved.kind() == Some(PieceKind::King) {
            self.set_king_square(moved, Some(destination));
        }

        let encoded = MoveRecord::new(moved, captured, origin, destination)
            .with_promotion(promotion)
            .encode();
        self.history.push(encoded);

        self.grid[destination.index()] = placed;
        self.grid[origin.index()] = Piece::EMPTY;

        encoded
    }

    /// Reverts the most recent `make_move` and returns its origin and destination.
    /// Does nothing when the history is empty.
    pub fn undo_move(&mut self) -> Option<(Square, Square)> {
        let record = self.history.pop()?.decode();

        self.grid[record.destination.index()] = record.captured;
        self.grid[record.origin.index()] = record.moved;

        if record.moved.kind() == Some(PieceKind::King) {
            self.set_king_square(record.moved, Some(record.origin));
        }

        Some((record.origin, record.destination))
    }

    /// Applies a move that is undone when the returned guard is dropped.
    pub fn scoped_move(&mut self, origin: Square, destination: Square) -> MoveGuard<'_> {
        MoveGuard::new(self, origin, destination)
    }

    pub fn position_key(&self, side_to_move: Color) -> PositionKey {
        let mut key = [0u8; POSITION_KEY_LEN];
        for (slot, piece) in key.iter_mut().zip(self.grid.iter()) {
            *slot = piece.bits();
        }
        key[POSITION_KEY_LEN - 1] = side_to_move.flag();
        key
    }

    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter()
            .map(move |square| (square, self.get(square)))
            .filter(move |(_, piece)| piece.belongs_to(color))
    }

    fn king_square_for(&self, king: Piece) -> Option<Square> {
        king.color().and_then(|color| self.king_square(color))
    }

    fn set_king_square(&mut self, king: Piece, square: Option<Square>) {
        match king.color() {
            Some(Color::White) => self.white_king = square,
            Some(Color::Black) => self.black_king = square,
            None => (),
        }
    }
}
