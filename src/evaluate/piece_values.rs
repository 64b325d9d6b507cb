use crate::board::piece::{Piece, PieceKind};

/// Material value of each piece kind. The king's value dwarfs everything
/// else so a line that loses it is never preferred over a material loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceValues {
    pub king: i32,
    pub queen: i32,
    pub rook: i32,
    pub bishop: i32,
    pub knight: i32,
    pub pawn: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            king: 99_999,
            queen: 9,
            rook: 5,
            bishop: 3,
            knight: 3,
            pawn: 1,
        }
    }
}

impl PieceValues {
    pub fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn => self.pawn,
        }
    }

    /// Zero for an empty square.
    pub fn piece_value(&self, piece: Piece) -> i32 {
        piece.kind().map_or(0, |kind| self.value(kind))
    }
}
