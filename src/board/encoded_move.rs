//! Packed move records kept on the board's history stack.
//!
//! Layout of the `u32`, low bits first:
//!
//! | bits  | field                |
//! |-------|----------------------|
//! | 0-4   | moved piece          |
//! | 5-9   | captured piece       |
//! | 10-15 | origin square        |
//! | 16-21 | destination square   |
//! | 22    | queenside castle     |
//! | 23    | kingside castle      |
//! | 24    | pawn promotion       |
//! | 25    | en passant           |
//!
//! Castling and en passant flags are carried for completeness of the format;
//! the move generator never produces those moves.

use std::fmt;

use super::piece::Piece;
use super::square::Square;

const PIECE_BITS: u32 = 0b1_1111;
const SQUARE_BITS: u32 = 0b11_1111;

const MOVED_SHIFT: u32 = 0;
const CAPTURED_SHIFT: u32 = 5;
const ORIGIN_SHIFT: u32 = 10;
const DESTINATION_SHIFT: u32 = 16;
const QUEENSIDE_CASTLE_FLAG: u32 = 1 << 22;
const KINGSIDE_CASTLE_FLAG: u32 = 1 << 23;
const PROMOTION_FLAG: u32 = 1 << 24;
const EN_PASSANT_FLAG: u32 = 1 << 25;

/// The unpacked form of an `EncodedMove`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub moved: Piece,
    pub captured: Piece,
    pub origin: Square,
    pub destination: Square,
    pub queenside_castle: bool,
    pub kingside_castle: bool,
    pub promotion: bool,
    pub en_passant: bool,
}

impl MoveRecord {
    pub fn new(moved: Piece, captured: Piece, origin: Square, destination: Square) -> Self {
        Self {
            moved,
            captured,
            origin,
            destination,
            queenside_castle: false,
            kingside_castle: false,
            promotion: false,
            en_passant: false,
        }
    }

    pub fn with_promotion(mut self, promotion: bool) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn encode(&self) -> EncodedMove {
        EncodedMove::from(*self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedMove(u32);

impl EncodedMove {
    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn moved(self) -> Piece {
        Piece::from_bits(((self.0 >> MOVED_SHIFT) & PIECE_BITS) as u8)
    }

    pub fn captured(self) -> Piece {
        Piece::from_bits(((self.0 >> CAPTURED_SHIFT) & PIECE_BITS) as u8)
    }

    pub fn origin(self) -> Square {
        Square::new(((self.0 >> ORIGIN_SHIFT) & SQUARE_BITS) as u8)
    }

    pub fn destination(self) -> Square {
        Square::new(((self.0 >> DESTINATION_SHIFT) & SQUARE_BITS) as u8)
    }

    pub fn is_queenside_castle(self) -> bool {
        self.0 & QUEENSIDE_CASTLE_FLAG != 0
    }

    pub fn is_kingside_castle(self) -> bool {
        self.0 & KINGSIDE_CASTLE_FLAG != 0
    }

    pub fn is_promotion(self) -> bool {
        self.0 & PROMOTION_FLAG != 0
    }

    pub fn is_en_passant(self) -> bool {
        self.0 & EN_PASSANT_FLAG != 0
    }

    pub fn decode(self) -> MoveRecord {
        MoveRecord {
            moved: self.moved(),
            captured: self.captured(),
            origin: self.origin(),
            destination: self.destination(),
            queenside_castle: self.is_queenside_castle(),
            kingside_castle: self.is_kingside_castle(),
            promotion: self.is_promotion(),
            en_passant: self.is_en_passant(),
        }
    }
}

impl From<MoveRecord> for EncodedMove {
    fn from(record: MoveRecord) -> Self {
        let mut bits = (record.moved.bits() as u32) << MOVED_SHIFT
            | (record.captured.bits() as u32) << CAPTURED_SHIFT
            | (record.origin.index() as u32) << ORIGIN_SHIFT
            | (record.destination.index() as u32) << DESTINATION_SHIFT;
        if record.queenside_castle {
            bits |= QUEENSIDE_CASTLE_FLAG;
        }
        if record.kingside_castle {
            bits |= KINGSIDE_CASTLE_FLAG;
        }
        if record.promotion {
            bits |= PROMOTION_FLAG;
        }
        if record.en_passant {
            bits |= EN_PASSANT_FLAG;
        }
        Self(bits)
    }
}

impl fmt::Debug for EncodedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.decode();
        write!(
            f,
            "{}{}{} {:?}x{:?}",
            record.origin,
            record.destination,
            if record.promotion { "=q" } else { "" },
            record.moved,
            record.captured
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board::piece::PieceKind;
    use crate::board::square::*;

    #[test]
    fn test_promotion_with_capture_decodes_every_field() {
        let record = MoveRecord {
            moved: Piece::new(PieceKind::Pawn, Color::Black),
            captured: Piece::new(PieceKind::Rook, Color::White),
            origin: G2,
            destination: H1,
            queenside_castle: false,
            kingside_castle: false,
            promotion: true,
            en_passant: false,
        };

        let decoded = record.encode().decode();

        assert_eq!(decoded, record);
        assert_eq!(decoded.moved, Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(decoded.captured, Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(decoded.origin, G2);
        assert_eq!(decoded.destination, H1);
        assert!(decoded.promotion);
        assert!(!decoded.queenside_castle);
        assert!(!decoded.kingside_castle);
        assert!(!decoded.en_passant);
    }

    #[test]
    fn test_flags_do_not_bleed_into_squares() {
        let record = MoveRecord {
            moved: Piece::new(PieceKind::King, Color::White),
            captured: Piece::EMPTY,
            origin: H1,
            destination: A8,
            queenside_castle: true,
            kingside_castle: true,
            promotion: true,
            en_passant: true,
        };

        let encoded = record.encode();

        assert_eq!(encoded.origin(), H1);
        assert_eq!(encoded.destination(), A8);
        assert!(encoded.captured().is_empty());
        assert!(encoded.is_queenside_castle());
        assert!(encoded.is_kingside_castle());
        assert!(encoded.is_promotion());
        assert!(encoded.is_en_passant());
    }
}
