use std::fmt;

use super::color::Color;

pub const KIND_MASK: u8 = 0b0_0111;
pub const COLOR_MASK: u8 = 0b1_1000;
pub const WHITE_FLAG: u8 = 0b0_1000;
pub const BLACK_FLAG: u8 = 0b1_0000;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum PieceKind {
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

impl PieceKind {
    fn from_bits(bits: u8) -> Option<Self> {
        match bits & KIND_MASK {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Queen),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Knight),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    pub fn is_diagonal_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    pub fn is_orthogonal_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        };
        write!(f, "{}", name)
    }
}

/// A packed piece code: the low three bits hold the kind, the next two hold a
/// color flag. The empty square is code 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);

    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self(kind as u8 | color.flag())
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        Self(bits & (KIND_MASK | COLOR_MASK))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 & KIND_MASK == 0
    }

    pub fn kind(self) -> Option<PieceKind> {
        PieceKind::from_bits(self.0)
    }

    pub fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            WHITE_FLAG => Some(Color::White),
            BLACK_FLAG => Some(Color::Black),
            _ => None,
        }
    }

    /// Containment test against the color flag; an empty square belongs to no one.
    pub fn belongs_to(self, color: Color) -> bool {
        self.0 & color.flag() != 0
    }

    pub fn is_opponent_of(self, color: Color) -> bool {
        self.belongs_to(color.opposite())
    }

    pub fn to_fen(self) -> char {
        let c = match self.kind() {
            Some(PieceKind::King) => 'k',
            Some(PieceKind::Queen) => 'q',
            Some(PieceKind::Rook) => 'r',
            Some(PieceKind::Bishop) => 'b',
            Some(PieceKind::Knight) => 'n',
            Some(PieceKind::Pawn) => 'p',
            None => return '.',
        };
        if self.belongs_to(Color::White) {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    pub fn from_fen(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self.to_fen())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color(), self.kind()) {
            (Some(color), Some(kind)) => write!(f, "{} {}", color, kind),
            _ => write!(f, "empty"),
        }
    }
}
