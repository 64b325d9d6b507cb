use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;

pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_HEIGHT: u8 = 8;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

/// A square index in `[0, 64)`, laid out row-major from the top-left of the
/// board as white sees it:
///
/// ```text
///  0  1  2  3  4  5  6  7      a8 b8 c8 d8 e8 f8 g8 h8
///  8  9 10 11 12 ...           a7 b7 c7 d7 e7 ...
/// ...                          ...
/// 56 57 58 59 60 61 62 63      a1 b1 c1 d1 e1 f1 g1 h1
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square(u8);

impl Square {
    /// Panics if `index` is not on the board; use `try_new` for untrusted input.
    pub const fn new(index: u8) -> Self {
        assert!(index < 64, "square index out of range");
        Self(index)
    }

    pub fn try_new(index: u8) -> Result<Self, BoardError> {
        if index < 64 {
            Ok(Self(index))
        } else {
            Err(BoardError::InvalidSquareIndex { index })
        }
    }

    /// Returns `None` for coordinates that fall off the board, which lets callers
    /// apply raw offsets and filter in one step.
    pub fn from_row_col(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 || row >= BOARD_HEIGHT as i8 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some(Self(row as u8 * BOARD_WIDTH + col as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u8 {
        self.0 / BOARD_WIDTH
    }

    pub fn col(self) -> u8 {
        self.0 % BOARD_WIDTH
    }

    pub fn offset(self, row_delta: i8, col_delta: i8) -> Option<Self> {
        Self::from_row_col(self.row() as i8 + row_delta, self.col() as i8 + col_delta)
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, BoardError> {
        let caps = ALGEBRAIC_RE
            .captures(algebraic)
            .ok_or_else(|| BoardError::InvalidAlgebraicSquare {
                input: algebraic.to_string(),
            })?;
        let file = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let rank = caps[2].as_bytes()[0] - b'0';
        let row = BOARD_HEIGHT - rank;
        Ok(Self(row * BOARD_WIDTH + file))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = BOARD_HEIGHT - self.row();
        format!("{}{}", file, rank)
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

pub const A8: Square = Square::new(0);
pub const B8: Square = Square::new(1);
pub const C8: Square = Square::new(2);
pub const D8: Square = Square::new(3);
pub const E8: Square = Square::new(4);
pub const F8: Square = Square::new(5);
pub const G8: Square = Square::new(6);
pub const H8: Square = Square::new(7);
pub const A7: Square = Square::new(8);
pub const B7: Square = Square::new(9);
pub const C7: Square = Square::new(10);
pub const D7: Square = Square::new(11);
pub const E7: Square = Square::new(12);
pub const F7: Square = Square::new(13);
pub const G7: Square = Square::new(14);
pub const H7: Square = Square::new(15);
pub const A6: Square = Square::new(16);
pub const B6: Square = Square::new(17);
pub const C6: Square = Square::new(18);
pub const D6: Square = Square::new(19);
pub const E6: Square = Square::new(20);
pub const F6: Square = Square::new(21);
pub const G6: Square = Square::new(22);
pub const H6: Square = Square::new(23);
pub const A5: Square = Square::new(24);
pub const B5: Square = Square::new(25);
pub const C5: Square = Square::new(26);
pub const D5: Square = Square::new(27);
pub const E5: Square = Square::new(28);
pub const F5: Square = Square::new(29);
pub const G5: Square = Square::new(30);
pub const H5: Square = Square::new(31);
pub const A4: Square = Square::new(32);
pub const B4: Square = Square::new(33);
pub const C4: Square = Square::new(34);
pub const D4: Square = Square::new(35);
pub const E4: Square = Square::new(36);
pub const F4: Square = Square::new(37);
pub const G4: Square = Square::new(38);
pub const H4: Square = Square::new(39);
pub const A3: Square = Square::new(40);
pub const B3: Square = Square::new(41);
pub const C3: Square = Square::new(42);
pub const D3: Square = Square::new(43);
pub const E3: Square = Square::new(44);
pub const F3: Square = Square::new(45);
pub const G3: Square = Square::new(46);
pub const H3: Square = Square::new(47);
pub const A2: Square = Square::new(48);
pub const B2: Square = Square::new(49);
pub const C2: Square = Square::new(50);
pub const D2: Square = Square::new(51);
pub const E2: Square = Square::new(52);
pub const F2: Square = Square::new(53);
pub const G2: Square = Square::new(54);
pub const H2: Square = Square::new(55);
pub const A1: Square = Square::new(56);
pub const B1: Square = Square::new(57);
pub const C1: Square = Square::new(58);
pub const D1: Square = Square::new(59);
pub const E1: Square = Square::new(60);
pub const F1: Square = Square::new(61);
pub const G1: Square = Square::new(62);
pub const H1: Square = Square::new(63);
