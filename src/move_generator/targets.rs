//! Board-independent target tables.

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::board::square::Square;

pub type SquareList = SmallVec<[Square; 28]>;

/// (row delta, column delta)
pub type Direction = (i8, i8);

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
];

pub const BISHOP_DIRS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// On-board knight targets from every square.
pub static KNIGHT_TARGETS: Lazy<Vec<SquareList>> =
    Lazy::new(|| generate_offset_table(&KNIGHT_OFFSETS));

/// On-board king targets from every square.
pub static KING_TARGETS: Lazy<Vec<SquareList>> =
    Lazy::new(|| generate_offset_table(&KING_OFFSETS));

fn generate_offset_table(offsets: &[Direction]) -> Vec<SquareList> {
    Square::iter()
        .map(|square| {
            offsets
                .iter()
                .filter_map(|&(row_delta, col_delta)| square.offset(row_delta, col_delta))
                .collect()
        })
        .collect()
}
