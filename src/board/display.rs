use super::square::{Square, BOARD_HEIGHT};
use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_HEIGHT {
            write!(f, "{} ", BOARD_HEIGHT - row)?;
            for col in 0..8 {
                let square = Square::new(row * 8 + col);
                write!(f, " {}", self.get(square).to_fen())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(
            pieces.len(),
            64,
            "Invalid number of squares. Expected 64, got {}",
            pieces.len()
        );
        // The diagram reads top-left to bottom-right, which is exactly the
        // square index order, so no transposition is needed.
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let piece = $crate::board::piece::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                board
                    .put($crate::board::square::Square::new(i as u8), piece)
                    .expect("chess position should have unique squares and one king per side");
            }
        }
        board
    }};
}
