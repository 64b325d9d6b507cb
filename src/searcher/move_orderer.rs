//! Move ordering for improved alpha-beta pruning.

use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::{king_in_check, no_legal_moves_fast};

/// Ordering buckets, best first. A check that also captures is ranked by
/// what it captures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveBucket {
    Checkmate,
    CapturesQueen,
    CapturesRook,
    CapturesMinor,
    CapturesPawn,
    Check,
    Quiet,
}

pub fn classify_move(board: &mut Board, chess_move: ChessMove, color: Color) -> MoveBucket {
    let captured = board.get(chess_move.to_square()).kind();
    let mut after = board.scoped_move(chess_move.from_square(), chess_move.to_square());
    let opponent = color.opposite();
    let gives_check = king_in_check(&after, opponent).is_some();

    if gives_check && no_legal_moves_fast(&mut after, opponent) {
        return MoveBucket::Checkmate;
    }

    match captured {
        Some(PieceKind::Queen) => MoveBucket::CapturesQueen,
        Some(PieceKind::Rook) => MoveBucket::CapturesRook,
        Some(PieceKind::Bishop) | Some(PieceKind::Knight) => MoveBucket::CapturesMinor,
        Some(PieceKind::Pawn) => MoveBucket::CapturesPawn,
        _ if gives_check => MoveBucket::Check,
        _ => MoveBucket::Quiet,
    }
}

/// Stable sort by bucket, so moves within a bucket keep generation order.
pub fn order_moves(board: &mut Board, color: Color, moves: &mut [ChessMove]) {
    moves.sort_by_cached_key(|&chess_move| classify_move(board, chess_move, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::{chess_move, chess_position};

    #[test]
    fn test_classify_mate_check_and_quiet() {
        let mut board = chess_position! {
            k.......
            ........
            .K.Q....
            ........
            ........
            ........
            ........
            ........
        };
        let original = board.clone();

        assert_eq!(
            classify_move(&mut board, chess_move!(D6, D8), Color::White),
            MoveBucket::Checkmate
        );
        assert_eq!(
            classify_move(&mut board, chess_move!(D6, D5), Color::White),
            MoveBucket::Check
        );
        // stalemating is not a check
        assert_eq!(
            classify_move(&mut board, chess_move!(D6, C7), Color::White),
            MoveBucket::Quiet
        );
        assert_eq!(board, original);
    }

    #[test]
    fn test_sort_mate_check_and_quiet() {
        let mut board = chess_position! {
            k.......
            ........
            .K.Q....
            ........
            ........
            ........
            ........
            ........
        };
        let mut moves = vec![
            chess_move!(D6, C7),
            chess_move!(D6, H2),
            chess_move!(D6, D5),
            chess_move!(D6, D8),
        ];
        order_moves(&mut board, Color::White, &mut moves);
        assert_eq!(
            moves,
            vec![
                chess_move!(D6, D8),
                chess_move!(D6, D5),
                chess_move!(D6, C7),
                chess_move!(D6, H2),
            ]
        );
    }

    #[test]
    fn test_sort_captures_by_victim() {
        let mut board = chess_position! {
            k.......
            ........
            ..n.....
            ........
            .p.q.r..
            ....P...
            N.......
            ..R....K
        };
        let mut moves = vec![
            chess_move!(H1, G1),
            chess_move!(A2, B4),
            chess_move!(C1, C6),
            chess_move!(E3, F4),
            chess_move!(E3, D4),
        ];
        order_moves(&mut board, Color::White, &mut moves);
        assert_eq!(
            moves,
            vec![
                chess_move!(E3, D4),
                chess_move!(E3, F4),
                chess_move!(C1, C6),
                chess_move!(A2, B4),
                chess_move!(H1, G1),
            ]
        );
    }
}
