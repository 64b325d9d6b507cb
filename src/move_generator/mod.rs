//! Pseudo-legal and legal move generation over the square grid.
//!
//! `pseudo_legal_targets` obeys piece movement and occupancy only. It never
//! produces an off-board square or a square held by the mover's own color,
//! but it may leave the mover's king attacked. `legal_targets` and
//! `generate_moves` layer the check filter on top by making each candidate,
//! asking the check oracle, and undoing it.

pub mod targets;

use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::check::king_in_check;

pub use targets::SquareList;
use targets::{Direction, BISHOP_DIRS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRS};

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 64]>;

/// Destinations `piece` could reach from `origin`, ignoring whether the move
/// exposes `color`'s king.
pub fn pseudo_legal_targets(
    piece: Piece,
    origin: Square,
    color: Color,
    board: &Board,
) -> SquareList {
    let mut targets = SquareList::new();
    match piece.kind() {
        Some(PieceKind::Knight) => {
            offset_targets(&KNIGHT_TARGETS[origin.index()], color, board, &mut targets)
        }
        Some(PieceKind::King) => {
            offset_targets(&KING_TARGETS[origin.index()], color, board, &mut targets)
        }
        Some(PieceKind::Pawn) => pawn_targets(origin, color, board, &mut targets),
        Some(PieceKind::Bishop) => ray_targets(&BISHOP_DIRS, origin, color, board, &mut targets),
        Some(PieceKind::Rook) => ray_targets(&ROOK_DIRS, origin, color, board, &mut targets),
        Some(PieceKind::Queen) => {
            ray_targets(&BISHOP_DIRS, origin, color, board, &mut targets);
            ray_targets(&ROOK_DIRS, origin, color, board, &mut targets);
        }
        None => (),
    }
    targets
}

fn offset_targets(candidates: &[Square], color: Color, board: &Board, targets: &mut SquareList) {
    targets.extend(
        candidates
            .iter()
            .copied()
            .filter(|&square| !board.get(square).belongs_to(color)),
    );
}

fn pawn_targets(origin: Square, color: Color, board: &Board, targets: &mut SquareList) {
    let direction = color.pawn_direction();

    if let Some(single) = origin.offset(direction, 0) {
        if !board.is_occupied(single) {
            targets.push(single);

            if origin.row() == color.pawn_start_row() {
                if let Some(double) = single.offset(direction, 0) {
                    if !board.is_occupied(double) {
                        targets.push(double);
                    }
                }
            }
        }
    }

    for &col_delta in [-1, 1].iter() {
        if let Some(diagonal) = origin.offset(direction, col_delta) {
            if board.get(diagonal).is_opponent_of(color) {
                targets.push(diagonal);
            }
        }
    }
}

fn ray_targets(
    directions: &[Direction],
    origin: Square,
    color: Color,
    board: &Board,
    targets: &mut SquareList,
) {
    for &(row_delta, col_delta) in directions {
        let mut current = origin.offset(row_delta, col_delta);
        while let Some(square) = current {
            let occupant = board.get(square);
            if occupant.is_empty() {
                targets.push(square);
                current = square.offset(row_delta, col_delta);
                continue;
            }
            if occupant.is_opponent_of(color) {
                targets.push(square);
            }
            break;
        }
    }
}

/// True when moving `origin` to `destination` does not leave `color`'s king attacked.
pub fn leaves_king_safe(
    board: &mut Board,
    origin: Square,
    destination: Square,
    color: Color,
) -> bool {
    let after = board.scoped_move(origin, destination);
    king_in_check(&after, color).is_none()
}

/// Pseudo-legal targets from `origin` filtered to those that keep `color`'s king safe.
pub fn legal_targets(board: &mut Board, origin: Square, color: Color) -> SquareList {
    let piece = board.get(origin);
    pseudo_legal_targets(piece, origin, color, board)
        .into_iter()
        .filter(|&destination| leaves_king_safe(board, origin, destination, color))
        .collect()
}

/// Every legal move for `color`, in square order of the moving piece.
pub fn generate_moves(board: &mut Board, color: Color) -> ChessMoveList {
    let origins: SmallVec<[Square; 16]> = board
        .squares_of(color)
        .map(|(square, _)| square)
        .collect();

    let mut moves = ChessMoveList::new();
    for origin in origins {
        for destination in legal_targets(board, origin, color) {
            moves.push(ChessMove::new(origin, destination));
        }
    }
    moves
}

/// Counts leaf positions reachable in exactly `depth` plies, `color` moving first.
pub fn count_positions(board: &mut Board, color: Color, depth: u8) -> usize {
    let candidates = generate_moves(board, color);
    if depth <= 1 {
        return candidates.len();
    }

    candidates
        .iter()
        .map(|chess_move| {
            let mut child = board.scoped_move(chess_move.from_square(), chess_move.to_square());
            count_positions(&mut child, color.opposite(), depth - 1)
        })
        .sum()
}
