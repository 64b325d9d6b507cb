//! Attack detection and the "does this side have any legal move" question.

use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::board::Board;
use crate::move_generator::targets::{
    Direction, SquareList, BISHOP_DIRS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRS,
};
use crate::move_generator::{leaves_king_safe, pseudo_legal_targets};

type Attackers = SmallVec<[Square; 4]>;

/// Returns the square of a piece attacking whatever stands on `square`, or
/// `None` if nothing attacks it. An empty square is never in danger.
pub fn square_in_danger(board: &Board, square: Square) -> Option<Square> {
    let defender = board.get(square).color()?;
    find_attackers(board, square, defender, true).first().copied()
}

/// Every piece of `defender`'s opponent attacking `square`.
pub fn attackers_of(board: &Board, square: Square, defender: Color) -> Attackers {
    find_attackers(board, square, defender, false)
}

/// The square of a piece giving check to `color`'s king, if any.
pub fn king_in_check(board: &Board, color: Color) -> Option<Square> {
    let king_square = board.king_square(color)?;
    find_attackers(board, king_square, color, true)
        .first()
        .copied()
}

// Pawns and knights are checked first because they are the cheapest lookups;
// the adjacent king is checked last because it is the least likely attacker.
fn find_attackers(board: &Board, square: Square, defender: Color, first_only: bool) -> Attackers {
    let attacker = defender.opposite();
    let mut found = Attackers::new();

    macro_rules! record {
        ($square:expr) => {{
            found.push($square);
            if first_only {
                return found;
            }
        }};
    }

    // a pawn attacks one row ahead of itself, so look one row behind the target
    let pawn = Piece::new(PieceKind::Pawn, attacker);
    for &col_delta in [-1, 1].iter() {
        if let Some(candidate) = square.offset(-attacker.pawn_direction(), col_delta) {
            if board.get(candidate) == pawn {
                record!(candidate);
            }
        }
    }

    let knight = Piece::new(PieceKind::Knight, attacker);
    for &candidate in KNIGHT_TARGETS[square.index()].iter() {
        if board.get(candidate) == knight {
            record!(candidate);
        }
    }

    for &direction in BISHOP_DIRS.iter() {
        if let Some((candidate, piece)) = first_piece_along(board, square, direction) {
            if piece.belongs_to(attacker)
                && piece.kind().map_or(false, PieceKind::is_diagonal_slider)
            {
                record!(candidate);
            }
        }
    }

    for &direction in ROOK_DIRS.iter() {
        if let Some((candidate, piece)) = first_piece_along(board, square, direction) {
            if piece.belongs_to(attacker)
                && piece.kind().map_or(false, PieceKind::is_orthogonal_slider)
            {
                record!(candidate);
            }
        }
    }

    let king = Piece::new(PieceKind::King, attacker);
    for &candidate in KING_TARGETS[square.index()].iter() {
        if board.get(candidate) == king {
            record!(candidate);
        }
    }

    found
}

fn first_piece_along(
    board: &Board,
    from: Square,
    (row_delta, col_delta): Direction,
) -> Option<(Square, Piece)> {
    let mut current = from.offset(row_delta, col_delta);
    while let Some(square) = current {
        let piece = board.get(square);
        if !piece.is_empty() {
            return Some((square, piece));
        }
        current = square.offset(row_delta, col_delta);
    }
    None
}

/// Full scan: tries every pseudo-legal move of every piece of `color` until
/// one leaves the king safe.
pub fn no_legal_moves(board: &mut Board, color: Color) -> bool {
    let pieces: SmallVec<[(Square, Piece); 16]> = board.squares_of(color).collect();

    for (origin, piece) in pieces {
        for destination in pseudo_legal_targets(piece, origin, color, board) {
            if leaves_king_safe(board, origin, destination, color) {
                return false;
            }
        }
    }

    true
}

/// Same answer as `no_legal_moves`, found with less work when `color` is in
/// check: king moves are tried first, a double check can only be answered by
/// the king, and a single check can only be answered by capturing the checker
/// or, for a sliding checker, by landing between it and the king.
pub fn no_legal_moves_fast(board: &mut Board, color: Color) -> bool {
    let king_square = match board.king_square(color) {
        Some(square) => square,
        None => return no_legal_moves(board, color),
    };

    let checkers = attackers_of(board, king_square, color);
    if checkers.is_empty() {
        return no_legal_moves(board, color);
    }

    let king = board.get(king_square);
    for destination in pseudo_legal_targets(king, king_square, color, board) {
        if leaves_king_safe(board, king_square, destination, color) {
            return false;
        }
    }

    if checkers.len() >= 2 {
        return true;
    }

    let resolving = resolving_squares(king_square, checkers[0], board.get(checkers[0]));
    let pieces: SmallVec<[(Square, Piece); 16]> = board
        .squares_of(color)
        .filter(|&(square, _)| square != king_square)
        .collect();

    for (origin, piece) in pieces {
        for destination in pseudo_legal_targets(piece, origin, color, board) {
            if resolving.contains(&destination)
                && leaves_king_safe(board, origin, destination, color)
            {
                return false;
            }
        }
    }

    true
}

/// Squares where a non-king piece could answer a single check: the checker's
/// own square, plus the squares between it and the king for a sliding checker.
fn resolving_squares(king_square: Square, checker_square: Square, checker: Piece) -> SquareList {
    let mut squares = SquareList::new();
    let sliding = checker
        .kind()
        .map_or(false, |kind| kind.is_diagonal_slider() || kind.is_orthogonal_slider());

    if sliding {
        let row_delta = (checker_square.row() as i8 - king_square.row() as i8).signum();
        let col_delta = (checker_square.col() as i8 - king_square.col() as i8).signum();
        let mut current = king_square.offset(row_delta, col_delta);
        while let Some(square) = current {
            if square == checker_square {
                break;
            }
            squares.push(square);
            current = square.offset(row_delta, col_delta);
        }
    }

    squares.push(checker_square);
    squares
}

pub fn is_stalemate(board: &mut Board, color: Color) -> bool {
    king_in_check(board, color).is_none() && no_legal_moves(board, color)
}

pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    king_in_check(board, color).is_some() && no_legal_moves(board, color)
}
