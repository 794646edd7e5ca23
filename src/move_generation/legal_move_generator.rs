//! Legal move generation pipeline.
//!
//! Per-piece move maps come from the capture search and are filtered by the
//! forced-capture rule at two levels: a piece that can capture offers only
//! its captures, and while any piece of a color can capture, the pieces of
//! that color that cannot have no moves at all.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{BoardLocation, CaptureList, Color, MoveMap, Piece};
use crate::move_generation::capture_search::search_direction;
use crate::move_generation::legal_move_apply::apply_move;

/// Destinations for one piece plus whether any of them captures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub destinations: MoveMap,
    pub has_capture: bool,
}

/// A piece together with its legal destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub piece: Piece,
    pub destinations: MoveMap,
}

/// One legal move and the board it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub piece: Piece,
    pub destination: BoardLocation,
    pub captured: CaptureList,
    pub board: Board,
}

/// Legal destinations of `piece` under the forced-capture rule. While any
/// piece of its color can capture, a piece without a capture of its own gets
/// an empty map.
pub fn legal_moves(board: &Board, piece: &Piece) -> LegalMoves {
    let moves = piece_moves(board, piece);
    if !moves.has_capture && capture_available(board, piece.color) {
        return LegalMoves::default();
    }
    moves
}

/// The piece's own map: captures only if it has one, plain steps otherwise.
fn piece_moves(board: &Board, piece: &Piece) -> LegalMoves {
    let mut destinations = MoveMap::new();
    for direction in piece.move_directions() {
        search_direction(board, piece, piece.location(), direction, &[], &mut destinations);
    }

    let has_capture = destinations.values().any(|captures| !captures.is_empty());
    if has_capture {
        destinations.retain(|_, captures| !captures.is_empty());
    }

    LegalMoves {
        destinations,
        has_capture,
    }
}

/// True when some piece of `color` has a capture, making captures mandatory.
pub fn capture_available(board: &Board, color: Color) -> bool {
    board
        .all_pieces(color)
        .iter()
        .any(|piece| piece_moves(board, piece).has_capture)
}

/// Move maps of every piece of `color` that may move this turn, row-major.
/// Pieces with nothing to play are omitted.
pub fn all_moves(board: &Board, color: Color) -> Vec<PieceMoves> {
    let per_piece: Vec<(Piece, LegalMoves)> = board
        .all_pieces(color)
        .into_iter()
        .map(|piece| {
            let moves = piece_moves(board, &piece);
            (piece, moves)
        })
        .collect();

    let must_capture = per_piece.iter().any(|(_, moves)| moves.has_capture);

    per_piece
        .into_iter()
        .filter(|(_, moves)| !must_capture || moves.has_capture)
        .filter(|(_, moves)| !moves.destinations.is_empty())
        .map(|(piece, moves)| PieceMoves {
            piece,
            destinations: moves.destinations,
        })
        .collect()
}

/// Every board reachable by one move of `color`, each an independent clone.
/// Ordered by piece (row-major) then destination.
pub fn successors(board: &Board, color: Color) -> CheckersResult<Vec<Successor>> {
    let mut out = Vec::new();
    for PieceMoves {
        piece,
        destinations,
    } in all_moves(board, color)
    {
        for (destination, captured) in destinations {
            let next = apply_move(board, &piece, destination, &captured)?;
            out.push(Successor {
                piece,
                destination,
                captured,
                board: next,
            });
        }
    }
    Ok(out)
}
