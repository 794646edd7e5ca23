//! Diagonal probing and capture-chain discovery.
//!
//! One recursive routine handles every direction: it looks at the cell next
//! to `from` along `direction` and either records a plain step, records a
//! jump and keeps chaining from the landing cell, or closes the line.
//!
//! Every landing along a chain is recorded with the captures made so far, so
//! a player may stop a multi-jump early. Once a jump has been made the chain
//! may continue in any of the four diagonals, for men and kings alike.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{
    BoardLocation, CaptureList, Cell, Direction, MoveMap, Piece, ALL_DIRECTIONS,
};

/// Probes one diagonal from `from` for the piece `mover`.
///
/// `captured` holds the pieces already jumped on the path that reached
/// `from`; it is empty for the first step of a move. Each recursive call gets
/// its own extended copy, so sibling branches never see each other's jumps.
pub fn search_direction(
    board: &Board,
    mover: &Piece,
    from: BoardLocation,
    direction: Direction,
    captured: &[Piece],
    out: &mut MoveMap,
) {
    let Some(adjacent) = from.offset(direction) else {
        return;
    };

    match board.cell(adjacent) {
        Cell::Empty => {
            // A plain step is only a move on its own, never mid-chain.
            if captured.is_empty() {
                out.entry(adjacent).or_default();
            }
        }
        Cell::Occupied(occupant) => {
            if occupant.color == mover.color {
                return;
            }
            if captured.iter().any(|p| p.location() == adjacent) {
                return;
            }
            let Some(landing) = adjacent.offset(direction) else {
                return;
            };
            if !board.cell(landing).is_empty() {
                return;
            }

            let mut path: CaptureList = captured.to_vec();
            path.push(*occupant);
            record_landing(out, landing, &path);

            for next in ALL_DIRECTIONS {
                search_direction(board, mover, landing, next, &path, out);
            }
        }
    }
}

/// Stores a chain end. Two chains can end on the same cell; the one taking
/// more pieces wins, and on a tie the later one replaces the earlier.
fn record_landing(out: &mut MoveMap, landing: BoardLocation, path: &[Piece]) {
    match out.get(&landing) {
        Some(existing) if existing.len() > path.len() => {}
        _ => {
            out.insert(landing, path.to_vec());
        }
    }
}
