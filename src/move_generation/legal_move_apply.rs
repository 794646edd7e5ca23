use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{BoardLocation, Piece};

/// Plays `piece` to `destination` on a fresh clone of `board`, removing
/// `captured` and crowning where due. The input board is left untouched.
pub fn apply_move(
    board: &Board,
    piece: &Piece,
    destination: BoardLocation,
    captured: &[Piece],
) -> CheckersResult<Board> {
    let mut next = board.clone();
    apply_move_in_place(&mut next, piece, destination, captured)?;
    Ok(next)
}

pub fn apply_move_in_place(
    board: &mut Board,
    piece: &Piece,
    destination: BoardLocation,
    captured: &[Piece],
) -> CheckersResult<()> {
    board.apply_move(piece.location(), destination)?;
    if !captured.is_empty() {
        board.remove_pieces(captured);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Color;

    #[test]
    fn applying_to_a_clone_leaves_the_source_alone() {
        let mut board = Board::new();
        board.place_piece(Piece::new(4, 3, Color::Dark)).unwrap();
        let light = *board.get_piece(5, 2).unwrap();
        let dark = *board.get_piece(4, 3).unwrap();
        let landing = BoardLocation::new(3, 4).unwrap();

        let next = apply_move(&board, &light, landing, &[dark]).unwrap();

        assert_eq!(board.pieces_left(Color::Dark), 13);
        assert!(board.get_piece(4, 3).is_some());
        assert_eq!(next.pieces_left(Color::Dark), 12);
        assert!(next.get_piece(4, 3).is_none());
        assert_eq!(next.get_piece(3, 4).map(|p| p.color), Some(Color::Light));
    }
}
