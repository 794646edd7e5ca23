//! Static evaluation seam for the search.
//!
//! Scores are always from Dark's point of view: positive favors Dark, the
//! maximizing side.

use crate::game_state::board::Board;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> f64;
}

/// Men count one, kings one and a half.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    #[inline]
    fn score(&self, board: &Board) -> f64 {
        board.evaluate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{Color, Piece};

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&Board::new()), 0.0);
    }

    #[test]
    fn kings_are_worth_a_half_extra() {
        let mut board = Board::empty();
        let mut king = Piece::new(3, 2, Color::Dark);
        king.promote();
        board.place_piece(king).unwrap();
        board.place_piece(Piece::new(6, 1, Color::Light)).unwrap();
        assert_eq!(MaterialScorer.score(&board), 0.5);
    }
}
