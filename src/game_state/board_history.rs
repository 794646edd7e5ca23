//! Repetition tracking for the automated side.
//!
//! A snapshot keeps only one side's men and kings; the other side's pieces
//! are blanked. The history is a bounded list with the newest snapshot at
//! index 0 and the oldest evicted once capacity is exceeded.

use std::collections::VecDeque;

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{COLS, ROWS};
use crate::game_state::checkers_types::{BoardLocation, Cell, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnapshotCell {
    #[default]
    Empty,
    Man,
    King,
}

/// Normalized layout of one side's pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    cells: [[SnapshotCell; COLS as usize]; ROWS as usize],
}

impl BoardSnapshot {
    pub fn capture(board: &Board, tracked: Color) -> Self {
        let mut cells = [[SnapshotCell::Empty; COLS as usize]; ROWS as usize];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                let location = BoardLocation {
                    row: row as u8,
                    col: col as u8,
                };
                *slot = match board.cell(location) {
                    Cell::Occupied(piece) if piece.color == tracked && piece.is_king => {
                        SnapshotCell::King
                    }
                    Cell::Occupied(piece) if piece.color == tracked => SnapshotCell::Man,
                    _ => SnapshotCell::Empty,
                };
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[[SnapshotCell; COLS as usize]; ROWS as usize] {
        &self.cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardHistory {
    entries: VecDeque<BoardSnapshot>,
    capacity: usize,
    tracked: Color,
}

impl BoardHistory {
    pub fn new(capacity: usize, tracked: Color) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            tracked,
        }
    }

    #[inline]
    pub fn tracked_side(&self) -> Color {
        self.tracked
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot_of(&self, board: &Board) -> BoardSnapshot {
        BoardSnapshot::capture(board, self.tracked)
    }

    /// Records `board` as the newest entry.
    pub fn record(&mut self, board: &Board) {
        self.push(self.snapshot_of(board));
    }

    pub fn push(&mut self, snapshot: BoardSnapshot) {
        self.entries.push_front(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Index of the newest matching entry, 0 being the most recent.
    pub fn position_of(&self, snapshot: &BoardSnapshot) -> Option<usize> {
        self.entries.iter().position(|entry| entry == snapshot)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoardSnapshot> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Piece;

    #[test]
    fn snapshot_ignores_the_untracked_side() {
        let board = Board::new();
        let mut moved = board.clone();
        moved
            .apply_move(BoardLocation::new(5, 0).unwrap(), BoardLocation::new(4, 1).unwrap())
            .unwrap();

        assert_eq!(
            BoardSnapshot::capture(&board, Color::Dark),
            BoardSnapshot::capture(&moved, Color::Dark)
        );
        assert_ne!(
            BoardSnapshot::capture(&board, Color::Light),
            BoardSnapshot::capture(&moved, Color::Light)
        );
    }

    #[test]
    fn snapshot_tags_kings_apart_from_men() {
        let mut board = Board::empty();
        board.place_piece(Piece::new(3, 2, Color::Dark)).unwrap();
        let man = BoardSnapshot::capture(&board, Color::Dark);
        assert_eq!(man.cells()[3][2], SnapshotCell::Man);

        let mut king = Piece::new(3, 2, Color::Dark);
        king.promote();
        board.place_piece(king).unwrap();
        let crowned = BoardSnapshot::capture(&board, Color::Dark);
        assert_eq!(crowned.cells()[3][2], SnapshotCell::King);
        assert_ne!(man, crowned);
    }

    #[test]
    fn history_is_newest_first_and_bounded() {
        let mut history = BoardHistory::new(2, Color::Dark);
        let mut boards = Vec::new();
        for col in [1u8, 3, 5] {
            let mut board = Board::empty();
            board.place_piece(Piece::new(0, col, Color::Dark)).unwrap();
            boards.push(board);
        }
        for board in &boards {
            history.record(board);
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.position_of(&history.snapshot_of(&boards[2])), Some(0));
        assert_eq!(history.position_of(&history.snapshot_of(&boards[1])), Some(1));
        assert_eq!(history.position_of(&history.snapshot_of(&boards[0])), None);

        history.clear();
        assert!(history.is_empty());
    }
}
