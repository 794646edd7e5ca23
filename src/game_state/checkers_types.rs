//! Core value types shared by the board, move generation, and search.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{CheckersErrors, CheckersResult};
use crate::game_state::checkers_rules::{COLS, ROWS};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a man's forward step. Light climbs toward row 0, Dark
    /// descends toward the last row.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => ROWS - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// A cell address on the 8x8 grid. Always in range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    pub row: u8,
    pub col: u8,
}

impl BoardLocation {
    pub fn new(row: u8, col: u8) -> CheckersResult<Self> {
        if row >= ROWS || col >= COLS {
            return Err(CheckersErrors::OutOfBounds {
                row: i32::from(row),
                col: i32::from(col),
            });
        }
        Ok(Self { row, col })
    }

    /// Builds a location from caller-side coordinates that may be negative,
    /// e.g. a pointer position translated outside the board.
    pub fn from_signed(row: i32, col: i32) -> CheckersResult<Self> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) if r < ROWS && c < COLS => Ok(Self { row: r, col: c }),
            _ => Err(CheckersErrors::OutOfBounds { row, col }),
        }
    }

    /// Offsets the location by a diagonal delta, returning `None` off-board.
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let row = self.row as i8 + direction.d_row;
        let col = self.col as i8 + direction.d_col;
        if !(0..ROWS as i8).contains(&row) || !(0..COLS as i8).contains(&col) {
            return None;
        }
        Some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Playable cells are the dark squares of the checkerboard.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four diagonal unit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction { d_row: -1, d_col: -1 },
    Direction { d_row: -1, d_col: 1 },
    Direction { d_row: 1, d_col: -1 },
    Direction { d_row: 1, d_col: 1 },
];

/// A single checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub row: u8,
    pub col: u8,
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    pub const fn new(row: u8, col: u8, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            is_king: false,
        }
    }

    #[inline]
    pub const fn location(&self) -> BoardLocation {
        BoardLocation {
            row: self.row,
            col: self.col,
        }
    }

    pub fn move_to(&mut self, row: u8, col: u8) {
        self.row = row;
        self.col = col;
    }

    /// Crowns the piece. Idempotent.
    pub fn promote(&mut self) {
        self.is_king = true;
    }

    /// Directions this piece may open a move in.
    pub fn move_directions(&self) -> Vec<Direction> {
        if self.is_king {
            return ALL_DIRECTIONS.to_vec();
        }
        let forward = self.color.forward_step();
        ALL_DIRECTIONS
            .iter()
            .copied()
            .filter(|d| d.d_row == forward)
            .collect()
    }
}

/// Grid occupancy. An empty cell is its own variant, never a placeholder piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Opponent pieces captured on the way to a destination, in jump order.
pub type CaptureList = Vec<Piece>;

/// Destination cell -> pieces captured to reach it.
pub type MoveMap = BTreeMap<BoardLocation, CaptureList>;
