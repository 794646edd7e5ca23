//! The 8x8 checkers board.
//!
//! `Board` owns the grid and the per-color piece and king tallies. It is a
//! plain value: cloning yields a fully independent board, which is what the
//! search relies on when it explores one hypothetical move per clone.

use crate::errors::{CheckersErrors, CheckersResult};
use crate::game_state::checkers_rules::{
    COLS, DARK_START_ROWS, KING_BONUS, LIGHT_START_ROWS, PIECES_PER_SIDE, ROWS,
};
use crate::game_state::checkers_types::{BoardLocation, Cell, Color, Piece};
use crate::move_generation::legal_move_generator::{self, LegalMoves, PieceMoves};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; COLS as usize]; ROWS as usize],
    // Signed so the asymmetric `< 0` winner comparison stays expressible.
    pieces_left: [i32; 2],
    kings: [i32; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position: twelve men per side on the playable cells
    /// of the three rows nearest each player.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..ROWS {
            for col in 0..COLS {
                let location = BoardLocation { row, col };
                if !location.is_playable() {
                    continue;
                }
                let color = if DARK_START_ROWS.contains(&row) {
                    Color::Dark
                } else if LIGHT_START_ROWS.contains(&row) {
                    Color::Light
                } else {
                    continue;
                };
                board.grid[row as usize][col as usize] = Cell::Occupied(Piece::new(row, col, color));
            }
        }
        board.pieces_left = [PIECES_PER_SIDE; 2];
        board
    }

    pub fn empty() -> Self {
        Self {
            grid: [[Cell::Empty; COLS as usize]; ROWS as usize],
            pieces_left: [0; 2],
            kings: [0; 2],
        }
    }

    /// Puts `piece` on its own cell, replacing whatever was there and keeping
    /// the tallies in step. Used to set up positions. Pieces only ever stand
    /// on playable cells, so any other cell is refused.
    pub fn place_piece(&mut self, piece: Piece) -> CheckersResult<()> {
        let location = BoardLocation::new(piece.row, piece.col)?;
        if !location.is_playable() {
            return Err(CheckersErrors::UnplayableCell(location));
        }
        if let Some(previous) = self.piece_at(location).copied() {
            self.forget(&previous);
        }
        self.grid[location.row as usize][location.col as usize] = Cell::Occupied(piece);
        self.pieces_left[piece.color.index()] += 1;
        if piece.is_king {
            self.kings[piece.color.index()] += 1;
        }
        Ok(())
    }

    #[inline]
    pub fn cell(&self, location: BoardLocation) -> &Cell {
        &self.grid[location.row as usize][location.col as usize]
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<&Piece> {
        self.cell(location).piece()
    }

    /// Bounds-checked lookup by raw coordinates.
    pub fn get_piece(&self, row: u8, col: u8) -> Option<&Piece> {
        let location = BoardLocation::new(row, col).ok()?;
        self.piece_at(location)
    }

    #[inline]
    pub fn pieces_left(&self, color: Color) -> i32 {
        self.pieces_left[color.index()]
    }

    #[inline]
    pub fn kings(&self, color: Color) -> i32 {
        self.kings[color.index()]
    }

    /// Every piece of `color`, row-major.
    pub fn all_pieces(&self, color: Color) -> Vec<Piece> {
        self.grid
            .iter()
            .flatten()
            .filter_map(Cell::piece)
            .filter(|piece| piece.color == color)
            .copied()
            .collect()
    }

    /// Legal destinations of one piece. Empty while another piece of its
    /// color has a capture.
    pub fn legal_moves(&self, piece: &Piece) -> LegalMoves {
        legal_move_generator::legal_moves(self, piece)
    }

    /// Move maps of every piece of `color` that may move this turn.
    pub fn all_moves(&self, color: Color) -> Vec<PieceMoves> {
        legal_move_generator::all_moves(self, color)
    }

    /// Relocates the piece standing on `from` to the empty cell `to`, crowning
    /// it when it reaches its promotion row. Captures are removed separately
    /// with [`Board::remove_pieces`].
    pub fn apply_move(&mut self, from: BoardLocation, to: BoardLocation) -> CheckersResult<()> {
        let mut piece = *self.piece_at(from).ok_or(CheckersErrors::EmptyCell(from))?;
        if !self.cell(to).is_empty() {
            return Err(CheckersErrors::IllegalDestination { from, to });
        }

        piece.move_to(to.row, to.col);
        if to.row == piece.color.promotion_row() && !piece.is_king {
            piece.promote();
            self.kings[piece.color.index()] += 1;
        }

        self.grid[from.row as usize][from.col as usize] = Cell::Empty;
        self.grid[to.row as usize][to.col as usize] = Cell::Occupied(piece);
        Ok(())
    }

    /// Clears the cells of captured pieces. Entries whose cell no longer
    /// holds a piece of that color are ignored.
    pub fn remove_pieces(&mut self, pieces: &[Piece]) {
        for captured in pieces {
            let location = captured.location();
            let Some(occupant) = self.piece_at(location).copied() else {
                continue;
            };
            if occupant.color != captured.color {
                continue;
            }
            self.grid[location.row as usize][location.col as usize] = Cell::Empty;
            self.forget(&occupant);
        }
    }

    fn forget(&mut self, piece: &Piece) {
        self.pieces_left[piece.color.index()] -= 1;
        if piece.is_king {
            self.kings[piece.color.index()] -= 1;
        }
    }

    /// Material balance, positive when Dark is ahead. A king counts one and
    /// a half men.
    pub fn evaluate(&self) -> f64 {
        let side = |color: Color| {
            f64::from(self.pieces_left(color)) + KING_BONUS * f64::from(self.kings(color))
        };
        side(Color::Dark) - side(Color::Light)
    }

    /// Decides the game from this position.
    ///
    /// Light running out of pieces is tested with `<= 0` but Dark only with
    /// `< 0`, so a Dark wipe-out is only reported through the no-moves rule.
    /// This asymmetry is long-standing observable behavior and is kept as is.
    pub fn winner(&self) -> Option<Color> {
        if self.pieces_left(Color::Light) <= 0 {
            return Some(Color::Dark);
        }
        if self.pieces_left(Color::Dark) < 0 {
            return Some(Color::Light);
        }
        if self.all_moves(Color::Light).is_empty() {
            return Some(Color::Dark);
        }
        if self.all_moves(Color::Dark).is_empty() {
            return Some(Color::Light);
        }
        None
    }
}
