//! Canonical checkers rule constants.
//!
//! Board geometry, starting layout, and the defaults a game is constructed
//! with when no configuration overrides them.

use crate::game_state::checkers_types::Color;

pub const ROWS: u8 = 8;
pub const COLS: u8 = 8;

/// Men each side starts with.
pub const PIECES_PER_SIDE: i32 = 12;

/// Dark fills the top three rows, Light the bottom three.
pub const DARK_START_ROWS: std::ops::RangeInclusive<u8> = 0..=2;
pub const LIGHT_START_ROWS: std::ops::RangeInclusive<u8> = 5..=7;

/// The human plays Light and moves first; the automated opponent plays Dark
/// and is the maximizing side of the search.
pub const FIRST_TO_MOVE: Color = Color::Light;
pub const AUTOMATED_SIDE: Color = Color::Dark;

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

/// Evaluation weight of a crown on top of the man it sits on.
pub const KING_BONUS: f64 = 0.5;
