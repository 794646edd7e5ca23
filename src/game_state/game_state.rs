//! Turn and selection orchestration.
//!
//! `GameState` is what a front end talks to. A cell click goes through
//! [`GameState::select`]: the first click on an own piece selects it and
//! fills the legal-destination map, a second click on one of those
//! destinations plays the move. When the automated opponent is enabled its
//! reply is searched and played before `select` returns.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::errors::{CheckersErrors, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::game_state::checkers_rules::{AUTOMATED_SIDE, FIRST_TO_MOVE};
use crate::game_state::checkers_types::{BoardLocation, Color, MoveMap, Piece};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_generator::capture_available;
use crate::search::minimax::search;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    selected: Option<Piece>,
    legal_destinations: MoveMap,
    history: BoardHistory,
    config: GameConfig,

    // --- Session tallies, kept across resets ---
    light_wins: u32,
    dark_wins: u32,
    games_played: u32,
    result_recorded: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: GameConfig) -> CheckersResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Starts from an arbitrary position with `turn` to move. Handing the
    /// turn to the automated side makes it reply right away.
    pub fn from_board(board: Board, turn: Color, config: GameConfig) -> CheckersResult<Self> {
        let mut state = Self::new(config)?;
        state.board = board;
        state.turn = turn;
        state.run_automated_turn();
        Ok(state)
    }

    fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            turn: FIRST_TO_MOVE,
            selected: None,
            legal_destinations: MoveMap::new(),
            history: BoardHistory::new(config.history_capacity, AUTOMATED_SIDE),
            config,
            light_wins: 0,
            dark_wins: 0,
            games_played: 0,
            result_recorded: false,
        }
    }

    /// New game from the start position. Win tallies are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = FIRST_TO_MOVE;
        self.clear_selection();
        self.history.clear();
        self.result_recorded = false;
    }

    /// Handles a click on `(row, col)`. Returns whether anything changed.
    ///
    /// With a piece selected, a click on one of its destinations plays the
    /// move. Otherwise the click tries to select the piece there. Any failure
    /// clears the pending selection.
    pub fn select(&mut self, row: i32, col: i32) -> bool {
        if self.selected.is_some() {
            match self.try_move(row, col) {
                Ok(()) => return true,
                Err(err) => {
                    debug!(row, col, %err, "not a destination, reselecting");
                    self.clear_selection();
                }
            }
        }

        match self.try_select(row, col) {
            Ok(()) => true,
            Err(err) => {
                debug!(row, col, %err, "selection rejected");
                self.clear_selection();
                false
            }
        }
    }

    /// Selects the piece on `(row, col)` and computes its destinations.
    ///
    /// Fails when the cell is off the board or empty, when the piece belongs
    /// to the other side, or when the piece cannot capture although another
    /// piece of its side can.
    pub fn try_select(&mut self, row: i32, col: i32) -> CheckersResult<()> {
        let location = BoardLocation::from_signed(row, col)?;
        let piece = *self
            .board
            .piece_at(location)
            .ok_or(CheckersErrors::EmptyCell(location))?;

        if piece.color != self.turn {
            return Err(CheckersErrors::NotSideToMove {
                location,
                owner: piece.color,
                to_move: self.turn,
            });
        }

        let moves = self.board.legal_moves(&piece);
        if !moves.has_capture && self.capture_required(self.turn) {
            return Err(CheckersErrors::CaptureRequiredElsewhere(location));
        }

        self.selected = Some(piece);
        self.legal_destinations = moves.destinations;
        Ok(())
    }

    /// Plays the selected piece to `(row, col)`.
    pub fn try_move(&mut self, row: i32, col: i32) -> CheckersResult<()> {
        let piece = self.selected.ok_or(CheckersErrors::NoSelection)?;
        let destination = BoardLocation::from_signed(row, col)?;
        let captured = self
            .legal_destinations
            .get(&destination)
            .cloned()
            .ok_or(CheckersErrors::IllegalDestination {
                from: piece.location(),
                to: destination,
            })?;

        self.apply_and_advance(&piece, destination, &captured)
    }

    fn apply_and_advance(
        &mut self,
        piece: &Piece,
        destination: BoardLocation,
        captured: &[Piece],
    ) -> CheckersResult<()> {
        apply_move_in_place(&mut self.board, piece, destination, captured)?;
        debug!(
            side = %piece.color,
            from = %piece.location(),
            to = %destination,
            captured = captured.len(),
            "move applied"
        );
        self.change_turn();
        Ok(())
    }

    fn change_turn(&mut self) {
        self.clear_selection();
        self.turn = self.turn.opposite();
        self.run_automated_turn();
    }

    /// Plays the automated side's move when it is on turn, then hands the
    /// turn back. A position with nothing to play skips the automated turn.
    fn run_automated_turn(&mut self) {
        if !self.config.automated_opponent || self.turn != AUTOMATED_SIDE {
            return;
        }

        if let Err(err) = self.play_automated_move() {
            match self.board.winner() {
                Some(winner) => info!(%winner, %err, "game over, automated turn skipped"),
                None => warn!(%err, "automated turn skipped"),
            }
        }
        self.turn = self.turn.opposite();
    }

    /// Searches and plays the automated side's move, then records the
    /// resulting layout in the repetition history.
    fn play_automated_move(&mut self) -> CheckersResult<()> {
        let started = Instant::now();
        let maximizing = AUTOMATED_SIDE == Color::Dark;
        let outcome = search(&self.board, self.config.search_depth, maximizing, &self.history)?;

        let Some(best) = outcome.best else {
            return Err(CheckersErrors::NoLegalMoves(AUTOMATED_SIDE));
        };

        info!(
            from = %best.piece.location(),
            to = %best.destination,
            captured = best.captured.len(),
            score = outcome.score,
            nodes = outcome.nodes,
            cutoffs = outcome.cutoffs,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "automated move"
        );

        self.board = best.board;
        self.history.record(&self.board);
        if let Some(winner) = self.board.winner() {
            info!(%winner, "game over");
        }
        Ok(())
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }

    /// True when some piece of `color` can capture.
    pub fn capture_required(&self, color: Color) -> bool {
        capture_available(&self.board, color)
    }

    /// Counts a finished game once. Further calls for the same game only
    /// report the winner.
    pub fn record_result(&mut self) -> Option<Color> {
        let winner = self.winner()?;
        if !self.result_recorded {
            match winner {
                Color::Light => self.light_wins += 1,
                Color::Dark => self.dark_wins += 1,
            }
            self.games_played += 1;
            self.result_recorded = true;
            info!(
                %winner,
                light_wins = self.light_wins,
                dark_wins = self.dark_wins,
                games_played = self.games_played,
                "result recorded"
            );
        }
        Some(winner)
    }

    #[inline]
    pub fn legal_destinations(&self) -> &MoveMap {
        &self.legal_destinations
    }

    #[inline]
    pub fn current_board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.as_ref()
    }

    #[inline]
    pub fn history(&self) -> &BoardHistory {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn light_wins(&self) -> u32 {
        self.light_wins
    }

    #[inline]
    pub fn dark_wins(&self) -> u32 {
        self.dark_wins
    }

    #[inline]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }
}
