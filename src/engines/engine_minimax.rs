//! Depth-limited minimax engine.
//!
//! Wraps [`search`](crate::search::minimax::search) behind the [`Engine`]
//! trait and keeps its own repetition history of the layouts it produced,
//! so it steers away from shuffling back and forth just like the in-game
//! automated opponent.

use std::time::Instant;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::game_state::checkers_rules::{DEFAULT_HISTORY_CAPACITY, DEFAULT_SEARCH_DEPTH};
use crate::game_state::checkers_types::Color;
use crate::search::minimax::search;

pub struct MinimaxEngine {
    depth: u8,
    history_capacity: usize,
    history: Option<BoardHistory>,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_history_capacity(depth, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(depth: u8, history_capacity: usize) -> Self {
        Self {
            depth,
            history_capacity,
            history: None,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// History for `side`, started afresh if the engine switched sides.
    fn history_for(&mut self, side: Color) -> &mut BoardHistory {
        let capacity = self.history_capacity;
        let history = self
            .history
            .get_or_insert_with(|| BoardHistory::new(capacity, side));
        if history.tracked_side() != side {
            *history = BoardHistory::new(capacity, side);
        }
        history
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Minimax"
    }

    fn new_game(&mut self) {
        self.history = None;
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &SearchParams,
    ) -> CheckersResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.depth);
        let started = Instant::now();

        let history = self.history_for(side);
        let outcome = search(board, depth, side == Color::Dark, history)?;
        if let Some(board) = outcome.resulting_board() {
            history.record(board);
        }

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {:.2} nodes {} cutoffs {} time {}",
            depth,
            outcome.score,
            outcome.nodes,
            outcome.cutoffs,
            started.elapsed().as_millis()
        ));
        if let Some(best) = &outcome.best {
            out.info_lines.push(format!(
                "info string minimax_engine move {} -> {} captures {}",
                best.piece.location(),
                best.destination,
                best.captured.len()
            ));
        }
        out.best = outcome.best;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::BoardLocation;
    use crate::move_generation::legal_move_generator::successors;
    use crate::utils::board_diagram::parse_diagram;

    #[test]
    fn plays_legal_moves_for_either_side() {
        let board = Board::new();
        let mut engine = MinimaxEngine::new(2);
        for side in [Color::Light, Color::Dark] {
            let out = engine
                .choose_move(&board, side, &SearchParams::default())
                .unwrap();
            let best = out.best.unwrap();
            assert!(successors(&board, side).unwrap().contains(&best));
            assert!(!out.info_lines.is_empty());
        }
    }

    #[test]
    fn takes_the_free_piece() {
        let board = parse_diagram(
            "
            ........
            ........
            ........
            ........
            ...d....
            ..l.....
            ........
            l.......
            ",
        )
        .unwrap();
        let out = MinimaxEngine::new(3)
            .choose_move(&board, Color::Light, &SearchParams::default())
            .unwrap();
        let best = out.best.unwrap();
        assert_eq!(best.destination, BoardLocation::new(3, 4).unwrap());
        assert_eq!(best.captured.len(), 1);
    }

    #[test]
    fn history_follows_the_side_and_resets() {
        let board = Board::new();
        let mut engine = MinimaxEngine::with_history_capacity(1, 4);
        engine
            .choose_move(&board, Color::Dark, &SearchParams::default())
            .unwrap();
        engine
            .choose_move(&board, Color::Dark, &SearchParams::default())
            .unwrap();
        assert_eq!(engine.history.as_ref().map(BoardHistory::len), Some(2));

        engine
            .choose_move(&board, Color::Light, &SearchParams::default())
            .unwrap();
        let history = engine.history.as_ref().unwrap();
        assert_eq!(history.tracked_side(), Color::Light);
        assert_eq!(history.len(), 1);

        engine.new_game();
        assert!(engine.history.is_none());
    }

    #[test]
    fn depth_override_is_reported() {
        let out = MinimaxEngine::new(4)
            .choose_move(&Board::new(), Color::Dark, &SearchParams { depth: Some(1) })
            .unwrap();
        assert!(out.info_lines[0].starts_with("info depth 1 "));
    }
}
