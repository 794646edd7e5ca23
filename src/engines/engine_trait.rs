//! Engine abstraction shared by the match harness and the binaries.
//!
//! An engine is handed a board and the side it plays and answers with one
//! successor, so different move choosers can be swapped behind one trait.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::Successor;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Overrides the engine's own depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when `side` has nothing to play.
    pub best: Option<Successor>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Drops any per-game state such as repetition history.
    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &SearchParams,
    ) -> CheckersResult<EngineOutput>;
}
