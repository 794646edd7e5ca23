//! Uniform random mover.
//!
//! Picks any legal successor with equal probability. Used as a baseline
//! opponent and for smoke-testing the match harness.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::successors;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for tests and match series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &SearchParams,
    ) -> CheckersResult<EngineOutput> {
        let candidates = successors(board, side)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            candidates.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best = candidates.choose(&mut self.rng).cloned();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_successor() {
        let board = Board::new();
        let legal = successors(&board, Color::Light).unwrap();
        let mut engine = RandomEngine::with_seed(7);
        for _ in 0..20 {
            let out = engine
                .choose_move(&board, Color::Light, &SearchParams::default())
                .unwrap();
            let best = out.best.unwrap();
            assert!(legal.contains(&best));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomEngine::with_seed(42);
        let mut b = RandomEngine::with_seed(42);
        for _ in 0..10 {
            let pa = a.choose_move(&board, Color::Dark, &SearchParams::default()).unwrap();
            let pb = b.choose_move(&board, Color::Dark, &SearchParams::default()).unwrap();
            assert_eq!(pa.best, pb.best);
        }
    }

    #[test]
    fn no_pieces_means_no_move() {
        let out = RandomEngine::with_seed(1)
            .choose_move(&Board::empty(), Color::Light, &SearchParams::default())
            .unwrap();
        assert!(out.best.is_none());
    }
}
