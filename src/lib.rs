//! Crate root module declarations for the Plum Checkers engine project.
//!
//! Exposes the game model, move generation, search, engines, and utility
//! helpers so binaries, benches, and tests can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_history;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod capture_search;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_diagram;
    pub mod engine_match_harness;
}
