//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use plum_checkers::engines::engine_minimax::MinimaxEngine;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    tracing_subscriber::fmt::init();

    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Swap these to try other engines or depths.
    let player1 = |_seed: u64| Box::new(MinimaxEngine::new(4)) as Box<dyn Engine>;
    let player2 = |seed: u64| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 0,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
