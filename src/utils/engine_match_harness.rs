//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from the start
//! position, with an optional seeded random opening prefix so repeated games
//! between deterministic engines still differ.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::FIRST_TO_MOVE;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::{successors, Successor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWin,
    DarkWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub search_params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            search_params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Short human-readable description of a move, e.g. `(5, 2) -> (3, 4) x1`.
pub fn describe_move(successor: &Successor) -> String {
    let mut text = format!("{} -> {}", successor.piece.location(), successor.destination);
    if !successor.captured.is_empty() {
        text.push_str(&format!(" x{}", successor.captured.len()));
    }
    text
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_light` moves first.
pub fn play_engine_match(
    mut engine_light: Box<dyn Engine>,
    mut engine_dark: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_board(
        Board::new(),
        FIRST_TO_MOVE,
        &mut engine_light,
        &mut engine_dark,
        seed,
        config,
    )
}

/// Play a match from a caller-provided position with `to_move` to play.
pub fn play_engine_match_from_board(
    start: Board,
    to_move: Color,
    engine_light: &mut Box<dyn Engine>,
    engine_dark: &mut Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    engine_light.new_game();
    engine_dark.new_game();

    let (mut board, mut mover, opening_moves) = apply_seeded_random_opening(
        start,
        to_move,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut played_moves = Vec::<String>::new();
    let mut light_move_count = 0u32;
    let mut dark_move_count = 0u32;
    let mut light_total_time_ns = 0u128;
    let mut dark_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        if let Some(winner) = board.winner() {
            outcome = match winner {
                Color::Light => MatchOutcome::LightWin,
                Color::Dark => MatchOutcome::DarkWin,
            };
            break;
        }

        let legal = successors(&board, mover).map_err(|e| e.to_string())?;

        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_light.choose_move(&board, mover, &config.search_params),
            Color::Dark => engine_dark.choose_move(&board, mover, &config.search_params),
        }
        .map_err(|e| e.to_string())?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                light_move_count = light_move_count.saturating_add(1);
                light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                dark_move_count = dark_move_count.saturating_add(1);
                dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best
            .ok_or_else(|| format!("{mover} engine returned no move"))?;
        if !legal.contains(&chosen) {
            return Err(format!(
                "{mover} engine returned illegal move {}",
                describe_move(&chosen)
            ));
        }

        played_moves.push(describe_move(&chosen));
        board = chosen.board;
        mover = mover.opposite();
    }

    if outcome == MatchOutcome::DrawMaxPlies {
        // The last ply may have ended the game.
        outcome = match board.winner() {
            Some(Color::Light) => MatchOutcome::LightWin,
            Some(Color::Dark) => MatchOutcome::DarkWin,
            None => MatchOutcome::DrawMaxPlies,
        };
    }

    Ok(MatchResult {
        outcome,
        final_board: board,
        opening_moves,
        played_moves,
        light_move_count,
        dark_move_count,
        light_total_time_ns,
        dark_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Factories receive the per-game seed. Player colors are randomized each
/// game, deterministically from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (light, dark) = if player1_is_light {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} light={} dark={}",
                i + 1,
                config.games,
                seed,
                light,
                dark
            );
        }

        let result = if player1_is_light {
            play_engine_match(
                player1_factory(seed),
                player2_factory(seed),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(seed),
                player1_factory(seed),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_light {
            (
                result.light_move_count,
                result.dark_move_count,
                result.light_total_time_ns,
                result.dark_total_time_ns,
            )
        } else {
            (
                result.dark_move_count,
                result.light_move_count,
                result.dark_total_time_ns,
                result.light_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winning_color = match result.outcome {
            MatchOutcome::LightWin => Some(Color::Light),
            MatchOutcome::DarkWin => Some(Color::Dark),
            MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winning_color {
            Some(color) => {
                let player1_won = (color == Color::Light) == player1_is_light;
                if player1_won {
                    stats.player1_wins += 1;
                    SeriesOutcome::PlayerWin {
                        player: PlayerId::Player1,
                        color,
                    }
                } else {
                    stats.player2_wins += 1;
                    SeriesOutcome::PlayerWin {
                        player: PlayerId::Player2,
                        color,
                    }
                }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    start: Board,
    to_move: Color,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(Board, Color, Vec<String>), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = start;
    let mut mover = to_move;
    let mut opening_moves = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if board.winner().is_some() {
            break;
        }
        let mut legal = successors(&board, mover).map_err(|e| e.to_string())?;
        if legal.is_empty() {
            break;
        }
        let idx = rng.random_range(0..legal.len());
        let chosen = legal.swap_remove(idx);
        opening_moves.push(describe_move(&chosen));
        board = chosen.board;
        mover = mover.opposite();
    }

    Ok((board, mover, opening_moves))
}
