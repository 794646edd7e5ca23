//! Terminal front end: play Light against the automated Dark side.
//!
//! Run with:
//! `cargo run --release -- [--config path/to/checkers.toml]`
//!
//! Enter a cell as `row col` to select a piece, then a highlighted cell to
//! move there. `new` starts another game, `quit` exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use plum_checkers::config::GameConfig;
use plum_checkers::errors::CheckersResult;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::utils::board_diagram::render_board;

fn main() -> CheckersResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config_path() {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };
    let mut state = GameState::new(config)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_state(&state);

        if let Some(winner) = state.record_result() {
            println!(
                "{winner} wins. light_wins={} dark_wins={} games={}",
                state.light_wins(),
                state.dark_wins(),
                state.games_played()
            );
            println!("Type `new` for another game or `quit` to exit.");
        }

        print!("> ");
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "new" => state.reset(),
            input => match parse_cell(input) {
                Some((row, col)) => {
                    if state.winner().is_none() && !state.select(row, col) {
                        println!("Nothing to do at ({row}, {col}).");
                    }
                }
                None => println!("Expected `row col`, `new` or `quit`."),
            },
        }
    }

    Ok(())
}

fn config_path() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

fn parse_cell(input: &str) -> Option<(i32, i32)> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == ',');
    let row = parts.next()?.trim().parse().ok()?;
    let col = parts.find(|p| !p.is_empty())?.trim().parse().ok()?;
    Some((row, col))
}

fn print_state(state: &GameState) {
    println!();
    println!("{}", render_board(state.current_board()));
    println!("{} to move", state.turn());
    if let Some(piece) = state.selected() {
        let targets: Vec<String> = state
            .legal_destinations()
            .iter()
            .map(|(to, captured)| {
                if captured.is_empty() {
                    to.to_string()
                } else {
                    format!("{to} x{}", captured.len())
                }
            })
            .collect();
        println!("selected {} -> {}", piece.location(), targets.join(", "));
    }
}
