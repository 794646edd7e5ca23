//! Plain-text board diagrams.
//!
//! A diagram is eight rows of eight symbols, row 0 first:
//! `.` empty, `l`/`L` Light man/king, `d`/`D` Dark man/king.
//! Whitespace around and inside rows is ignored so diagrams can be written
//! as indented string literals in tests.

use crate::errors::{CheckersErrors, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{COLS, ROWS};
use crate::game_state::checkers_types::{BoardLocation, Cell, Color, Piece};

pub fn parse_diagram(diagram: &str) -> CheckersResult<Board> {
    let rows: Vec<Vec<char>> = diagram
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<char>>())
        .filter(|row| !row.is_empty())
        .collect();

    if rows.len() != ROWS as usize {
        return Err(CheckersErrors::InvalidDiagram(format!(
            "expected {ROWS} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row_idx, symbols) in rows.iter().enumerate() {
        if symbols.len() != COLS as usize {
            return Err(CheckersErrors::InvalidDiagram(format!(
                "row {row_idx} has {} cells, expected {COLS}",
                symbols.len()
            )));
        }

        for (col_idx, &symbol) in symbols.iter().enumerate() {
            let (row, col) = (row_idx as u8, col_idx as u8);
            let (color, is_king) = match symbol {
                '.' => continue,
                'l' => (Color::Light, false),
                'L' => (Color::Light, true),
                'd' => (Color::Dark, false),
                'D' => (Color::Dark, true),
                other => {
                    return Err(CheckersErrors::InvalidDiagram(format!(
                        "unknown symbol '{other}' at ({row}, {col})"
                    )))
                }
            };

            if !(BoardLocation { row, col }).is_playable() {
                return Err(CheckersErrors::InvalidDiagram(format!(
                    "piece on unplayable cell ({row}, {col})"
                )));
            }

            let mut piece = Piece::new(row, col, color);
            if is_king {
                piece.promote();
            }
            board.place_piece(piece)?;
        }
    }

    Ok(board)
}

/// Renders `board` in the same notation `parse_diagram` reads, with row and
/// column indices around the grid.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");
    for row in 0..ROWS {
        out.push(char::from(b'0' + row));
        out.push(' ');
        for col in 0..COLS {
            out.push(cell_symbol(board.cell(BoardLocation { row, col })));
            if col < COLS - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

/// Compact form without indices, one row per line.
pub fn diagram_string(board: &Board) -> String {
    (0..ROWS)
        .map(|row| {
            (0..COLS)
                .map(|col| cell_symbol(board.cell(BoardLocation { row, col })))
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn cell_symbol(cell: &Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Occupied(piece) => match (piece.color, piece.is_king) {
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_round_trips_through_the_compact_form() {
        let board = Board::new();
        let text = diagram_string(&board);
        assert_eq!(
            text,
            ".d.d.d.d\nd.d.d.d.\n.d.d.d.d\n........\n........\nl.l.l.l.\n.l.l.l.l\nl.l.l.l."
        );
        assert_eq!(parse_diagram(&text).unwrap(), board);
    }

    #[test]
    fn kings_are_parsed_with_their_tally() {
        let board = parse_diagram(
            "
            .D......
            ........
            ........
            ........
            ........
            ........
            ........
            L.......
            ",
        )
        .unwrap();
        assert_eq!(board.kings(Color::Dark), 1);
        assert_eq!(board.kings(Color::Light), 1);
        assert_eq!(board.pieces_left(Color::Light), 1);
        assert!(board.get_piece(0, 1).unwrap().is_king);
    }

    #[test]
    fn malformed_diagrams_are_rejected() {
        assert!(matches!(
            parse_diagram("........\n........"),
            Err(CheckersErrors::InvalidDiagram(_))
        ));

        let unplayable = "d.......\n".to_owned() + &"........\n".repeat(7);
        assert!(matches!(
            parse_diagram(&unplayable),
            Err(CheckersErrors::InvalidDiagram(_))
        ));

        let unknown = ".x......\n".to_owned() + &"........\n".repeat(7);
        assert!(matches!(
            parse_diagram(&unknown),
            Err(CheckersErrors::InvalidDiagram(_))
        ));
    }

    #[test]
    fn render_labels_rows_and_columns() {
        let rendered = render_board(&Board::new());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0 . d . d . d . d");
        assert_eq!(lines[8], "7 l . l . l . l .");
    }
}
