use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::successors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Counts the leaves of the move tree `depth` plies deep, with `side` to
/// move at the root. Capture and promotion tallies cover the last ply only.
pub fn perft(board: &Board, side: Color, depth: u8) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for successor in successors(board, side)? {
        if depth == 1 {
            total.nodes += 1;
            if !successor.captured.is_empty() {
                total.captures += 1;
            }
            let crowned = successor
                .board
                .piece_at(successor.destination)
                .is_some_and(|p| p.is_king);
            if crowned && !successor.piece.is_king {
                total.promotions += 1;
            }
            continue;
        }
        total.merge(perft(&successor.board, side.opposite(), depth - 1)?);
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_diagram::parse_diagram;

    #[test]
    fn opening_node_counts() {
        let board = Board::new();
        assert_eq!(perft(&board, Color::Light, 0).unwrap().nodes, 1);
        assert_eq!(perft(&board, Color::Light, 1).unwrap().nodes, 7);
        assert_eq!(perft(&board, Color::Light, 2).unwrap().nodes, 49);
        assert_eq!(perft(&board, Color::Light, 3).unwrap().nodes, 302);
        assert_eq!(perft(&board, Color::Light, 4).unwrap().nodes, 1491);
    }

    #[test]
    fn last_ply_captures_and_promotions_are_counted() {
        let board = parse_diagram(
            "
            ........
            ..d.....
            ...l....
            ........
            ........
            ........
            ........
            ........
            ",
        )
        .unwrap();
        // Light must take (1, 2) and lands on row 0.
        let counts = perft(&board, Color::Light, 1).unwrap();
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.promotions, 1);
    }
}
