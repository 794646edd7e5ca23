//! Minimax search with alpha-beta pruning and a repetition penalty.
//!
//! Dark is the maximizing side. Every node works on its own board clone, so
//! sibling branches never share state. Leaves whose Dark layout already
//! appears in the game history have their score divided by
//! `history.len() - index_of_match`.
//!
//! Ties are broken towards the later-enumerated move (`>=` when maximizing,
//! `<=` when minimizing). Siblings are pruned once `beta <= alpha`.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::{successors, Successor};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub score: f64,
    /// `None` when the root is terminal or has nothing to play.
    pub best: Option<Successor>,
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchOutcome {
    pub fn resulting_board(&self) -> Option<&Board> {
        self.best.as_ref().map(|successor| &successor.board)
    }
}

#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

/// Searches `depth` plies from `board` with the material evaluation.
pub fn search(
    board: &Board,
    depth: u8,
    maximizing: bool,
    history: &BoardHistory,
) -> CheckersResult<SearchOutcome> {
    search_with_scorer(board, depth, maximizing, history, &MaterialScorer)
}

pub fn search_with_scorer(
    board: &Board,
    depth: u8,
    maximizing: bool,
    history: &BoardHistory,
    scorer: &dyn BoardScorer,
) -> CheckersResult<SearchOutcome> {
    let mut stats = SearchStats::default();
    let (score, best) = minimax(
        board,
        depth,
        maximizing,
        history,
        scorer,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &mut stats,
    )?;

    Ok(SearchOutcome {
        score,
        best,
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
    })
}

/// Side that moves on a maximizing or minimizing ply.
#[inline]
pub const fn side_for(maximizing: bool) -> Color {
    if maximizing {
        Color::Dark
    } else {
        Color::Light
    }
}

/// Leaf score with the repetition penalty applied.
pub fn terminal_score(board: &Board, history: &BoardHistory, scorer: &dyn BoardScorer) -> f64 {
    let raw = scorer.score(board);
    match history.position_of(&history.snapshot_of(board)) {
        Some(index) => raw / (history.len() - index) as f64,
        None => raw,
    }
}

#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    history: &BoardHistory,
    scorer: &dyn BoardScorer,
    mut alpha: f64,
    mut beta: f64,
    stats: &mut SearchStats,
) -> CheckersResult<(f64, Option<Successor>)> {
    stats.nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return Ok((terminal_score(board, history, scorer), None));
    }

    let mut best_move: Option<Successor> = None;

    if maximizing {
        let mut best_score = f64::NEG_INFINITY;
        for successor in successors(board, side_for(true))? {
            let (score, _) = minimax(
                &successor.board,
                depth - 1,
                false,
                history,
                scorer,
                alpha,
                beta,
                stats,
            )?;
            if score >= best_score {
                best_score = score;
                best_move = Some(successor);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        Ok((best_score, best_move))
    } else {
        let mut best_score = f64::INFINITY;
        for successor in successors(board, side_for(false))? {
            let (score, _) = minimax(
                &successor.board,
                depth - 1,
                true,
                history,
                scorer,
                alpha,
                beta,
                stats,
            )?;
            if score <= best_score {
                best_score = score;
                best_move = Some(successor);
            }
            beta = beta.min(best_score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        Ok((best_score, best_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{BoardLocation, Piece};
    use crate::utils::board_diagram::parse_diagram;

    fn loc(row: u8, col: u8) -> BoardLocation {
        BoardLocation::new(row, col).unwrap()
    }

    fn empty_history() -> BoardHistory {
        BoardHistory::new(15, Color::Dark)
    }

    fn plain_minimax(board: &Board, depth: u8, maximizing: bool) -> f64 {
        if depth == 0 || board.winner().is_some() {
            return board.evaluate();
        }
        let children = successors(board, side_for(maximizing)).unwrap();
        let scores = children
            .iter()
            .map(|s| plain_minimax(&s.board, depth - 1, !maximizing));
        if maximizing {
            scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            scores.fold(f64::INFINITY, f64::min)
        }
    }

    #[test]
    fn search_is_deterministic() {
        let board = Board::new();
        let history = empty_history();
        let first = search(&board, 3, true, &history).unwrap();
        let second = search(&board, 3, true, &history).unwrap();
        assert_eq!(first.score, second.score);
        assert_eq!(first.resulting_board(), second.resulting_board());
        assert!(first.best.is_some());
    }

    #[test]
    fn pruning_keeps_the_root_value() {
        let positions = [
            Board::new(),
            parse_diagram(
                "
                .d.d....
                ..d.....
                ...d....
                ....l...
                .....l..
                ..l.....
                ........
                l.......
                ",
            )
            .unwrap(),
        ];
        for board in &positions {
            for maximizing in [true, false] {
                let pruned = search(board, 4, maximizing, &empty_history()).unwrap();
                assert_eq!(pruned.score, plain_minimax(board, 4, maximizing));
            }
        }
    }

    #[test]
    fn pruning_cuts_some_branches_from_the_opening() {
        let outcome = search(&Board::new(), 4, true, &empty_history()).unwrap();
        assert!(outcome.cutoffs > 0);
        assert!(outcome.nodes > 1);
    }

    #[test]
    fn ties_go_to_the_later_move() {
        let board = Board::new();

        let dark = search(&board, 1, true, &empty_history()).unwrap();
        let dark_best = dark.best.unwrap();
        assert_eq!(dark.score, 0.0);
        assert_eq!(dark_best.piece.location(), loc(2, 7));
        assert_eq!(dark_best.destination, loc(3, 6));

        let light = search(&board, 1, false, &empty_history()).unwrap();
        let light_best = light.best.unwrap();
        assert_eq!(light_best.piece.location(), loc(5, 6));
        assert_eq!(light_best.destination, loc(4, 7));
    }

    #[test]
    fn terminal_root_has_no_move() {
        let mut board = Board::empty();
        board.place_piece(Piece::new(2, 1, Color::Dark)).unwrap();
        assert_eq!(board.winner(), Some(Color::Dark));

        let outcome = search(&board, 4, true, &empty_history()).unwrap();
        assert!(outcome.best.is_none());
        assert_eq!(outcome.score, 1.0);

        let depth_zero = search(&Board::new(), 0, true, &empty_history()).unwrap();
        assert!(depth_zero.best.is_none());
        assert_eq!(depth_zero.nodes, 1);
    }

    #[test]
    fn repetition_divisor_is_length_minus_index() {
        // Dark is three men up.
        let board = parse_diagram(
            "
            .d.d.d.d
            ........
            ........
            ........
            ........
            ........
            ........
            l.......
            ",
        )
        .unwrap();
        assert_eq!(board.evaluate(), 3.0);

        let mut other_a = Board::empty();
        other_a.place_piece(Piece::new(1, 0, Color::Dark)).unwrap();
        let mut other_b = Board::empty();
        other_b.place_piece(Piece::new(1, 2, Color::Dark)).unwrap();

        // Oldest entry: divisor 3 - 2 = 1, no penalty.
        let mut history = BoardHistory::new(15, Color::Dark);
        history.record(&board);
        history.record(&other_a);
        history.record(&other_b);
        assert_eq!(search(&board, 0, true, &history).unwrap().score, 3.0);

        // Middle entry: divisor 3 - 1 = 2.
        let mut history = BoardHistory::new(15, Color::Dark);
        history.record(&other_a);
        history.record(&board);
        history.record(&other_b);
        assert_eq!(search(&board, 0, true, &history).unwrap().score, 1.5);

        // Newest entry: divisor 3 - 0 = 3, the largest.
        let mut history = BoardHistory::new(15, Color::Dark);
        history.record(&other_a);
        history.record(&other_b);
        history.record(&board);
        assert_eq!(search(&board, 0, true, &history).unwrap().score, 1.0);
    }

    #[test]
    fn repeated_layouts_are_avoided() {
        let board = parse_diagram(
            "
            .d......
            ........
            ........
            ..D.....
            ........
            ........
            ........
            ......l.
            ",
        )
        .unwrap();

        let fresh = search(&board, 1, true, &empty_history()).unwrap();
        let fresh_best = fresh.best.unwrap();
        assert_eq!(fresh_best.piece.location(), loc(3, 2));
        assert_eq!(fresh_best.destination, loc(4, 3));
        assert_eq!(fresh.score, 1.5);

        let mut older = Board::empty();
        older.place_piece(Piece::new(0, 7, Color::Dark)).unwrap();
        let mut history = BoardHistory::new(15, Color::Dark);
        history.record(&older);
        history.record(&fresh_best.board);

        let wary = search(&board, 1, true, &history).unwrap();
        let wary_best = wary.best.unwrap();
        assert_eq!(wary.score, 1.5);
        assert_eq!(wary_best.destination, loc(4, 1));
    }
}
