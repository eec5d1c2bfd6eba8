//! Fixed-depth minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Gomoku AI.
//! Scores are always reported from the AI's point of view: the AI's turns
//! maximize, the opponent's turns minimize.
//!
//! # Features
//!
//! - Alpha-beta window threaded through the recursion
//! - Immediate return when a placement completes five
//! - Candidate width that narrows while many plies remain
//! - In-place make/unmake on the caller's board
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::search::{Searcher, StandardRuleset, INF};
//!
//! let mut searcher = Searcher::new(StandardRuleset);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = searcher.search(&mut board, 2, -INF, INF, true, Stone::White);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use tracing::trace;

use crate::board::{Board, Pos, Stone};
use crate::eval::PatternScore;

use super::ruleset::Ruleset;

/// Infinity score for alpha-beta bounds.
/// `-INF` is representable, unlike `-i32::MIN`.
pub const INF: i32 = i32::MAX;

/// Score of a line completed during search: `+WIN_SCORE` when the AI
/// completes it, `-WIN_SCORE` when the opponent does.
pub const WIN_SCORE: i32 = PatternScore::WIN;

/// Candidate widths per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWidths {
    /// Used while more than `SHALLOW_DEPTH` plies remain
    pub deep: usize,
    /// Used in the last `SHALLOW_DEPTH` plies
    pub shallow: usize,
}

impl SearchWidths {
    /// Remaining depth at or below which the shallow width applies
    pub const SHALLOW_DEPTH: u8 = 2;

    #[inline]
    pub fn for_depth(&self, depth: u8) -> usize {
        if depth > Self::SHALLOW_DEPTH {
            self.deep
        } else {
            self.shallow
        }
    }
}

impl Default for SearchWidths {
    fn default() -> Self {
        Self {
            deep: 10,
            shallow: 15,
        }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Nodes scored by the static evaluator
    pub leaves: u64,
    /// Placements that completed five and ended a node early
    pub wins_found: u64,
    /// Times `beta <= alpha` stopped a candidate loop
    pub cutoffs: u64,
    /// Deepest ply reached below the root
    pub max_ply: u8,
}

/// Search result: the score of a node and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` at leaves or if nothing beat the initial bound
    pub best_move: Option<Pos>,
    /// Score from the AI's point of view
    pub score: i32,
}

impl SearchResult {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            best_move: None,
            score,
        }
    }
}

/// Alpha-beta searcher over a [`Ruleset`].
///
/// Holds no position state between calls, only the ruleset, the widths and
/// running statistics.
#[derive(Debug, Clone)]
pub struct Searcher<R: Ruleset> {
    rules: R,
    widths: SearchWidths,
    stats: SearchStats,
    ply: u8,
}

impl<R: Ruleset> Searcher<R> {
    #[must_use]
    pub fn new(rules: R) -> Self {
        Self::with_widths(rules, SearchWidths::default())
    }

    #[must_use]
    pub fn with_widths(rules: R, widths: SearchWidths) -> Self {
        Self {
            rules,
            widths,
            stats: SearchStats::default(),
            ply: 0,
        }
    }

    #[inline]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[inline]
    pub fn widths(&self) -> SearchWidths {
        self.widths
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Search `depth` plies below `board` with the window `(alpha, beta)`.
    ///
    /// `maximizing` says whose turn it is at this node: `ai` when true,
    /// `ai.opponent()` otherwise. The board is modified during the search and
    /// handed back unchanged.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai: Stone,
    ) -> SearchResult {
        debug_assert!(ai != Stone::Empty, "search needs a player color");
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(self.ply);

        if depth == 0 {
            return self.leaf(board, ai);
        }

        let moves = self.rules.candidates(board, self.widths.for_depth(depth));
        if moves.is_empty() {
            return self.leaf(board, ai);
        }

        let mover = if maximizing { ai } else { ai.opponent() };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            board.place_stone(mov, mover);

            if self.rules.is_win(board, mov, mover) {
                board.remove_stone(mov);
                self.stats.wins_found += 1;
                return SearchResult {
                    best_move: Some(mov),
                    score: if maximizing { WIN_SCORE } else { -WIN_SCORE },
                };
            }

            self.ply += 1;
            let child = self.search(board, depth - 1, alpha, beta, !maximizing, ai);
            self.ply -= 1;

            board.remove_stone(mov);

            if maximizing {
                if child.score > best_score {
                    best_score = child.score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(child.score);
            } else {
                if child.score < best_score {
                    best_score = child.score;
                    best_move = Some(mov);
                }
                beta = beta.min(child.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                trace!(depth, alpha, beta, %mov, "cutoff");
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    }

    #[inline]
    fn leaf(&mut self, board: &Board, ai: Stone) -> SearchResult {
        self.stats.leaves += 1;
        SearchResult::leaf(self.rules.evaluate(board, ai))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;
    use crate::search::StandardRuleset;
    use std::cell::{Cell, RefCell};

    fn place(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    fn midgame() -> Board {
        let mut board = Board::new();
        place(&mut board, &[(7, 7), (8, 8), (6, 8), (9, 6)], Stone::Black);
        place(&mut board, &[(7, 8), (8, 7), (6, 6), (9, 9)], Stone::White);
        board
    }

    /// Standard rules that also record the widths requested and the
    /// deepest position handed to the evaluator.
    #[derive(Default)]
    struct Recording {
        widths: RefCell<Vec<usize>>,
        deepest_leaf: Cell<u32>,
        generator_calls: Cell<u32>,
    }

    impl Ruleset for Recording {
        fn is_win(&self, board: &Board, pos: Pos, stone: Stone) -> bool {
            StandardRuleset.is_win(board, pos, stone)
        }

        fn evaluate(&self, board: &Board, ai: Stone) -> i32 {
            self.deepest_leaf
                .set(self.deepest_leaf.get().max(board.stone_count()));
            StandardRuleset.evaluate(board, ai)
        }

        fn candidates(&self, board: &Board, max_count: usize) -> Vec<Pos> {
            self.generator_calls.set(self.generator_calls.get() + 1);
            self.widths.borrow_mut().push(max_count);
            StandardRuleset.candidates(board, max_count)
        }
    }

    /// Returns no candidates at all.
    struct Exhausted;

    impl Ruleset for Exhausted {
        fn is_win(&self, _: &Board, _: Pos, _: Stone) -> bool {
            false
        }
        fn evaluate(&self, _: &Board, _: Stone) -> i32 {
            42
        }
        fn candidates(&self, _: &Board, _: usize) -> Vec<Pos> {
            Vec::new()
        }
    }

    /// Every leaf scores the same, so only the first candidate can win a tie.
    struct Flat;

    impl Ruleset for Flat {
        fn is_win(&self, _: &Board, _: Pos, _: Stone) -> bool {
            false
        }
        fn evaluate(&self, _: &Board, _: Stone) -> i32 {
            7
        }
        fn candidates(&self, board: &Board, max_count: usize) -> Vec<Pos> {
            StandardRuleset.candidates(board, max_count)
        }
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = midgame();
        let mut searcher = Searcher::new(StandardRuleset);
        let result = searcher.search(&mut board, 0, -INF, INF, true, Stone::Black);
        assert_eq!(
            result,
            SearchResult {
                best_move: None,
                score: evaluate(&board, Stone::Black),
            }
        );
    }

    #[test]
    fn test_no_candidates_is_leaf() {
        let mut board = midgame();
        let mut searcher = Searcher::new(Exhausted);
        let result = searcher.search(&mut board, 4, -INF, INF, false, Stone::White);
        assert_eq!(result, SearchResult::leaf(42));
        assert_eq!(searcher.stats().leaves, 1);
    }

    #[test]
    fn test_ai_immediate_win_scores_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Stone::White);
        place(&mut board, &[(5, 5), (6, 6)], Stone::Black);
        let before = board.clone();

        let mut searcher = Searcher::new(StandardRuleset);
        let result = searcher.search(&mut board, 3, -INF, INF, true, Stone::White);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_opponent_immediate_win_scores_loss() {
        // Minimizing node: the opponent (Black) completes five
        let mut board = Board::new();
        place(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        let before = board.clone();

        let mut searcher = Searcher::new(StandardRuleset);
        let result = searcher.search(&mut board, 1, -INF, INF, false, Stone::White);
        assert_eq!(result.score, -WIN_SCORE);
        assert!(matches!(
            result.best_move,
            Some(p) if p == Pos::new(7, 2) || p == Pos::new(7, 7)
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_loss_propagates_to_root() {
        // Black threatens to fill the gap at (7, 5). Every White reply that
        // does not take the gap lets Black win, so depth 2 must find it.
        let mut board = Board::new();
        place(&mut board, &[(7, 3), (7, 4), (7, 6), (7, 7)], Stone::Black);

        let mut searcher = Searcher::new(StandardRuleset);
        let result = searcher.search(&mut board, 2, -INF, INF, true, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(7, 5)));
        assert!(result.score > -WIN_SCORE);
    }

    #[test]
    fn test_board_restored() {
        let mut board = midgame();
        let before = board.clone();
        let mut searcher = Searcher::new(StandardRuleset);
        for depth in 0..=3 {
            searcher.search(&mut board, depth, -INF, INF, true, Stone::Black);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_width_depends_on_remaining_depth() {
        let mut board = midgame();
        let mut searcher = Searcher::new(Recording::default());
        searcher.search(&mut board, 3, -INF, INF, true, Stone::Black);

        let widths = searcher.rules().widths.borrow();
        assert_eq!(widths[0], 10);
        assert!(widths[1..].iter().all(|&w| w == 15));
    }

    #[test]
    fn test_leaves_sit_at_requested_depth() {
        for depth in 1..=3u8 {
            let mut board = midgame();
            let base = board.stone_count();
            let mut searcher = Searcher::new(Recording::default());
            searcher.search(&mut board, depth, -INF, INF, true, Stone::Black);

            assert_eq!(searcher.rules().deepest_leaf.get(), base + u32::from(depth));
            assert_eq!(searcher.stats().max_ply, depth);
            assert!(searcher.rules().generator_calls.get() >= u32::from(depth));
        }
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let mut board = midgame();
        let first = StandardRuleset.candidates(&board, 15)[0];
        let mut searcher = Searcher::new(Flat);
        let result = searcher.search(&mut board, 2, -INF, INF, true, Stone::Black);
        assert_eq!(result, SearchResult { best_move: Some(first), score: 7 });
    }

    #[test]
    fn test_pruning_happens() {
        let mut board = midgame();
        let mut searcher = Searcher::new(StandardRuleset);
        searcher.search(&mut board, 3, -INF, INF, true, Stone::Black);
        let stats = searcher.stats();
        assert!(stats.cutoffs > 0);
        // Unpruned: 1 + 10 + 10*15 + 10*15*15 nodes
        assert!(stats.nodes < 1 + 10 + 150 + 2250);
    }

    #[test]
    fn test_move_absent_when_nothing_beats_bound() {
        struct Floor;
        impl Ruleset for Floor {
            fn is_win(&self, _: &Board, _: Pos, _: Stone) -> bool {
                false
            }
            fn evaluate(&self, _: &Board, _: Stone) -> i32 {
                -INF
            }
            fn candidates(&self, board: &Board, n: usize) -> Vec<Pos> {
                StandardRuleset.candidates(board, n)
            }
        }

        let mut board = midgame();
        let mut searcher = Searcher::new(Floor);
        let result = searcher.search(&mut board, 1, -INF, INF, true, Stone::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -INF);
    }

    #[test]
    fn test_widths_for_depth() {
        let widths = SearchWidths::default();
        assert_eq!(widths.for_depth(4), 10);
        assert_eq!(widths.for_depth(3), 10);
        assert_eq!(widths.for_depth(2), 15);
        assert_eq!(widths.for_depth(1), 15);
    }
}
