//! The game knowledge the search consumes
//!
//! The search never inspects lines or patterns itself. It asks a [`Ruleset`]
//! whether a placement wins, how a quiet position scores, and which cells are
//! worth trying. [`StandardRuleset`] wires in the crate's own rules, evaluator
//! and candidate generator; tests substitute instrumented ones.

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::check_win;

use super::movegen::candidate_moves;

pub trait Ruleset {
    /// Does the stone just placed at `pos` complete a winning line for `stone`?
    /// Must not modify anything.
    fn is_win(&self, board: &Board, pos: Pos, stone: Stone) -> bool;

    /// Static score of `board` from `ai`'s point of view, higher is better for `ai`.
    fn evaluate(&self, board: &Board, ai: Stone) -> i32;

    /// Up to `max_count` legal empty cells, best first, deterministic per board.
    fn candidates(&self, board: &Board, max_count: usize) -> Vec<Pos>;
}

/// Five-in-a-row rules with the pattern evaluator and proximity generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRuleset;

impl Ruleset for StandardRuleset {
    #[inline]
    fn is_win(&self, board: &Board, pos: Pos, stone: Stone) -> bool {
        check_win(board, pos, stone)
    }

    #[inline]
    fn evaluate(&self, board: &Board, ai: Stone) -> i32 {
        evaluate(board, ai)
    }

    #[inline]
    fn candidates(&self, board: &Board, max_count: usize) -> Vec<Pos> {
        candidate_moves(board, max_count)
    }
}
