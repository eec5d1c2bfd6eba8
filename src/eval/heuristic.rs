//! Heuristic evaluation function for Gomoku board positions
//!
//! Every stone contributes the pattern score of the run it sits in, once per
//! direction. A run of `n` stones is therefore counted `n` times, which
//! rewards longer runs more than linearly.

use crate::board::{Board, Stone};
use crate::rules::{line_run, DIRECTIONS};

use super::patterns::{pattern_score, PatternScore};

/// Largest magnitude a static evaluation may take.
/// Keeps static scores strictly inside the forced win/loss sentinels.
pub const MAX_STATIC_SCORE: i32 = PatternScore::WIN - 1;

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
///
/// The result is clamped to `±MAX_STATIC_SCORE`.
/// `evaluate(board, Black) == -evaluate(board, White)` always holds.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    debug_assert!(color != Stone::Empty, "evaluate needs a player color");
    let opponent = color.opponent();

    let mine = evaluate_stones(board, color);
    let theirs = evaluate_stones(board, opponent);

    (mine - theirs).clamp(-i64::from(MAX_STATIC_SCORE), i64::from(MAX_STATIC_SCORE)) as i32
}

/// Sum of pattern scores over all stones of one color.
fn evaluate_stones(board: &Board, color: Stone) -> i64 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };
    stones
        .iter_ones()
        .flat_map(|pos| DIRECTIONS.iter().map(move |&dir| (pos, dir)))
        .map(|(pos, dir)| {
            let run = line_run(board, pos, dir, color);
            i64::from(pattern_score(run.count, run.open_ends))
        })
        .sum()
}
