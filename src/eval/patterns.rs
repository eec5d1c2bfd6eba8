//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for the line shapes the
//! evaluator recognizes. A shape is a contiguous run plus the number of
//! empty cells directly past its ends.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Forced outcome found by search. Static evaluation never reaches it.
    pub const WIN: i32 = 1_000_000;

    /// Five or more in a row
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Score of one run of `count` stones with `open_ends` free ends.
///
/// Fives score regardless of their ends; shorter runs with both ends
/// blocked are dead and score nothing.
#[inline]
pub fn pattern_score(count: u32, open_ends: u32) -> i32 {
    match (count, open_ends) {
        (c, _) if c >= 5 => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}
