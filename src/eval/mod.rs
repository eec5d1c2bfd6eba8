//! Evaluation module for Gomoku positions
//!
//! Static scoring of a board from one color's point of view, built from the
//! line patterns (twos, threes, fours, fives) running through each stone.

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{pattern_score, PatternScore};
