//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation near existing stones
//! - The `Ruleset` seam the search uses for wins, scores and candidates
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;
pub mod ruleset;

pub use alphabeta::{SearchResult, SearchStats, SearchWidths, Searcher, INF, WIN_SCORE};
pub use movegen::candidate_moves;
pub use ruleset::{Ruleset, StandardRuleset};
