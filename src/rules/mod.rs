//! Game rules for free-style Gomoku on a 15x15 board
//!
//! This module implements the rule set the engine plays under:
//! - Placement legality (in bounds and empty)
//! - Win condition (five or more in a row, overlines allowed)

pub mod legality;
pub mod win;

// Re-exports for convenient access
pub use legality::{is_valid_move, validate_move};
pub use win::{check_win, find_winner, line_run, LineRun, DIRECTIONS};
