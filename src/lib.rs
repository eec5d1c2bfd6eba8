//! Gomoku AI decision engine
//!
//! Picks a move for one side of a standard 15x15 Gomoku game:
//! - 5-in-a-row (or longer) wins
//! - Black moves first, no forbidden moves, no captures
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality and win detection
//! - [`eval`]: Static position evaluation
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: Move selection with forced block/win and difficulty tiers
//! - [`game`]: A two-player game session
//! - [`records`]: Persistent player win/loss records
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let config = EngineConfig { seed: Some(42), ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config)?;
//!
//! if let Some(pos) = engine.select_move(&mut board, Stone::White, Difficulty::Easy) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at {pos}");
//! }
//! # Ok::<(), gomoku::ConfigError>(())
//! ```
//!
//! # Move Priority
//!
//! 1. Block a cell where the opponent would complete five
//! 2. Complete five ourselves
//! 3. Fixed-depth alpha-beta search (depth 2/3/4 by difficulty)
//! 4. Easy tier only: sometimes swap in a random top candidate

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod records;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, Difficulty, MoveResult, Randomness, SearchType};
pub use error::{BoardError, ConfigError, GameError, RecordError};
pub use game::{Game, Outcome};
pub use records::{PlayerRecord, RecordBook};
pub use search::{Ruleset, SearchResult, Searcher, StandardRuleset};
