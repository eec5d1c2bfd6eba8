//! Main AI engine: the move-selection policy around the search
//!
//! The engine decides a move in this priority order:
//!
//! 1. **Block**: if the opponent could complete five next move, take that cell
//! 2. **Immediate win**: if the AI can complete five now, do it
//! 3. **Alpha-Beta**: fixed-depth search, depth chosen by [`Difficulty`]
//! 4. **Noise** (easy only): sometimes swap the searched move for a random
//!    pick among the top candidates
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.select_move_with_stats(&mut board, Stone::White, Difficulty::Easy);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::search::{Ruleset, SearchResult, Searcher, StandardRuleset, INF, WIN_SCORE};

/// Playing strength. Each tier searches a fixed number of plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies: easy 2, medium 3, hard 4.
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Map a numeric level (0 easy, 1 medium, 2 hard). Anything else is medium.
    pub fn from_level(level: i64) -> Self {
        match level {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            other => {
                warn!(level = other, "unknown difficulty level, using medium");
                Difficulty::Medium
            }
        }
    }

    /// Map a name, case-insensitively. Unknown names are medium.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => match other.parse::<i64>() {
                Ok(level) => Self::from_level(level),
                Err(_) => {
                    warn!(name = other, "unknown difficulty, using medium");
                    Difficulty::Medium
                }
            },
        }
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// Source of the easy tier's deliberate mistakes.
pub trait Randomness {
    /// `true` with probability `p` (`0.0..=1.0`).
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..n`, `n > 0`.
    fn pick(&mut self, n: usize) -> usize;
}

impl Randomness for StdRng {
    fn chance(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }

    fn pick(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Type of decision that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Took the cell where the opponent would complete five
    Block,
    /// Completed five
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Easy-tier random substitution
    Random,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move; `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Search score of the position (AI's point of view)
    pub score: i32,
    /// Which rule chose the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search nodes visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn block(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Block,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN_SCORE,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: 0,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// Generic over the [`Ruleset`] the search consults and the [`Randomness`]
/// behind the easy tier, so tests can pin both down. The defaults are the
/// crate's own rules and a `StdRng`.
pub struct AIEngine<R: Ruleset = StandardRuleset, N: Randomness = StdRng> {
    searcher: Searcher<R>,
    noise: N,
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with default configuration and an OS-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::build(StandardRuleset, StdRng::from_os_rng(), EngineConfig::default())
    }

    /// Engine from a configuration; `config.seed` fixes the RNG when set.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::build(StandardRuleset, rng, config))
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Ruleset, N: Randomness> AIEngine<R, N> {
    /// Engine from explicit collaborators. The configuration is validated
    /// first: a zero scan width would hide every move, and a noise
    /// probability outside `[0, 1]` is not a probability.
    pub fn with_parts(rules: R, noise: N, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(rules, noise, config))
    }

    fn build(rules: R, noise: N, config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_widths(rules, config.widths()),
            noise,
            config,
        }
    }

    #[inline]
    pub fn searcher(&self) -> &Searcher<R> {
        &self.searcher
    }

    /// Choose a move for `ai` on `board`.
    ///
    /// The board is used as scratch space and is unchanged on return.
    /// Returns `None` only for a full board, which callers should already
    /// have scored as a draw.
    pub fn select_move(&mut self, board: &mut Board, ai: Stone, difficulty: Difficulty) -> Option<Pos> {
        self.select_move_with_stats(board, ai, difficulty).best_move
    }

    /// Choose a move and report how it was found.
    pub fn select_move_with_stats(
        &mut self,
        board: &mut Board,
        ai: Stone,
        difficulty: Difficulty,
    ) -> MoveResult {
        debug_assert!(ai != Stone::Empty, "select_move needs a player color");
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;
        self.searcher.reset_stats();

        let scan = self.searcher.rules().candidates(board, self.config.scan_width);
        if scan.is_empty() {
            debug!("no candidate moves, board is full");
            return MoveResult::no_move(elapsed());
        }

        // 1. Opponent completes five next move: block before anything else
        if let Some(pos) = self.find_completion(board, &scan, ai.opponent()) {
            debug!(%pos, "blocking opponent five");
            return MoveResult::block(pos, elapsed());
        }

        // 2. We complete five now
        if let Some(pos) = self.find_completion(board, &scan, ai) {
            debug!(%pos, "immediate win");
            return MoveResult::immediate_win(pos, elapsed());
        }

        // 3. Fixed-depth search
        let depth = difficulty.depth();
        let result = self.searcher.search(board, depth, -INF, INF, true, ai);
        let nodes = self.searcher.stats().nodes;
        debug!(
            %difficulty,
            depth,
            score = result.score,
            nodes,
            cutoffs = self.searcher.stats().cutoffs,
            "alpha-beta search finished"
        );

        // 4. Easy tier: occasionally play a random top candidate instead
        if difficulty == Difficulty::Easy && self.noise.chance(self.config.noise_probability) {
            let fresh = self.searcher.rules().candidates(board, self.config.scan_width);
            let pool = fresh.len().min(self.config.noise_pool);
            if pool > 0 {
                let pos = fresh[self.noise.pick(pool)];
                debug!(%pos, pool, "easy tier random move");
                return MoveResult {
                    best_move: Some(pos),
                    score: result.score,
                    search_type: SearchType::Random,
                    time_ms: elapsed(),
                    nodes,
                };
            }
        }

        MoveResult::from_alphabeta(result, elapsed(), nodes)
    }

    /// First candidate, in generator order, where `stone` completes five.
    fn find_completion(&self, board: &mut Board, scan: &[Pos], stone: Stone) -> Option<Pos> {
        let rules = self.searcher.rules();
        scan.iter().copied().find(|&pos| {
            board.place_stone(pos, stone);
            let wins = rules.is_win(board, pos, stone);
            board.remove_stone(pos);
            wins
        })
    }
}
