//! Engine configuration
//!
//! All fields have defaults, so a TOML file only needs the values it changes.
//! Invalid values are rejected by [`EngineConfig::validate`], which the
//! engine constructors also run.

use std::path::Path;

use tracing::warn;

use crate::engine::Difficulty;
use crate::error::ConfigError;
use crate::search::SearchWidths;

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Difficulty used when the caller does not name one
    pub difficulty: Difficulty,
    /// Chance that an easy engine discards its searched move
    pub noise_probability: f64,
    /// How many of the top candidates the random move is drawn from
    pub noise_pool: usize,
    /// Candidates scanned for a forced block or win
    pub scan_width: usize,
    /// Candidates per node while more than two plies remain
    pub deep_width: usize,
    /// Candidates per node in the last two plies
    pub shallow_width: usize,
    /// Fixed RNG seed; drawn from the OS when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let widths = SearchWidths::default();
        EngineConfig {
            difficulty: Difficulty::Medium,
            noise_probability: 0.3,
            noise_pool: 5,
            scan_width: 20,
            deep_width: widths.deep,
            shallow_width: widths.shallow,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.noise_probability) {
            return Err(ConfigError::Validation(
                "noise_probability must be in [0, 1]".into(),
            ));
        }
        if self.noise_pool == 0 {
            return Err(ConfigError::Validation("noise_pool must be > 0".into()));
        }
        if self.scan_width == 0 {
            return Err(ConfigError::Validation("scan_width must be > 0".into()));
        }
        if self.deep_width == 0 || self.shallow_width == 0 {
            return Err(ConfigError::Validation(
                "deep_width and shallow_width must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Search widths described by this configuration.
    pub fn widths(&self) -> SearchWidths {
        SearchWidths {
            deep: self.deep_width,
            shallow: self.shallow_width,
        }
    }
}
