//! Per-player win/loss records, stored as a JSON array

use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RecordError;

/// Results of one player against the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub nickname: String,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    /// Day of the last recorded game, `MM/DD`
    #[serde(default)]
    pub time: String,
}

impl PlayerRecord {
    fn new(nickname: &str) -> Self {
        Self {
            nickname: nickname.to_string(),
            wins: 0,
            losses: 0,
            win_rate: 0.0,
            time: String::new(),
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    fn refresh_rate(&mut self) {
        let games = self.games();
        self.win_rate = if games > 0 {
            f64::from(self.wins) / f64::from(games)
        } else {
            0.0
        };
    }
}

/// All known players, in the order they were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordBook {
    players: Vec<PlayerRecord>,
}

impl RecordBook {
    /// Read a record book; a missing or empty file is an empty book.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        if !path.exists() {
            debug!(path = %path.display(), "no record file yet");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the book as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, nickname: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.nickname == nickname)
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Count one finished game for `nickname` played today, creating the
    /// player if needed.
    pub fn record_result(&mut self, nickname: &str, won: bool) -> &PlayerRecord {
        self.record_result_on(nickname, won, Local::now().date_naive())
    }

    /// Count one finished game for `nickname` played on `date`.
    pub fn record_result_on(&mut self, nickname: &str, won: bool, date: NaiveDate) -> &PlayerRecord {
        let idx = match self.players.iter().position(|p| p.nickname == nickname) {
            Some(idx) => idx,
            None => {
                self.players.push(PlayerRecord::new(nickname));
                self.players.len() - 1
            }
        };

        let record = &mut self.players[idx];
        if won {
            record.wins += 1;
        } else {
            record.losses += 1;
        }
        record.refresh_rate();
        record.time = date.format("%m/%d").to_string();
        record
    }
}
