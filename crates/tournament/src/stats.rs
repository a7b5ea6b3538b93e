//! Player statistics: ratings, win/loss counts and per-color totals.
//!
//! The store is the results sink of a [`GameController`](checkers_core::GameController):
//! it hears about a match once, when it ends, and nothing it does can affect
//! the game.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use checkers_core::{Color, CollaboratorError, GameReport, ResultSink};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Rating given to a new player
pub const DEFAULT_RATING: u32 = 1000;

/// Rating gained for a win
pub const WIN_POINTS: u32 = 25;

/// Rating lost for a loss (never below zero)
pub const LOSS_POINTS: u32 = 15;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stats file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One player's record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub username: String,
    pub rating: u32,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Unix seconds of the last recorded game
    pub last_played: u64,
}

impl PlayerStats {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            rating: DEFAULT_RATING,
            games_played: 0,
            wins: 0,
            losses: 0,
            last_played: unix_now(),
        }
    }

    fn record(&mut self, won: bool) {
        if won {
            self.rating += WIN_POINTS;
            self.wins += 1;
        } else {
            self.rating = self.rating.saturating_sub(LOSS_POINTS);
            self.losses += 1;
        }
        self.games_played += 1;
        self.last_played = unix_now();
    }
}

/// Matches won by each color, across every player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub white: u32,
    pub black: u32,
}

impl ScoreBoard {
    pub fn add_win(&mut self, color: Color) {
        match color {
            Color::White => self.white += 1,
            Color::Black => self.black += 1,
        }
    }
}

/// All recorded players plus the color totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsStore {
    pub players: HashMap<String, PlayerStats>,
    pub score: ScoreBoard,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from a JSON file
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Like [`load`](Self::load), but a missing file is an empty store.
    pub fn load_or_default(path: &Path) -> Result<Self, StatsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Save the store to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get or create a player's record
    pub fn player(&mut self, username: &str) -> &PlayerStats {
        self.players
            .entry(username.to_string())
            .or_insert_with(|| PlayerStats::new(username))
    }

    /// Apply one finished match
    pub fn apply(&mut self, username: &str, report: &GameReport) {
        self.score.add_win(report.winner);
        if let Some(won) = report.local_won() {
            self.players
                .entry(username.to_string())
                .or_insert_with(|| PlayerStats::new(username))
                .record(won);
        }
    }

    /// Players by rating, then wins, best first
    pub fn leaderboard(&self) -> Vec<&PlayerStats> {
        let mut entries: Vec<_> = self.players.values().collect();
        entries.sort_by(|a, b| {
            b.rating
                .cmp(&a.rating)
                .then(b.wins.cmp(&a.wins))
                .then(a.username.cmp(&b.username))
        });
        entries
    }

    /// Generate the leaderboard as text
    pub fn leaderboard_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Leaderboard ===\n");
        report.push_str(&format!(
            "{:<20} {:>7} {:>6} {:>5} {:>6}\n",
            "Player", "Rating", "Games", "Wins", "Losses"
        ));
        report.push_str(&"-".repeat(48));
        report.push('\n');
        for p in self.leaderboard() {
            report.push_str(&format!(
                "{:<20} {:>7} {:>6} {:>5} {:>6}\n",
                p.username, p.rating, p.games_played, p.wins, p.losses
            ));
        }
        report.push_str(&format!(
            "\nWins by color: white {}, black {}\n",
            self.score.white, self.score.black
        ));
        report
    }
}

/// [`ResultSink`] that loads, updates and rewrites the stats file for one
/// local player.
#[derive(Debug, Clone)]
pub struct StatsRecorder {
    path: PathBuf,
    username: String,
}

impl StatsRecorder {
    pub fn new(path: impl Into<PathBuf>, username: &str) -> Self {
        Self {
            path: path.into(),
            username: username.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for StatsRecorder {
    fn record(&mut self, report: &GameReport) -> Result<(), CollaboratorError> {
        let mut store = StatsStore::load_or_default(&self.path)?;
        store.apply(&self.username, report);
        store.save(&self.path)?;
        info!(user = %self.username, winner = %report.winner, "result recorded");
        Ok(())
    }
}

/// Seconds since the Unix epoch
fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
