//! Series results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::SeriesResult;
use crate::stats::StatsError;

/// Every series played in one run of the tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Name/description of the run
    pub name: String,
    /// All series results, in the order they were played
    pub series: Vec<SeriesEntry>,
    /// Configuration used
    pub config: SeriesSettings,
}

/// A single series entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: SeriesResult,
}

/// Settings the series were played with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesSettings {
    pub games_per_series: u32,
    pub max_turns_per_game: u32,
    pub seed: Option<u64>,
    pub blocked_side_loses: bool,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            games_per_series: 10,
            max_turns_per_game: 200,
            seed: None,
            blocked_side_loses: false,
        }
    }
}

impl SeriesReport {
    pub fn new(name: &str, config: SeriesSettings) -> Self {
        Self {
            name: name.to_string(),
            series: Vec::new(),
            config,
        }
    }

    /// Add a series result
    pub fn add_series(&mut self, engine1: &str, engine2: &str, result: SeriesResult) {
        self.series.push(SeriesEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} ===\n\n", self.name));
        report.push_str(&format!(
            "Config: {} games/series, {} turns max",
            self.config.games_per_series, self.config.max_turns_per_game
        ));
        if let Some(seed) = self.config.seed {
            report.push_str(&format!(", seed {}", seed));
        }
        if self.config.blocked_side_loses {
            report.push_str(", blocked side loses");
        }
        report.push_str("\n\n");

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>6}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Score"
        ));
        report.push_str(&"-".repeat(67));
        report.push('\n');

        for entry in &self.series {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>5.1}%\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
