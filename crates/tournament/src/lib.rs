//! Tournament Runner and Match Services for checkers
//!
//! This crate provides infrastructure for:
//! - Choosing an engine for a difficulty level
//! - Running series between engines
//! - Recording player statistics when a match ends
//! - Loading the shared TOML configuration
//!
//! # Usage
//!
//! ```bash
//! # Play 20 games between the heuristic and random engines
//! cargo run -p tournament -- series heuristic random --games 20 --seed 7
//!
//! # Show the player leaderboard
//! cargo run -p tournament -- leaderboard --stats checkers_stats.json
//! ```

mod config;
mod engines;
mod match_runner;
mod results;
mod stats;

pub use config::*;
pub use engines::*;
pub use match_runner::*;
pub use results::*;
pub use stats::*;
