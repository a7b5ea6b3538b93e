//! Engine factory: maps difficulty levels and command-line names to engines.

use checkers_core::{Difficulty, Engine, Strategy};
use heuristic_engine::HeuristicEngine;
use random_engine::RandomEngine;

/// The engine behind a difficulty level. `seed` only matters for the random
/// strategy.
pub fn engine_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Engine> {
    engine_for_strategy(difficulty.strategy(), seed)
}

pub fn engine_for_strategy(strategy: Strategy, seed: Option<u64>) -> Box<dyn Engine> {
    match strategy {
        Strategy::Random => Box::new(match seed {
            Some(s) => RandomEngine::with_seed(s),
            None => RandomEngine::new(),
        }),
        Strategy::Heuristic => Box::new(HeuristicEngine::new()),
    }
}

/// Parses an engine name: `random`, `heuristic`, or a difficulty
/// (`easy`, `medium`, `hard`).
pub fn create_engine(name: &str, seed: Option<u64>) -> Option<Box<dyn Engine>> {
    match name.trim().to_lowercase().as_str() {
        "random" | "rand" => Some(engine_for_strategy(Strategy::Random, seed)),
        "heuristic" | "greedy" => Some(engine_for_strategy(Strategy::Heuristic, seed)),
        other => other
            .parse::<Difficulty>()
            .ok()
            .map(|d| engine_for(d, seed)),
    }
}
