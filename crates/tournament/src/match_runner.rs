//! Match runner for playing games between engines

use checkers_core::{play_turn, Color, Engine, GameController, RuleOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a series (multiple games), from engine 1's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SeriesResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    fn add(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Configuration for a series
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum turns per game before declaring a draw
    pub max_turns: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Rule variations applied to every game
    pub rules: RuleOptions,
    /// Print progress during the series
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_turns: 200,
            alternate_colors: true,
            rules: RuleOptions::default(),
            verbose: true,
        }
    }
}

/// Runs series between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a series between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_series(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> SeriesResult {
        let mut result = SeriesResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is black
                self.play_game(engine2, engine1).flipped()
            };
            result.add(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        info!(
            engine1 = engine1.name(),
            engine2 = engine2.name(),
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "series finished"
        );
        result
    }

    /// Play a single game, returns result from white's perspective
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut game = GameController::new().with_rules(self.config.rules);
        white.new_game();
        black.new_game();

        for turn in 0..self.config.max_turns {
            if let Some(outcome) = game.is_over() {
                return from_white(outcome.winner);
            }

            let played = if game.active() == Color::White {
                play_turn(white, &mut game)
            } else {
                play_turn(black, &mut game)
            };

            if played.is_empty() && game.is_over().is_none() {
                // Pieces left but nothing to play, and the rules don't score it
                debug!(turn, side = %game.active(), "side cannot move, calling it a draw");
                return GameResult::Draw;
            }
        }

        match game.is_over() {
            Some(outcome) => from_white(outcome.winner),
            // Max turns reached
            None => GameResult::Draw,
        }
    }
}

fn from_white(winner: Color) -> GameResult {
    match winner {
        Color::White => GameResult::Win,
        Color::Black => GameResult::Loss,
    }
}

/// Quick utility to run a single series
pub fn quick_series(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> SeriesResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_series(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
