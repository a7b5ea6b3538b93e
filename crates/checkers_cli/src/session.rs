//! One interactive session: a [`GameController`], the local player's settings
//! and, against the computer, the AI seated on the other color.

use checkers_core::{AiPlayer, Color, GameController, MoveOutcome, Renderer, ResultSink, Square};
use clap::ValueEnum;
use tournament::{engine_for, AppConfig};
use tracing::{debug, info};

use crate::protocol::{Command, HELP};
use crate::render::render_view;

/// Who sits on the other side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    Ai,
    Human,
}

pub struct Session {
    game: GameController,
    settings: AppConfig,
    opponent: Opponent,
    ai: Option<AiPlayer>,
    started: bool,
}

impl Session {
    pub fn new(settings: AppConfig, opponent: Opponent) -> Self {
        let game = GameController::new().with_rules(settings.rules());
        Self {
            game,
            settings,
            opponent,
            ai: None,
            started: false,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.game = std::mem::take(&mut self.game).with_renderer(renderer);
        self
    }

    pub fn with_result_sink(mut self, sink: Box<dyn ResultSink>) -> Self {
        self.game = std::mem::take(&mut self.game).with_result_sink(sink);
        self
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    pub fn settings(&self) -> &AppConfig {
        &self.settings
    }

    /// Executes one command and returns the lines to show the user.
    pub fn handle(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::New(color) => self.new_match(color.unwrap_or(self.settings.player_color)),
            Command::Move { from, to } => self.human_move(from, to),
            Command::Board => vec![render_view(&self.game.view())],
            Command::Difficulty(level) => {
                self.settings.difficulty = level;
                if let Some(ai) = self.ai.as_mut() {
                    *ai = AiPlayer::new(ai.color(), engine_for(level, self.settings.seed));
                }
                vec![format!("difficulty set to {}", level.name())]
            }
            Command::Reset => {
                self.game.reset();
                self.ai = None;
                self.started = false;
                vec!["board reset; start a match with `new`".to_string()]
            }
            Command::Help => vec![HELP.to_string()],
            Command::Quit => Vec::new(),
        }
    }

    fn new_match(&mut self, color: Color) -> Vec<String> {
        self.game.start(color);
        self.started = true;
        let mut lines = vec![format!("new match: you play {color}")];

        self.ai = match self.opponent {
            Opponent::Ai => {
                let mut ai = AiPlayer::new(
                    color.other(),
                    engine_for(self.settings.difficulty, self.settings.seed),
                );
                ai.new_game();
                lines.push(format!(
                    "opponent: {} ({})",
                    ai.engine_name(),
                    self.settings.difficulty.name()
                ));
                Some(ai)
            }
            Opponent::Human => None,
        };
        info!(%color, opponent = ?self.opponent, "session match started");

        lines.extend(self.ai_reply());
        lines
    }

    fn human_move(&mut self, from: Square, to: Square) -> Vec<String> {
        if !self.started {
            return vec!["no match in progress; start one with `new`".to_string()];
        }
        if let Some(ai) = &self.ai {
            if self.game.is_over().is_none() && self.game.active() == ai.color() {
                return vec![format!("{} has no legal move; the match is stuck", ai.color())];
            }
        }

        let mut lines = Vec::new();
        match self.game.submit_move(from, to) {
            MoveOutcome::Accepted { mv, continue_turn } => {
                lines.push(format!("ok {mv}"));
                if continue_turn {
                    lines.push(format!("continue capturing with {}", mv.to));
                    return lines;
                }
            }
            MoveOutcome::Rejected(reason) => {
                debug!(%from, %to, %reason, "move rejected");
                lines.push(format!("rejected: {reason}"));
                return lines;
            }
        }

        lines.extend(self.ai_reply());
        lines
    }

    /// Lets the AI play if it is its turn, then reports a finished match.
    fn ai_reply(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(ai) = self.ai.as_mut() {
            if self.game.is_over().is_none() && self.game.active() == ai.color() {
                let played = ai.play_turn(&mut self.game);
                if played.is_empty() && self.game.is_over().is_none() {
                    lines.push(format!("{} has no legal move", ai.color()));
                }
                for mv in played {
                    lines.push(format!("ai {mv}"));
                }
            }
        }
        if let Some(result) = self.game.is_over() {
            let verdict = match self.game.local_player() {
                Some(c) if self.ai.is_some() && c == result.winner => " (you win)",
                Some(_) if self.ai.is_some() => " (you lose)",
                _ => "",
            };
            lines.push(format!("game over: {} wins{}", result.winner, verdict));
        }
        lines
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
