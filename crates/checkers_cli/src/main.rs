//! `checkers`: play a match on stdin/stdout.
//!
//! Commands are read one per line; each reply is printed as soon as it is
//! ready, and the board is redrawn after every accepted move.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use checkers_cli::{parse_line, Command, Opponent, Session, TextRenderer};
use checkers_core::{Color, Difficulty};
use clap::Parser;
use tournament::{AppConfig, StatsRecorder};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers", about = "Play checkers against the computer or a friend")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Opponent::Ai)]
    opponent: Opponent,

    /// Your color (overrides the config file)
    #[arg(long)]
    color: Option<Color>,

    /// easy, medium or hard (overrides the config file)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Name under which results are recorded
    #[arg(long)]
    username: Option<String>,

    /// Player statistics file
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Do not record results
    #[arg(long)]
    no_stats: bool,
}

impl Args {
    fn settings(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(color) = self.color {
            config.player_color = color;
        }
        if let Some(level) = self.difficulty {
            config.difficulty = level;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(name) = &self.username {
            config.username = name.clone();
        }
        if let Some(path) = &self.stats {
            config.stats_path = path.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = args.settings()?;

    let mut session = Session::new(settings.clone(), args.opponent)
        .with_renderer(Box::new(TextRenderer::new(io::stdout())));
    if !args.no_stats {
        session = session.with_result_sink(Box::new(StatsRecorder::new(
            &settings.stats_path,
            &settings.username,
        )));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "checkers: type `new` to start, `help` for commands")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                debug!(input = %line, "unparsed input");
                writeln!(stdout, "error: {e}")?;
                stdout.flush()?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        for reply in session.handle(command) {
            writeln!(stdout, "{reply}")?;
        }
        stdout.flush()?;
    }
    Ok(())
}
