//! Tournament CLI
//!
//! Run series between engines and show the player leaderboard.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tournament::{
    create_engine, AppConfig, MatchConfig, MatchRunner, SeriesReport, SeriesSettings, StatsStore,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "Checkers engine series and player leaderboard")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a series between two engines (random, heuristic, easy, medium, hard)
    Series {
        engine1: String,
        engine2: String,
        #[arg(short, long, default_value_t = 10)]
        games: u32,
        #[arg(long, default_value_t = 200)]
        max_turns: u32,
        /// Seed for random engines (engine 2 uses seed + 1)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Write the series report as JSON
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print players ordered by rating
    Leaderboard {
        /// Stats file (defaults to the configured path)
        #[arg(long)]
        stats: Option<PathBuf>,
    },
}

fn run_series(
    config: &AppConfig,
    engine1_name: &str,
    engine2_name: &str,
    games: u32,
    max_turns: u32,
    seed: Option<u64>,
    out: Option<PathBuf>,
) -> Result<()> {
    let seed = seed.or(config.seed);
    let mut engine1 = create_engine(engine1_name, seed)
        .ok_or_else(|| anyhow!("unknown engine: {engine1_name}"))?;
    let mut engine2 = create_engine(engine2_name, seed.map(|s| s.wrapping_add(1)))
        .ok_or_else(|| anyhow!("unknown engine: {engine2_name}"))?;

    println!("=== Series: {} vs {} ===", engine1_name, engine2_name);
    println!("Games: {}, Max turns: {}", games, max_turns);
    println!();

    let runner = MatchRunner::new(MatchConfig {
        num_games: games,
        max_turns,
        rules: config.rules(),
        verbose: true,
        ..Default::default()
    });
    let result = runner.run_series(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_name, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = out {
        let mut report = SeriesReport::new(
            &format!("Series: {} vs {}", engine1_name, engine2_name),
            SeriesSettings {
                games_per_series: games,
                max_turns_per_game: max_turns,
                seed,
                blocked_side_loses: config.blocked_side_loses,
            },
        );
        report.add_series(engine1_name, engine2_name, result);
        report
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn show_leaderboard(config: &AppConfig, stats: Option<PathBuf>) -> Result<()> {
    let path = stats.unwrap_or_else(|| config.stats_path.clone());
    if !path.exists() {
        println!("No player data found. Play some games first!");
        return Ok(());
    }
    let store = StatsStore::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    print!("{}", store.leaderboard_report());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Command::Series {
            engine1,
            engine2,
            games,
            max_turns,
            seed,
            out,
        } => run_series(&config, &engine1, &engine2, games, max_turns, seed, out),
        Command::Leaderboard { stats } => show_leaderboard(&config, stats),
    }
}
