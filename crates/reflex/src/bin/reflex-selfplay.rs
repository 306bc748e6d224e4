//! Reflex self-play - headless matches between two reflex teams.
//!
//! Prints a JSON summary of the series on stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reflex::agents::TeamConfig;
use reflex::arena::Layout;
use reflex::{run_series, MatchConfig};

#[derive(Parser)]
#[command(name = "reflex-selfplay")]
#[command(about = "Play reflex capture teams against each other", version)]
struct Cli {
    /// Layout file (defaults to the built-in capture map)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// YAML team description for red
    #[arg(long)]
    red: Option<PathBuf>,

    /// YAML team description for blue
    #[arg(long)]
    blue: Option<PathBuf>,

    /// Seed of the first game; later games use consecutive seeds
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u64,

    /// Agent moves before a game is called
    #[arg(long)]
    max_moves: Option<u32>,

    /// Move half a cell per turn
    #[arg(long)]
    half_steps: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_team(path: Option<&PathBuf>) -> Result<TeamConfig> {
    match path {
        Some(path) => TeamConfig::load(path)
            .with_context(|| format!("Failed to load team from {}", path.display())),
        None => Ok(TeamConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let layout = match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read layout from {}", path.display()))?;
            Layout::parse(&text)
                .with_context(|| format!("Failed to parse layout from {}", path.display()))?
        }
        None => Layout::default_capture().context("Built-in layout is invalid")?,
    };

    let mut config = MatchConfig {
        seed: cli.seed,
        red: load_team(cli.red.as_ref())?,
        blue: load_team(cli.blue.as_ref())?,
        ..MatchConfig::default()
    };
    if let Some(max_moves) = cli.max_moves {
        config.arena.max_moves = max_moves;
    }
    config.arena.half_steps = cli.half_steps;

    tracing::info!(
        games = cli.games,
        seed = cli.seed,
        red = %format!("{}+{}", config.red.first, config.red.second),
        blue = %format!("{}+{}", config.blue.first, config.blue.second),
        "starting self-play"
    );

    let seeds = cli.seed..cli.seed.saturating_add(cli.games);
    let summary = run_series(&layout, &config, seeds)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
