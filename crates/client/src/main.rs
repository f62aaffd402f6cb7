//! Tank game replay binary.
//!
//! Builds a game from a map layout and a rule bundle, replays a recorded
//! action log against it, and prints the final board.
//!
//! # Examples
//!
//! ```bash
//! # Classic rules
//! cargo run -p tank-client -- --map data/maps/season.ron --actions data/actions/season.csv
//!
//! # Rules from a TOML file, JSON snapshot on stdout
//! cargo run -p tank-client -- --map data/maps/season.ron \
//!     --rules data/rules/council_season.toml --actions data/actions/season.csv --json
//! ```

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::{ConfigLoader, MapLoader, Preset};
use runtime::{CsvActionSource, Interactor};

/// Replay a tank game action log
#[derive(Parser)]
#[command(name = "tank-replay")]
#[command(about = "Replays a recorded tank game and prints the final state", long_about = None)]
#[command(version)]
struct Cli {
    /// Map layout (RON)
    #[arg(short, long, value_name = "FILE")]
    map: PathBuf,

    /// Action log (CSV with date,actor,action_type,target,metadata)
    #[arg(short, long, value_name = "FILE")]
    actions: PathBuf,

    /// Rule bundle (TOML); overrides --preset
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    rules: Option<PathBuf>,

    /// Built-in rule bundle
    #[arg(short, long, default_value_t = Preset::Classic)]
    preset: Preset,

    /// Print a JSON snapshot instead of the board
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (RUST_LOG and friends)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rules = match &cli.rules {
        Some(path) => ConfigLoader::load(path)?,
        None => cli.preset.rules(),
    };
    let mut game = MapLoader::load(&cli.map)?.build(rules)?;
    tracing::info!(map = %cli.map.display(), tanks = game.tanks().len(), "game ready");

    let mut source = CsvActionSource::open(&cli.actions)
        .with_context(|| format!("Failed to open action log {}", cli.actions.display()))?;
    let summary = Interactor::new(&mut game)
        .take_actions(&mut source)
        .context("Replay aborted")?;

    if cli.json {
        println!("{}", report::json(&game, summary)?);
    } else {
        print!("{}", report::text(&game, summary));
    }

    Ok(())
}
