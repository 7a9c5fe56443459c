//! # Campus Escape Main Entry Point
//!
//! Parses command line arguments, sets up logging, loads the configuration
//! and runs the scene loop under macroquad.

use campus_escape::{config, CampusResult, GameConfig, SceneManager};
use clap::Parser;
use log::info;
use macroquad::prelude::Conf;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Command line arguments for Campus Escape.
#[derive(Parser, Debug)]
#[command(name = "campus-escape")]
#[command(about = "Top-down campus exploration game with survival encounters")]
#[command(version)]
struct Args {
    /// Seed for pursuer placement inside encounters
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a JSON gameplay configuration overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Campus Escape".to_string(),
        window_width: config::SCREEN_WIDTH,
        window_height: config::SCREEN_HEIGHT,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> CampusResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("starting Campus Escape v{}", campus_escape::VERSION);

    let game_config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut scenes = SceneManager::new(game_config, seed).await?;
    scenes.run().await
}

/// Initializes env_logger at the requested level; `RUST_LOG` still wins.
fn initialize_logging(log_level: &str) {
    let level = log::LevelFilter::from_str(log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
