//! Lane Dodge entry point
//!
//! Terminal front end: key names typed on stdin (`space`, `up`, `p`, `q`,
//! whitespace separated, one or more per line) drive the game, and the HUD
//! (or, with `--json`, every frame) goes to stdout. Logs go to stderr.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use thiserror::Error;

use lane_dodge::persistence::{FileStore, HighScoreStore, MemoryStore};
use lane_dodge::platform::{FramePacer, GameLoop, RunSummary, forward_keys, input_channel};
use lane_dodge::renderer::{JsonRenderer, Renderer, TextRenderer};
use lane_dodge::sim::GameState;
use lane_dodge::{ConfigError, Settings};

/// A lane-dodging arcade game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// High score file (overrides the settings file)
    #[arg(long)]
    high_score: Option<PathBuf>,

    /// Keep the high score in memory only
    #[arg(long)]
    ephemeral: bool,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Write every frame to stdout as a JSON line instead of the HUD
    #[arg(long)]
    json: bool,

    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("frame loop failed: {0}")]
    Loop(#[from] io::Error),
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    // Only fails if a logger is already installed
    let _ = Builder::from_env(env).try_init();
}

fn fresh_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run(args: Args) -> Result<RunSummary, AppError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(path) = args.high_score {
        settings.high_score_path = path;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.validate()?;

    let config = Arc::new(settings.game_config()?);
    let seed = settings.seed.unwrap_or_else(fresh_seed);
    log::info!("Lane Dodge starting (seed {})", seed);

    let store: Box<dyn HighScoreStore> = if args.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&settings.high_score_path))
    };
    let state = GameState::new(config, seed, store);

    let mut game = GameLoop::new(state, FramePacer::from_hz(settings.tick_hz));
    if let Some(max) = args.max_frames {
        game = game.with_max_frames(max);
    }

    let (tx, mut input) = input_channel();
    // Detached: a blocked stdin read must not hold up shutdown
    thread::spawn(move || {
        forward_keys(io::stdin().lock(), &tx);
    });

    let stdout = BufWriter::new(io::stdout().lock());
    let mut renderer: Box<dyn Renderer> = if args.json {
        Box::new(JsonRenderer::new(stdout))
    } else {
        Box::new(TextRenderer::new(stdout))
    };

    Ok(game.run(&mut input, renderer.as_mut())?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(summary) => {
            log::info!(
                "Bye! Reached level {} (high score {})",
                summary.level,
                summary.high_score
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
