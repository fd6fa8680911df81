use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::core::engine::Engine;
use crate::core::layout::ScreenLayout;
use crate::game::{Difficulty, GameController};

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "🎯 Guess the secret number with hot/cold hints")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play the game (default)
    Play(PlayArgs),
    /// List difficulty levels
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Frames per second of the render loop
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for the secret number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the selection screen and start at this level
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Write logs here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            fps: 30,
            seed: None,
            difficulty: None,
            log_file: None,
        }
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { json }) => list_difficulties(json),
        Some(Commands::Play(args)) => play(args),
        None => play(PlayArgs::default()),
    }
}

fn list_difficulties(json: bool) -> Result<()> {
    let profiles: Vec<_> = Difficulty::ALL.iter().map(|d| d.profile()).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    println!("🎮 Difficulty levels:");
    println!();
    for profile in profiles {
        println!("📦 {}", profile.name);
        println!("   {}", profile.details());
        println!();
    }
    Ok(())
}

/// The terminal belongs to the UI, so logs only go to a file when asked.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn play(args: PlayArgs) -> Result<()> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Display size is captured once; layout does not follow later resizes.
    let (width, height) = crossterm::terminal::size().context("reading terminal size")?;
    info!(width, height, fps = args.fps, seed = ?args.seed, "starting numguess");

    let mut controller = GameController::new(ScreenLayout::new(width, height), args.seed);
    if let Some(difficulty) = args.difficulty {
        controller.select_difficulty(difficulty);
    }

    let terminal = ratatui::init();
    let result = crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .context("enabling mouse capture")
        .and_then(|()| Engine::new(controller, args.fps).run(terminal));

    release_mouse(&mut std::io::stdout());
    ratatui::restore();
    result
}

/// Teardown is best-effort: a failure is logged and never replaces the run result.
fn release_mouse<W: Write>(out: &mut W) {
    if let Err(e) = crossterm::execute!(out, DisableMouseCapture) {
        warn!(error = %e, "disabling mouse capture");
    }
}
