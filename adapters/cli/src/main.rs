#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots and runs the Tile Quest experience.

mod config;
mod dialogue;
mod input;
mod terminal;

use std::{
    io::{self, Write},
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use tile_quest_core::{Dialogue, FrameResult};
use tile_quest_rendering::draw_game;
use tile_quest_system_bootstrap::Bootstrap;
use tile_quest_system_gameplay::Gameplay;
use tile_quest_world::{query, Player, World};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::GameConfig,
    dialogue::ConsoleDialogue,
    input::{InputSource, LineInput, ScriptedInput},
    terminal::TerminalCanvas,
};

const LOSS_SPEECH: &[&str] = &["Oh no!", "", "You have no more", "health points."];
const WIN_SPEECH: &[&str] = &[
    "Door unlocked!",
    "",
    "The 2nd key",
    "starts the car.",
    "Push action again",
    "to end the game!",
];

/// Command-line arguments accepted by the Tile Quest binary.
#[derive(Debug, Parser)]
#[command(name = "tile-quest", about = "A tile-based adventure in the terminal")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Overrides the frame budget in milliseconds.
    #[arg(long, value_name = "MS")]
    frame_ms: Option<u64>,
    /// Plays a fixed key script instead of reading stdin.
    #[arg(long, value_name = "KEYS")]
    script: Option<String>,
    /// Prints every stock map and exits.
    #[arg(long)]
    dump_maps: bool,
    /// Enables debug logging.
    #[arg(long)]
    verbose: bool,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
    Quit,
}

/// Entry point for the Tile Quest command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    install_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(frame_ms) = args.frame_ms {
        config.frame_budget_ms = frame_ms;
    }
    debug!(?config, "configuration resolved");

    let bootstrap = Bootstrap;
    let player = Player::new(config.start, config.max_health);
    let mut world = bootstrap
        .build(player)
        .context("failed to build the stock world")?;

    let stdout = io::stdout();
    if args.dump_maps {
        let mut out = stdout.lock();
        write!(out, "{}", query::dump(&world))?;
        return Ok(());
    }

    println!("{}", bootstrap.welcome_banner());

    let outcome = match &args.script {
        Some(script) => {
            let mut input = ScriptedInput::parse(script)?;
            let mut dialogue = ConsoleDialogue::new(io::stdout(), None::<io::Stdin>);
            run(&mut world, &config, &mut input, &mut dialogue)?
        }
        None => {
            let mut input = LineInput::new(io::stdin());
            let mut dialogue = ConsoleDialogue::new(io::stdout(), Some(io::stdin()));
            run(&mut world, &config, &mut input, &mut dialogue)?
        }
    };

    let mut out = stdout.lock();
    match outcome {
        Outcome::Won => writeln!(out, "YOU WIN!")?,
        Outcome::Lost => writeln!(out, "YOU LOSE")?,
        Outcome::Quit => writeln!(out, "Goodbye.")?,
    }
    info!(?outcome, "session finished");
    Ok(())
}

fn install_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level, directives.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG` directives win; `level` applies only when none are given.
fn log_filter(level: tracing::Level, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn run(
    world: &mut World,
    config: &GameConfig,
    input: &mut dyn InputSource,
    dialogue: &mut dyn Dialogue,
) -> Result<Outcome> {
    let budget = config.frame_budget();
    let mut gameplay = Gameplay;
    let mut canvas = TerminalCanvas::new(config.color);
    let _ = draw_game(world, &mut canvas, true)?;
    present(&canvas)?;

    while let Some(snapshot) = input.next_frame()? {
        let started = Instant::now();
        let action = snapshot.action();
        let result = gameplay.update(world, dialogue, action);

        if query::player(world).is_defeated() {
            dialogue.speak(LOSS_SPEECH);
            return Ok(Outcome::Lost);
        }
        if result == FrameResult::GameOver {
            dialogue.speak(WIN_SPEECH);
            return Ok(Outcome::Won);
        }

        let stats = draw_game(world, &mut canvas, result == FrameResult::FullDraw)?;
        present(&canvas)?;
        debug!(?action, ?result, tiles = stats.tiles, "frame drawn");
        pace(started, budget);
    }

    Ok(Outcome::Quit)
}

fn present(canvas: &TerminalCanvas) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    canvas.present(&mut out)
}

/// Sleeps off whatever the frame left of its budget.
fn pace(started: Instant, budget: Duration) {
    if let Some(remaining) = budget.checked_sub(started.elapsed()) {
        thread::sleep(remaining);
    }
}
