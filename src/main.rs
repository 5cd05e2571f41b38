mod term;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use textmode_snake::input::KeySource;
use textmode_snake::{Config, Game, SystemClock, BOARD_HEIGHT, BOARD_WIDTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::term::{TermKeys, TermSurface};

/// Snake on an 80x25 text screen. WASD or arrows to steer, Space to pause,
/// Ctrl+C to quit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for apple placement and starting directions; taken from the clock when absent.
    #[arg(long)]
    seed: Option<u32>,
    /// Microseconds the host sleeps after each loop iteration.
    #[arg(long, value_name = "MICROSECONDS", default_value_t = 2_000)]
    tick_us: u64,
    /// Loop iterations between two repaints.
    #[arg(long, value_name = "TICKS", default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    redraw_ticks: u32,
    /// Loop iterations between two snake steps.
    #[arg(long, value_name = "TICKS", default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    move_ticks: u32,
    /// Write a trace of the session to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    if let Some((width, height)) = TermSurface::check_size().context("failed to read terminal size")? {
        bail!(
            "terminal is {}x{}, the board needs at least {}x{}",
            width,
            height,
            BOARD_WIDTH,
            BOARD_HEIGHT
        );
    }

    let config = Config { redraw_interval: args.redraw_ticks, move_interval: args.move_ticks };
    let game = match args.seed {
        Some(seed) => Game::seeded(config, seed),
        None => Game::from_clock(config, &SystemClock),
    };
    info!(?config, seed = ?args.seed, "starting");

    let mut surface = TermSurface::new();
    surface.setup().context("failed to set up the terminal")?;

    let result = run(game, &mut surface, Duration::from_micros(args.tick_us));

    // Restore even when the loop failed, but report the loop's error first.
    let restored = surface.restore().context("failed to restore the terminal");
    result.and(restored)
}

fn run(mut game: Game, surface: &mut TermSurface, tick: Duration) -> Result<()> {
    let mut keys = TermKeys::new();

    loop {
        let key = keys.poll_key();
        if let Some(err) = keys.take_error() {
            return Err(err).context("failed to read the keyboard");
        }
        if keys.quit_requested() {
            info!(score = game.snake().score(), "quit");
            return Ok(());
        }

        game.tick(key, surface);
        surface.present().context("failed to draw to the terminal")?;
        sleep(tick);
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
