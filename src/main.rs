//! Terminal raycaster runner (default binary).
//!
//! Walks the compiled-in arena in first person. Input comes from crossterm
//! and frames are drawn with half-block cells into the alternate screen.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_raycast::core::{GridMap, Player, Settings};
use tui_raycast::engine::{FramePacer, GameLoop};
use tui_raycast::term::TerminalPlatform;
use tui_raycast::types::{SPAWN_ANGLE, SPAWN_X, SPAWN_Y};

#[derive(Parser, Debug)]
#[command(name = "tui-raycast", version, about = "First-person grid raycaster in the terminal")]
struct Cli {
    /// Horizontal field of view in degrees
    #[arg(long)]
    fov_degrees: Option<f64>,

    /// Rays cast per frame
    #[arg(long)]
    rays: Option<u32>,

    /// Maximum ray sensing range in world units
    #[arg(long)]
    max_distance: Option<f64>,

    /// Write logs to this file (the terminal is owned by the renderer)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Hide the key hint line
    #[arg(long)]
    no_hint: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(deg) = self.fov_degrees {
            settings.fov = deg.to_radians();
        }
        if let Some(rays) = self.rays {
            settings.ray_count = rays;
        }
        if let Some(max) = self.max_distance {
            settings.max_distance = max;
        }
        settings
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let default = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("RAYCAST_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let settings = cli.settings();
    let player = Player::new(SPAWN_X, SPAWN_Y, SPAWN_ANGLE);
    let mut game =
        GameLoop::new(GridMap::default(), player, settings).context("invalid configuration")?;

    let mut platform = TerminalPlatform::new(&settings).with_hint(!cli.no_hint);
    platform.enter()?;

    let mut pacer = FramePacer::new(settings.frame_interval());
    let result = game.run(&mut platform, &mut pacer);

    // Always try to restore terminal state.
    let _ = platform.exit();

    let frames = result?;
    info!(frames, "exited cleanly");
    Ok(())
}
