//! Gyre CLI
//!
//! Run the rotating-gradient animation in a desktop window, or headless
//! with an optional PNG snapshot of the last frame.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gyre_app::{AnimationShell, ExitStatus, HeadlessConfig, HeadlessPlatform, ShellConfig};
use gyre_platform::headless::Frame;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::{GyreConfig, CONFIG_FILE};

/// Frames rendered by a headless run without `--frames`
const DEFAULT_HEADLESS_FRAMES: u64 = 100;

/// Silence after which a headless run gives up waiting for ticks
const HEADLESS_IDLE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "gyre")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rotating gradient animation", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./gyre.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Overrides for values from the config file
#[derive(clap::Args, Default)]
struct RunArgs {
    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Delay between frames in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Rotation per frame in radians
    #[arg(long, allow_negative_numbers = true)]
    step: Option<f64>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Render off-screen instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Write the last headless frame to this PNG file
    #[arg(long, value_name = "PNG", requires = "headless")]
    snapshot: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a gyre.toml with the default settings
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Some(Commands::Init { path, force }) => {
            cmd_init(&path, force)?;
            Ok(ExitCode::SUCCESS)
        }
        None => cmd_run(cli.config.as_deref(), &cli.run).map(ExitCode::from),
    }
}

fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, GyreConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(())
}

fn cmd_run(config_path: Option<&Path>, args: &RunArgs) -> Result<ExitStatus> {
    let mut file = GyreConfig::discover(config_path, Path::new("."))?;
    apply_overrides(&mut file, args);
    let mut config = file.shell_config()?;

    if args.headless {
        if config.max_frames.is_none() {
            config.max_frames = Some(DEFAULT_HEADLESS_FRAMES);
        }
        return run_headless(config, args.snapshot.as_deref());
    }

    info!(
        "Opening {}x{} window \"{}\"",
        config.window.width, config.window.height, config.window.title
    );
    Ok(gyre_app::windowed::run(config))
}

fn apply_overrides(file: &mut GyreConfig, args: &RunArgs) {
    if let Some(width) = args.width {
        file.window.width = width;
    }
    if let Some(height) = args.height {
        file.window.height = height;
    }
    if let Some(title) = &args.title {
        file.window.title = title.clone();
    }
    if let Some(interval) = args.interval_ms {
        file.animation.interval_ms = interval;
    }
    if let Some(step) = args.step {
        file.animation.step = step;
    }
    if args.frames.is_some() {
        file.animation.frames = args.frames;
    }
}

fn run_headless(config: ShellConfig, snapshot: Option<&Path>) -> Result<ExitStatus> {
    let platform =
        HeadlessPlatform::new(HeadlessConfig::default().idle_timeout(HEADLESS_IDLE_TIMEOUT));
    let monitor = platform.monitor();

    let (width, height) = (config.window.width, config.window.height);
    let mut shell = AnimationShell::new(platform, config);
    let status = shell.run(width, height);
    let stats = shell.stats();
    drop(shell);

    info!(
        "Rendered {} frames ({} painted, {} skipped)",
        stats.rendered, stats.painted, stats.skipped
    );

    if let Some(path) = snapshot {
        match monitor.last_frame() {
            Some(frame) => {
                write_png(&frame, path)?;
                info!("Snapshot written to {}", path.display());
            }
            None => warn!("No frame was presented, snapshot skipped"),
        }
    }

    Ok(status)
}

fn write_png(frame: &Frame, path: &Path) -> Result<()> {
    let image = image::RgbImage::from_fn(frame.width, frame.height, |x, y| {
        let px = frame.pixel(x, y).unwrap_or(0);
        image::Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    });
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
