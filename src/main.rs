//! canvasfade headless runner.
//!
//! Spawns the panels of a fade scenario into a `bevy_ecs` world and steps
//! the fade systems at a fixed frame rate, logging every alpha change. No
//! window is opened; this is a harness for tuning fade speeds and checking
//! timing.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --scenario dialog.json --fps 30
//! ```

use bevy_ecs::prelude::*;
use canvasfade::resources::fadeconfig::FadeConfig;
use canvasfade::scenario::{ScenarioData, ScenarioRunner};
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Headless alpha fade runner
#[derive(Parser)]
#[command(version, about = "Simulates UI panel fades and logs their alpha over time.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./canvasfade.ini")]
    config: PathBuf,

    /// Scenario JSON file. A built-in fade in/out runs when omitted.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Override simulated frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Override the maximum number of frames to simulate.
    #[arg(long)]
    frames: Option<u32>,

    /// Override the default fade speed (alpha units per second).
    #[arg(long)]
    speed: Option<f32>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = FadeConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(fps) = cli.fps {
        config.fps = fps.max(1);
    }
    if let Some(frames) = cli.frames {
        config.max_frames = frames;
    }
    if let Some(speed) = cli.speed {
        if speed > 0.0 {
            config.fade_speed = speed;
        } else {
            warn!("Ignoring non-positive --speed {}", speed);
        }
    }

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let data = match &cli.scenario {
        Some(path) => match ScenarioData::load(path) {
            Ok(data) => data,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => ScenarioData::builtin(),
    };

    let mut world = World::new();
    let mut runner = match ScenarioRunner::new(&mut world, data, &config) {
        Ok(runner) => runner,
        Err(e) => {
            error!("Invalid scenario: {}", e);
            std::process::exit(1);
        }
    };

    let frames = runner.run(&mut world, config.max_frames);
    if runner.is_settled(&mut world) {
        info!("Scenario settled after {} frames", frames);
    } else {
        warn!("Stopped after {} frames without settling", frames);
    }
    for panel in runner.report(&world) {
        info!("{:<12} alpha={:.3}", panel.name, panel.alpha);
    }
}
