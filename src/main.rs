//! Pony - headless demo of the Pony engine libraries
//!
//! Spins a tinted quad through 2D transformations while interpolating a 3D orientation, and
//! logs what happens on each frame.

use pony::config::AppConfig;
use pony::systems::SimulationSystem;

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging, RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Pony demo ({} frames)", config.demo.frames);

    let log_frames = config.debug.log_frames;
    let mut simulation = match SimulationSystem::new(config.demo) {
        Ok(simulation) => simulation,
        Err(e) => {
            log::error!("Failed to create demo mesh: {}", e);
            std::process::exit(1);
        }
    };

    let mut last = None;
    while !simulation.is_finished() {
        match simulation.step() {
            Ok(summary) => {
                if log_frames {
                    log::info!(
                        "Frame {}: angle {:.2}, tint {:#010x}, facing {}",
                        summary.frame,
                        summary.angle,
                        summary.packed_tint(),
                        summary.facing
                    );
                }
                last = Some(summary);
            }
            Err(e) => {
                log::error!("Simulation step failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    match last {
        Some(summary) => log::info!(
            "Finished after {} frames: angle {:.2}, tint {}, orientation {}, {} vertex bytes",
            summary.frame,
            summary.angle,
            summary.tint,
            summary.orientation,
            simulation.mesh().vertex_bytes().len()
        ),
        None => log::info!("No frames to simulate"),
    }
}
