//! Lane-defense collision demo
//!
//! Usage: `lawn_demo [config.toml|config.ron]`

mod config;
mod scenario;
mod units;

use config::DemoConfig;
use lawn_engine::config::Config;
use lawn_engine::foundation::logging;
use scenario::Lawn;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load_from_file(&path)?,
        None => DemoConfig::default(),
    };

    logging::init_with_level(&config.log_level);
    log::info!(
        "Starting lawn demo: {} ticks of {:.4}s, seed {}",
        config.ticks,
        config.tick_seconds,
        config.seed
    );

    let mut lawn = Lawn::new(config)?;
    let summary = lawn.run();

    log::info!(
        "Finished {} ticks: {} peas fired, {} zombies defeated, {} plants eaten",
        summary.ticks,
        summary.peas_fired,
        summary.zombies_killed,
        summary.plants_eaten
    );
    log::info!(
        "Collision notifications: {} enter, {} stay, {} exit (peak {} pairs), {} objects despawned",
        summary.enters,
        summary.stays,
        summary.exits,
        summary.peak_pairs,
        summary.despawned
    );
    log::info!("Left on the lawn: {} zombies, {} plants", summary.zombies_left, summary.plants_left);

    Ok(())
}
