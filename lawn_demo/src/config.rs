//! Demo settings

use lawn_engine::config::{CollisionConfig, Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Scenario settings loaded from TOML or RON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Number of simulation ticks to run
    pub ticks: u32,

    /// Simulated time per tick
    pub tick_seconds: f32,

    /// Seed for zombie placement and speed
    pub seed: u64,

    /// Number of lanes on the lawn
    pub lanes: u32,

    /// Plants placed at the left of each lane
    pub plants_per_lane: u32,

    /// Zombies queued at the right of each lane
    pub zombies_per_lane: u32,

    /// Ticks between two shots of the same plant
    pub fire_interval_ticks: u32,

    /// Collision engine settings
    pub collision: CollisionConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ticks: 1800,
            tick_seconds: 1.0 / 60.0,
            seed: 42,
            lanes: 5,
            plants_per_lane: 2,
            zombies_per_lane: 4,
            fire_interval_ticks: 90,
            collision: CollisionConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Check values the scenario depends on, collision settings included
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_seconds > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }

        if self.lanes == 0 {
            return Err(ConfigError::Invalid("lanes must be at least 1".to_string()));
        }

        if self.fire_interval_ticks == 0 {
            return Err(ConfigError::Invalid(
                "fire_interval_ticks must be at least 1".to_string(),
            ));
        }

        self.collision.validate()
    }
}

impl Config for DemoConfig {}
