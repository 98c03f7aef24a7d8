//! Configuration system

pub use serde::{Deserialize, Serialize};

use crate::ecs::Tag;
use crate::physics::collision::Rect;
use crate::physics::CollisionMatrix;
use crate::spatial::QuadtreeConfig;
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Collision engine settings for one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Area covered by the quadtree root
    pub world_bounds: Rect,

    /// Quadtree subdivision limits
    #[serde(default)]
    pub quadtree: QuadtreeConfig,

    /// Tag pairs allowed to collide
    #[serde(default = "default_enabled_pairs")]
    pub enabled_pairs: Vec<(Tag, Tag)>,

    /// Produce debug overlay shapes
    #[serde(default)]
    pub debug_render: bool,
}

fn default_enabled_pairs() -> Vec<(Tag, Tag)> {
    CollisionMatrix::DEFAULT_PAIRS.to_vec()
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            world_bounds: Rect::from_xywh(0.0, 0.0, 1280.0, 720.0),
            quadtree: QuadtreeConfig::default(),
            enabled_pairs: default_enabled_pairs(),
            debug_render: false,
        }
    }
}

impl CollisionConfig {
    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = &self.world_bounds;
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "world bounds must have a positive size, got {}x{}",
                bounds.width(),
                bounds.height()
            )));
        }

        if self.quadtree.max_entities_per_node == 0 {
            return Err(ConfigError::Invalid(
                "quadtree.max_entities_per_node must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config for CollisionConfig {}
