mod loader;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use loader::load_config;

/// Render parameters
///
/// Dimensions are signed so that a negative value in a config file is
/// reported by [`RenderConfig::validate`] rather than as a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: i64,
    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: i64,
    /// Sampling stride; only every `pixel_size`-th pixel is drawn
    #[serde(default = "default_pixel_size")]
    pub pixel_size: i64,
    /// Shade rows on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_width() -> i64 {
    250
}

fn default_height() -> i64 {
    250
}

fn default_pixel_size() -> i64 {
    1
}

fn default_parallel() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            pixel_size: default_pixel_size(),
            parallel: default_parallel(),
        }
    }
}

impl RenderConfig {
    pub fn new(width: i64, height: i64, pixel_size: i64) -> Self {
        Self {
            width,
            height,
            pixel_size,
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Load from `config_path`, or from `render.yaml` / `render.yml` in the
    /// working directory, or fall back to defaults
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => {
                let default_paths = ["render.yaml", "render.yml"];
                for p in default_paths {
                    let path = Path::new(p);
                    if path.exists() {
                        return Self::from_file(path);
                    }
                }
                Ok(Self::default())
            }
        }
    }

    /// Reject non-positive dimensions or stride
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("pixel_size", self.pixel_size),
        ] {
            if value <= 0 {
                return Err(ConfigError::Validation(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Number of characters per row and number of rows
    pub fn output_size(&self) -> (usize, usize) {
        let step = self.pixel_size.max(1);
        let cols = (self.width.max(0) + step - 1) / step;
        let rows = (self.height.max(0) + step - 1) / step;
        (cols as usize, rows as usize)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
