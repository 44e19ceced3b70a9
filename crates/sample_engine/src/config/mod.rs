//! Configuration system

use std::path::Path;

pub use serde::{Deserialize, Serialize};

pub mod input;

pub use input::{CameraConfig, InputConfig};

/// Configuration trait
///
/// The file format is picked from the extension: `.toml` or `.ron`.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Load configuration from file, falling back to defaults when the file is missing
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
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

    /// Value out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
