//! Configuration file handling for asciify-server.
//!
//! Loads `asciify.toml` from the working directory, or a custom path given
//! with `--config`. Every key is optional.

use asciify::{AsciiConfig, GlyphRamp};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "asciify.toml";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub render: RenderSection,
}

/// Hosting options: where to listen and how much work one request may cost.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default = "default_field_name")]
    pub field_name: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            request_timeout_secs: default_timeout_secs(),
            max_upload_bytes: default_max_upload_bytes(),
            field_name: default_field_name(),
        }
    }
}

/// Rendering knobs. Unset keys fall back to the chosen preset.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RenderSection {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub gamma: Option<f32>,
    #[serde(default)]
    pub double_width: Option<bool>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub ramp: Option<String>,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_field_name() -> String {
    "file".to_string()
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown render preset '{0}', expected 'wide' or 'narrow'")]
    UnknownPreset(String),

    #[error("Invalid render settings: {0}")]
    InvalidRender(String),

    #[error("Invalid server settings: {0}")]
    InvalidServer(String),
}

impl ServerConfig {
    /// Load configuration from a file path.
    ///
    /// Without a path, `asciify.toml` in the working directory is used if it
    /// exists and defaults otherwise. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Upper bound on the time spent converting one upload.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidServer(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidServer(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }
        if self.server.field_name.is_empty() {
            return Err(ConfigError::InvalidServer(
                "field_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl RenderSection {
    /// Resolve the preset and overrides into a validated [`AsciiConfig`].
    pub fn to_ascii_config(&self) -> Result<AsciiConfig, ConfigError> {
        let mut config = match self.preset.as_deref() {
            None | Some("wide") => AsciiConfig::wide(),
            Some("narrow") => AsciiConfig::narrow(),
            Some(other) => return Err(ConfigError::UnknownPreset(other.to_string())),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(double_width) = self.double_width {
            config.double_width = double_width;
        }
        if let Some(ramp) = &self.ramp {
            config.ramp = GlyphRamp::new(ramp).map_err(ConfigError::InvalidRender)?;
        }
        config.invert_luminance = self.invert;

        config.validate().map_err(ConfigError::InvalidRender)?;
        Ok(config)
    }
}
