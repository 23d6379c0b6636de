//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//!
//! Command-line flags take precedence over anything loaded here.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Rendering settings
    pub render: RenderConfig,

    /// Remote document settings
    pub fetch: FetchConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Heading level of the root title when no template is given
    pub heading_level: usize,

    /// Template used when `--template` is not given
    pub template: Option<PathBuf>,
}

/// Remote document configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds; unset or 0 waits indefinitely
    pub timeout_secs: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when no `-v` is given
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            heading_level: 1,
            template: None,
        }
    }
}

impl FetchConfig {
    /// The effective fetch timeout, with `override_secs` taking precedence
    pub fn timeout(&self, override_secs: Option<u64>) -> Option<Duration> {
        override_secs
            .or(self.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let is_yaml = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s == "yaml" || s == "yml")
            .unwrap_or(false);

        let config: Config = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".schemamd.yaml"), PathBuf::from(".schemamd.json")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("schemamd").join("config.yaml"));
        }

        paths
    }

    fn validate(&self) -> Result<()> {
        if self.render.heading_level == 0 {
            return Err(Error::config("render.heading_level must be at least 1"));
        }
        Ok(())
    }
}
