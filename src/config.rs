//! Configuration management for the generator.
//!
//! This module handles loading and validating the optional generator
//! configuration in TOML format with platform-specific directory resolution.
//! Command-line flags take precedence over values read here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_BINARY_NAME, CONFIG_FILE_NAME};
use crate::export::{PickerOptions, ShortnameOptions};

/// Generator configuration.
///
/// # File Location
///
/// - Linux: `~/.config/emojigen/config.toml`
/// - macOS: `~/Library/Application Support/emojigen/config.toml`
/// - Windows: `%APPDATA%\emojigen\config.toml`
///
/// # Example
///
/// ```toml
/// [picker]
/// flavor = "twemoji"
/// asset_dir = "img/emoji"
///
/// [shortnames]
/// value = "codepoint"
/// collision = "last-wins"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Picker markup settings
    pub picker: PickerOptions,
    /// Shortname table settings
    pub shortnames: ShortnameOptions,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default location.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `picker.asset_dir` is non-empty
    /// - `picker.asset_dir` contains no characters that would break an HTML attribute
    pub fn validate(&self) -> Result<()> {
        let asset_dir = &self.picker.asset_dir;

        if asset_dir.trim().is_empty() {
            anyhow::bail!("picker.asset_dir cannot be empty");
        }

        if asset_dir.contains(['"', '<', '>']) {
            anyhow::bail!("picker.asset_dir '{asset_dir}' contains characters not allowed in a URL path");
        }

        Ok(())
    }
}
