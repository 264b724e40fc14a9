//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the configuration file name.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Emoji Table Generator";

/// The binary name of the application (used in command examples and generated headers).
pub const APP_BINARY_NAME: &str = "emojigen";

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
