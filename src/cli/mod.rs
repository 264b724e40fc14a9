//! CLI command handlers for emojigen.
//!
//! Each generator is a subcommand that reads one metadata source and prints
//! one artifact, for use from build scripts.

pub mod common;
pub mod picker;
pub mod shortnames;
pub mod text_default;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ConfigArgs, ExitCode, SourceArgs};
pub use picker::PickerArgs;
pub use shortnames::ShortnamesArgs;
pub use text_default::TextDefaultArgs;
