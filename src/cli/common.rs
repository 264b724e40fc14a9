//! Shared CLI plumbing: error type, exit codes, and the source/output arguments
//! every generator command takes.

use crate::config::Config;
use crate::models::EmojiGroups;
use crate::parser::{self, InputFormat, LoadError};
use clap::Args;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Artifact generated
    Success = 0,
    /// Invalid arguments or configuration
    Validation = 1,
    /// A file could not be read or written
    Io = 2,
    /// The metadata source is malformed
    Parse = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Error reported by a CLI command.
#[derive(Debug)]
pub struct CliError {
    /// Exit code the process terminates with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid arguments or configuration.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Malformed metadata source.
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Parse,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Io { .. } => Self::io(err.to_string()),
            LoadError::Parse { .. } => Self::parse(err.to_string()),
        }
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Input and output arguments shared by all generator commands.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Path to the emoji metadata JSON file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Layout of the metadata file
    #[arg(long, value_enum, default_value_t = InputFormat::Grouped)]
    pub format: InputFormat,

    /// Write the artifact to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Config file argument of the commands that read generator settings.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path to a TOML config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Loads the configuration file, if any.
    pub fn load_config(&self) -> CliResult<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        config.map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))
    }
}

impl SourceArgs {
    /// Loads and groups the metadata source.
    pub fn load_groups(&self) -> CliResult<EmojiGroups> {
        let source = parser::load(&self.input, self.format)?;
        let groups = EmojiGroups::group(source.emojis);

        if groups.dropped() > 0 {
            tracing::info!(
                "Dropped {} emoji with unknown categories",
                groups.dropped()
            );
        }
        tracing::info!("Grouped {} emoji", groups.len());

        Ok(groups)
    }

    /// Writes the finished artifact to the output file or standard output.
    pub fn emit(&self, artifact: &str) -> CliResult<()> {
        match &self.output {
            Some(path) => fs::write(path, artifact).map_err(|e| {
                CliError::io(format!("Failed to write {}: {e}", path.display()))
            })?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(artifact.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| CliError::io(format!("Failed to write output: {e}")))?;
            }
        }

        Ok(())
    }
}
