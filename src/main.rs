//! Emoji Table Generator - build-time emoji artifact generator
//!
//! Reads emoji metadata and prints the emoji picker markup, the shortname
//! lookup table, or the text-default codepoint list to standard output for
//! redirection into generated files.

use clap::{Parser, Subcommand};
use emojigen::cli::{CliResult, PickerArgs, ShortnamesArgs, TextDefaultArgs};
use emojigen::constants::APP_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Emoji Table Generator - emoji picker and lookup table generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the tabbed emoji picker HTML fragment
    Picker(PickerArgs),
    /// Generate the shortname lookup table
    Shortnames(ShortnamesArgs),
    /// Generate the list of text-default codepoints
    TextDefault(TextDefaultArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Picker(args) => args.execute(),
            Self::Shortnames(args) => args.execute(),
            Self::TextDefault(args) => args.execute(),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the generated artifact
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    match cli.command.execute() {
        Ok(()) => emojigen::cli::ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.code.into()
        }
    }
}
