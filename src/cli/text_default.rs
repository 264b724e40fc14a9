//! Text-default command for listing glyphs that default to text presentation.

use crate::cli::common::{CliError, CliResult, SourceArgs};
use crate::export::render_text_default_list;
use clap::Args;

/// Generate the list of text-default codepoints
#[derive(Debug, Clone, Args)]
pub struct TextDefaultArgs {
    /// Input and output
    #[command(flatten)]
    pub source: SourceArgs,
}

impl TextDefaultArgs {
    /// Execute the text-default command
    pub fn execute(&self) -> CliResult<()> {
        let groups = self.source.load_groups()?;
        let list = render_text_default_list(&groups)
            .map_err(|e| CliError::validation(format!("Failed to generate list: {e:#}")))?;

        self.source.emit(&list)
    }
}
