//! Picker command for generating the emoji picker markup.

use crate::cli::common::{CliError, CliResult, ConfigArgs, SourceArgs};
use crate::export::{render_picker, PickerFlavor};
use clap::Args;

/// Generate the tabbed emoji picker HTML fragment
#[derive(Debug, Clone, Args)]
pub struct PickerArgs {
    /// Input and output
    #[command(flatten)]
    pub source: SourceArgs,

    /// Settings file
    #[command(flatten)]
    pub settings: ConfigArgs,

    /// CSS class scheme (overrides the config file)
    #[arg(long, value_enum)]
    pub flavor: Option<PickerFlavor>,

    /// Directory holding the tone0.svg..tone5.svg swatches (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub asset_dir: Option<String>,
}

impl PickerArgs {
    /// Execute the picker command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = self.settings.load_config()?;
        if let Some(flavor) = self.flavor {
            config.picker.flavor = flavor;
        }
        if let Some(asset_dir) = &self.asset_dir {
            config.picker.asset_dir = asset_dir.clone();
        }
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid picker options: {e}")))?;

        let groups = self.source.load_groups()?;
        let html = render_picker(&groups, &config.picker);

        self.source.emit(&html)
    }
}
