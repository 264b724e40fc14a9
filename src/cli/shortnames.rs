//! Shortnames command for generating the shortname lookup table.

use crate::cli::common::{CliResult, ConfigArgs, SourceArgs};
use crate::export::{render_shortname_table, CollisionPolicy, ShortnameValue};
use clap::Args;

/// Generate the shortname -> emoji lookup table
#[derive(Debug, Clone, Args)]
pub struct ShortnamesArgs {
    /// Input and output
    #[command(flatten)]
    pub source: SourceArgs,

    /// Settings file
    #[command(flatten)]
    pub settings: ConfigArgs,

    /// What each shortname maps to (overrides the config file)
    #[arg(long, value_enum)]
    pub value: Option<ShortnameValue>,

    /// Which emoji keeps a shortname shared by several (overrides the config file)
    #[arg(long, value_enum)]
    pub collision: Option<CollisionPolicy>,
}

impl ShortnamesArgs {
    /// Execute the shortnames command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = self.settings.load_config()?;
        if let Some(value) = self.value {
            config.shortnames.value = value;
        }
        if let Some(collision) = self.collision {
            config.shortnames.collision = collision;
        }

        let groups = self.source.load_groups()?;
        let table = render_shortname_table(&groups, &config.shortnames);

        self.source.emit(&table)
    }
}
