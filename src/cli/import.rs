//! Import command: legacy layout file to normalized JSON.

use crate::cli::common::{load_error, CliError, CliResult};
use crate::config::Config;
use crate::parser::{self, HomingNubType};
use crate::services::LayoutService;
use clap::Args;
use std::path::PathBuf;

/// Convert a legacy layout file into normalized layout JSON
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Path to the legacy (or normalized) layout file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Legend synthesized for homing keys without marker text
    #[arg(long, value_enum, value_name = "TYPE")]
    pub homing: Option<HomingNubType>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let mut options = config.import_options();
        if let Some(homing) = self.homing {
            options.homing_nub_type = homing;
        }
        let pretty = self.pretty || config.output.pretty;

        let layout = LayoutService::load(&self.input, &options).map_err(|e| load_error(&e))?;

        match &self.output {
            Some(path) => {
                LayoutService::save(&layout, path, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                eprintln!(
                    "✓ Imported {} keys to {}",
                    layout.key_count(),
                    path.display()
                );
            }
            None => {
                let json = parser::to_normalized_json(&layout, pretty)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
