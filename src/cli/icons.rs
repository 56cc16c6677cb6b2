//! Icons command: tokenize a legend string into text and icon segments.

use crate::cli::common::{CliError, CliResult};
use crate::parser::{icon_parts_to_html, parse_icon_legend};
use clap::Args;

/// Show the icon segments of a legend string
#[derive(Debug, Clone, Args)]
pub struct IconsArgs {
    /// Legend text, e.g. '<i class="fa fa-home"></i> Home'
    #[arg(value_name = "LEGEND")]
    pub legend: String,

    /// Print the legend re-rendered from its segments instead of JSON
    #[arg(long)]
    pub html: bool,
}

impl IconsArgs {
    /// Execute the icons command
    pub fn execute(&self) -> CliResult<()> {
        let parts = parse_icon_legend(&self.legend);

        if self.html {
            println!("{}", icon_parts_to_html(&parts));
        } else {
            println!(
                "{}",
                serde_json::to_string_pretty(&parts)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        }

        Ok(())
    }
}
