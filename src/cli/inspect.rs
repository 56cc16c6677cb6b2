//! Inspect command: summary of an imported layout.

use crate::cli::common::{load_error, CliError, CliResult};
use crate::config::Config;
use crate::models::NormalizedLayout;
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print a summary of a layout file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the layout file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable layout summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    /// Layout name from metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Layout author from metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Number of keys
    pub key_count: usize,
    /// `[min_x, min_y, max_x, max_y]` of unrotated key rectangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[f64; 4]>,
    /// Keys with a rotation
    pub rotated_keys: usize,
    /// Decal keys
    pub decal_keys: usize,
    /// Keys with a homing nub
    pub homing_keys: usize,
    /// Keys with front legends
    pub front_legend_keys: usize,
}

impl LayoutSummary {
    /// Builds the summary for a layout.
    pub fn from_layout(layout: &NormalizedLayout) -> Self {
        let count = |predicate: fn(&crate::models::Key) -> bool| {
            layout.keys.iter().filter(|key| predicate(key)).count()
        };
        Self {
            name: layout.metadata.name.clone(),
            author: layout.metadata.author.clone(),
            key_count: layout.key_count(),
            bounds: layout
                .bounds()
                .map(|(min_x, min_y, max_x, max_y)| [min_x, min_y, max_x, max_y]),
            rotated_keys: count(|key| key.rotation.is_some()),
            decal_keys: count(|key| key.decal),
            homing_keys: count(|key| key.nub),
            front_legend_keys: count(|key| key.front_legends.is_some()),
        }
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let layout = LayoutService::load(&self.input, &config.import_options())
            .map_err(|e| load_error(&e))?;
        let summary = LayoutSummary::from_layout(&layout);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Layout: {}", summary.name.as_deref().unwrap_or("(untitled)"));
            if let Some(author) = &summary.author {
                println!("Author: {author}");
            }
            println!("Keys: {}", summary.key_count);
            if let Some([min_x, min_y, max_x, max_y]) = summary.bounds {
                println!("Bounds: ({min_x}, {min_y}) - ({max_x}, {max_y})");
            }
            println!("Rotated keys: {}", summary.rotated_keys);
            println!("Decal keys: {}", summary.decal_keys);
            println!("Homing keys: {}", summary.homing_keys);
            println!("Keys with front legends: {}", summary.front_legend_keys);
        }

        Ok(())
    }
}
