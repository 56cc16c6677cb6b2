//! Normalized layout JSON.
//!
//! This is the format the editor stores and re-imports. Unlike the legacy
//! format it is a plain serde mapping of [`NormalizedLayout`], so importing it
//! needs no interpretation.

use crate::error::Result;
use crate::models::NormalizedLayout;

/// Serializes a layout to normalized JSON.
pub fn to_normalized_json(layout: &NormalizedLayout, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(layout)?
    } else {
        serde_json::to_string(layout)?
    };
    Ok(json)
}

/// Parses normalized JSON produced by [`to_normalized_json`].
pub fn parse_normalized_layout(text: &str) -> Result<NormalizedLayout> {
    Ok(serde_json::from_str(text.trim_start_matches('\u{feff}'))?)
}
