//! Parsing for legacy and normalized layout formats.
//!
//! The legacy pipeline is: raw text → [`raw::parse_raw_document`] →
//! [`kle::interpret_document`] (which calls into [`legends`] and [`icons`] for
//! every key) → [`NormalizedLayout`]. Only the first stage can fail.

pub mod icons;
pub mod kle;
pub mod legends;
pub mod normalized;
pub mod raw;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::models::NormalizedLayout;

// Re-export commonly used functions
pub use icons::{has_icons, icon_parts_to_html, parse_icon_legend, IconPart};
pub use kle::{interpret_document, ImportOptions};
pub use legends::{classify, HomingNubType};
pub use normalized::{parse_normalized_layout, to_normalized_json};
pub use raw::{parse_raw_document, RawLayoutDocument};

/// Which importer a piece of layout text needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    /// Legacy row/array format (strict JSON or the relaxed raw dialect)
    Legacy,
    /// Normalized `{ "metadata": ..., "keys": [...] }` JSON
    Normalized,
}

/// Detects the format of layout text.
///
/// Normalized layouts are JSON objects with a `metadata` object and a `keys`
/// array. Everything else is handed to the legacy importer, which reports
/// structural errors itself.
pub fn detect_format(text: &str) -> LayoutFormat {
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    if !trimmed.starts_with('{') {
        return LayoutFormat::Legacy;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(object))
            if object.get("metadata").is_some_and(Value::is_object)
                && object.get("keys").is_some_and(Value::is_array) =>
        {
            LayoutFormat::Normalized
        }
        _ => LayoutFormat::Legacy,
    }
}

/// Parses legacy layout text into a normalized layout.
pub fn parse_legacy_layout(text: &str, options: &ImportOptions) -> Result<NormalizedLayout> {
    let document = parse_raw_document(text)?;
    Ok(interpret_document(&document, options))
}

/// Imports layout text in either format.
pub fn import_layout(text: &str, options: &ImportOptions) -> Result<NormalizedLayout> {
    match detect_format(text) {
        LayoutFormat::Normalized => parse_normalized_layout(text).or_else(|err| {
            debug!(error = %err, "not a normalized layout, importing as legacy");
            parse_legacy_layout(text, options)
        }),
        LayoutFormat::Legacy => parse_legacy_layout(text, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FormatError};

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(r#"[["A"]]"#), LayoutFormat::Legacy);
        assert_eq!(detect_format(r#"{"name":"x"},["A"]"#), LayoutFormat::Legacy);
        assert_eq!(detect_format(r#"{"name":"x"}"#), LayoutFormat::Legacy);
        assert_eq!(
            detect_format(r#"{"metadata":{},"keys":[]}"#),
            LayoutFormat::Normalized
        );
        assert_eq!(
            detect_format(r#"{"name":"x","keys":["A"]}"#),
            LayoutFormat::Legacy
        );
    }

    #[test]
    fn test_metadata_object_with_keys_field_imports_as_legacy() {
        let options = ImportOptions::default();
        let layout = import_layout(r#"{"name":"Board","keys":[1,2]}"#, &options).unwrap();
        assert_eq!(layout.key_count(), 0);
        assert_eq!(layout.metadata.name.as_deref(), Some("Board"));
        assert!(layout.metadata.extra.contains_key("keys"));

        // Shaped like a normalized layout but not decodable as one.
        let layout = import_layout(r#"{"metadata":{},"keys":[5]}"#, &options).unwrap();
        assert_eq!(layout.key_count(), 0);
        assert!(layout.metadata.extra.contains_key("metadata"));
    }

    #[test]
    fn test_import_layout_routes_by_format() {
        let options = ImportOptions::default();
        let legacy = import_layout(r#"[["A","B"]]"#, &options).unwrap();
        assert_eq!(legacy.key_count(), 2);

        let json = to_normalized_json(&legacy, false).unwrap();
        let normalized = import_layout(&json, &options).unwrap();
        assert!(normalized.structurally_eq(&legacy));
        assert_eq!(normalized.keys[0].id, legacy.keys[0].id);
    }

    #[test]
    fn test_import_layout_surfaces_format_error() {
        let err = import_layout("not a layout", &ImportOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::NotArrayOrObject { .. })
        ));
        assert!(err.is_format_error());
    }
}
