//! Pre-processor for legacy layout text.
//!
//! Turns raw text into a [`RawLayoutDocument`]: an optional metadata object
//! followed by rows of property objects and label strings. Strict JSON is tried
//! first. The legacy editor's "raw data" dialect (unquoted keys, rows written
//! without the enclosing brackets) is then decoded by the `json5` literal
//! parser after wrapping the text in one outer array. Nothing is ever evaluated
//! as code.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::FormatError;

/// One element of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowItem {
    /// Sparse property object modifying the cursor
    Properties(Map<String, Value>),
    /// Label string, one key
    Label(String),
    /// Anything else (numbers, nulls, nested arrays); ignored by the interpreter
    Unknown(Value),
}

impl From<Value> for RowItem {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Properties(map),
            Value::String(label) => Self::Label(label),
            other => Self::Unknown(other),
        }
    }
}

/// One top-level row.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRow {
    /// A well-formed row
    Items(Vec<RowItem>),
    /// A non-array value where a row was expected
    Malformed(Value),
}

/// Parsed but uninterpreted layout document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLayoutDocument {
    /// Leading metadata object, if present
    pub metadata: Option<Map<String, Value>>,
    /// Rows in source order
    pub rows: Vec<RawRow>,
}

impl RawLayoutDocument {
    /// Builds a document from an already decoded value.
    ///
    /// A top-level array holds rows (optionally led by a metadata object). A
    /// lone object is a metadata-only document. An array holding label strings
    /// but no arrays is a single row written without its outer brackets.
    pub fn from_value(value: Value) -> Result<Self, FormatError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(map) => vec![Value::Object(map)],
            other => {
                return Err(FormatError::NotRows {
                    found: json_type_name(&other),
                })
            }
        };

        let items = if is_bare_row(&items) {
            debug!("top level is a single bare row, wrapping it");
            vec![Value::Array(items)]
        } else {
            items
        };

        let mut document = Self::default();
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Array(elements) => document
                    .rows
                    .push(RawRow::Items(elements.into_iter().map(RowItem::from).collect())),
                Value::Object(map) if index == 0 => document.metadata = Some(map),
                other => document.rows.push(RawRow::Malformed(other)),
            }
        }

        Ok(document)
    }

    /// Number of label strings across all rows.
    pub fn label_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| match row {
                RawRow::Items(items) => items
                    .iter()
                    .filter(|item| matches!(item, RowItem::Label(_)))
                    .count(),
                RawRow::Malformed(_) => 0,
            })
            .sum()
    }
}

/// Decodes legacy layout text into a [`RawLayoutDocument`].
///
/// # Errors
///
/// Returns [`FormatError`] when the trimmed text does not start with `[` or
/// `{`, when neither decoder accepts it, or when the top level is not an array
/// of rows.
pub fn parse_raw_document(text: &str) -> Result<RawLayoutDocument, FormatError> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();

    match trimmed.chars().next() {
        Some('[' | '{') => {}
        Some(other) => {
            return Err(FormatError::NotArrayOrObject {
                found: format!("{other:?}"),
            })
        }
        None => {
            return Err(FormatError::NotArrayOrObject {
                found: "empty input".to_string(),
            })
        }
    }

    let value = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value,
        Err(strict) => {
            debug!(error = %strict, "strict JSON decode failed, trying permissive decode");
            decode_permissive(trimmed).map_err(|permissive| FormatError::Syntax {
                strict: strict.to_string(),
                permissive,
            })?
        }
    };

    RawLayoutDocument::from_value(value)
}

/// Decodes the relaxed dialect by wrapping the text in a single outer array.
fn decode_permissive(trimmed: &str) -> Result<Value, String> {
    let wrapped = format!("[{trimmed}]");
    let value: Value = json5::from_str(&wrapped).map_err(|e| e.to_string())?;

    // A json5 document that already had its outer brackets is now wrapped twice.
    Ok(match value {
        Value::Array(mut outer) if outer.len() == 1 && is_row_list(&outer[0]) => outer.remove(0),
        other => other,
    })
}

/// An array containing arrays is a list of rows, never a single row.
fn is_row_list(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.iter().any(Value::is_array))
}

/// Strings at the top level can only mean the outer brackets were dropped.
fn is_bare_row(items: &[Value]) -> bool {
    items.iter().any(Value::is_string) && !items.iter().any(Value::is_array)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(row: &RawRow) -> Vec<&str> {
        match row {
            RawRow::Items(items) => items
                .iter()
                .filter_map(|item| match item {
                    RowItem::Label(label) => Some(label.as_str()),
                    _ => None,
                })
                .collect(),
            RawRow::Malformed(_) => Vec::new(),
        }
    }

    #[test]
    fn test_strict_json() {
        let doc = parse_raw_document(r#"[["Q","W"],["A"]]"#).unwrap();
        assert!(doc.metadata.is_none());
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(labels(&doc.rows[0]), vec!["Q", "W"]);
        assert_eq!(doc.label_count(), 3);
    }

    #[test]
    fn test_metadata_first() {
        let doc = parse_raw_document(r#"[{"name":"Test"},["Q"]]"#).unwrap();
        let metadata = doc.metadata.unwrap();
        assert_eq!(metadata["name"], "Test");
        assert_eq!(doc.rows.len(), 1);
    }

    #[test]
    fn test_unbracketed_rows() {
        let doc = parse_raw_document("[\"Q\",\"W\"],\n[\"A\",\"S\"]").unwrap();
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(labels(&doc.rows[1]), vec!["A", "S"]);
    }

    #[test]
    fn test_metadata_then_unbracketed_rows() {
        let doc = parse_raw_document("{name: \"Raw\"},\n[{w:1.5},\"Tab\"],\n[\"Caps\"]").unwrap();
        assert_eq!(doc.metadata.unwrap()["name"], "Raw");
        assert_eq!(doc.rows.len(), 2);
        match &doc.rows[0] {
            RawRow::Items(items) => match &items[0] {
                RowItem::Properties(props) => assert_eq!(props["w"].as_f64(), Some(1.5)),
                other => panic!("expected properties, got {other:?}"),
            },
            RawRow::Malformed(_) => panic!("row should be well formed"),
        }
    }

    #[test]
    fn test_relaxed_document_with_outer_brackets() {
        let doc = parse_raw_document("[[{w:2},'Shift'],['Z']]").unwrap();
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(labels(&doc.rows[0]), vec!["Shift"]);
    }

    #[test]
    fn test_single_relaxed_row() {
        let doc = parse_raw_document("[{w:2},'Shift']").unwrap();
        assert_eq!(doc.rows.len(), 1);
        assert_eq!(labels(&doc.rows[0]), vec!["Shift"]);
    }

    #[test]
    fn test_single_strict_row_without_outer_brackets() {
        let doc = parse_raw_document(r#"["Esc","F1"]"#).unwrap();
        assert_eq!(doc.rows.len(), 1);
        assert_eq!(labels(&doc.rows[0]), vec!["Esc", "F1"]);
    }

    #[test]
    fn test_lone_object_is_metadata_only() {
        let doc = parse_raw_document(r#"{"name":"Empty"}"#).unwrap();
        assert!(doc.metadata.is_some());
        assert!(doc.rows.is_empty());
    }

    #[test]
    fn test_rejects_non_structural_input() {
        let err = parse_raw_document("hello").unwrap_err();
        assert!(matches!(err, FormatError::NotArrayOrObject { .. }));

        let err = parse_raw_document("   ").unwrap_err();
        assert!(matches!(err, FormatError::NotArrayOrObject { .. }));
    }

    #[test]
    fn test_rejects_unparseable_literal() {
        let err = parse_raw_document("[[\"Q\", ]]]").unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));
    }

    #[test]
    fn test_code_is_not_evaluated() {
        let err = parse_raw_document("[alert(1)]").unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));
    }

    #[test]
    fn test_malformed_rows_are_kept_for_the_interpreter() {
        let doc = parse_raw_document(r#"[["A"], 5, ["B"]]"#).unwrap();
        assert_eq!(doc.rows.len(), 3);
        assert!(matches!(doc.rows[1], RawRow::Malformed(_)));
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let doc = parse_raw_document("\u{feff}[[\"A\"]]").unwrap();
        assert_eq!(doc.rows.len(), 1);
    }
}
