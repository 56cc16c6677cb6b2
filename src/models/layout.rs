//! Normalized layout: document metadata plus the flat list of keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Key;

/// Background texture reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Display name of the texture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// CSS style applied to the case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Document-level metadata from the optional leading object.
///
/// Unknown fields are preserved in `extra` so nothing the producer wrote is
/// lost on import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetadata {
    /// Layout name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Layout author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Case color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backcolor: Option<String>,
    /// Case texture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Corner radius spec, CSS border-radius syntax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radii: Option<String>,
    /// Default switch mount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_mount: Option<String>,
    /// Default switch brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_brand: Option<String>,
    /// Default switch type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_type: Option<String>,
    /// Plate-mounted switches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<bool>,
    /// PCB-mounted switches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcb: Option<bool>,
    /// Custom CSS for the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    /// Fields this model does not know about, kept verbatim
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// The importer's output.
///
/// Created fresh on every import and replaced wholesale on re-import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLayout {
    /// Document metadata
    #[serde(default)]
    pub metadata: LayoutMetadata,
    /// Keys in source order
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl NormalizedLayout {
    /// Gets the total number of keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Axis-aligned bounds of all unrotated keys, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.keys
            .iter()
            .map(Key::bounds)
            .reduce(|(ax, ay, bx, by), (cx, cy, dx, dy)| {
                (ax.min(cx), ay.min(cy), bx.max(dx), by.max(dy))
            })
    }

    /// Key-for-key, field-for-field equality that ignores generated ids.
    pub fn structurally_eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata
            && self.keys.len() == other.keys.len()
            && self.keys.iter().zip(&other.keys).all(|(a, b)| a.same_as(b))
    }
}
