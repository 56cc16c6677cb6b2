//! A single key of a normalized layout.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_KEY_COLOR, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_SIZE};
use crate::models::Profile;

/// Secondary rectangle of a non-rectangular key (ISO Enter, stepped caps).
///
/// Offsets are relative to the key's own `x`/`y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryRect {
    /// X offset of the second rectangle
    pub x2: f64,
    /// Y offset of the second rectangle
    pub y2: f64,
    /// Width of the second rectangle
    pub width2: f64,
    /// Height of the second rectangle
    pub height2: f64,
}

/// Rotation of a key around an absolute origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    /// Clockwise angle in degrees
    pub angle: f64,
    /// Absolute X of the pivot
    pub origin_x: f64,
    /// Absolute Y of the pivot
    pub origin_y: f64,
}

/// Scalar fallbacks for legend slots that have no explicit color or size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDefaults {
    /// Default legend color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Default legend size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f64>,
}

impl KeyDefaults {
    /// True when neither fallback is set.
    pub const fn is_empty(&self) -> bool {
        self.text_color.is_none() && self.text_size.is_none()
    }
}

/// Per-key switch override (`sm`, `sb`, `st`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchInfo {
    /// Switch mount, e.g. "cherry" or "alps"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount: Option<String>,
    /// Switch brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Switch part number / type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl SwitchInfo {
    /// True when no switch field is set.
    pub const fn is_empty(&self) -> bool {
        self.mount.is_none() && self.brand.is_none() && self.kind.is_none()
    }
}

/// One key emitted by the importer.
///
/// # Invariants
///
/// - `width > 0` and `height > 0`
/// - `labels.len()` matches the legend split of the source label (at most 12)
/// - a legend moved into `front_legends` or `center_legend` is blank in `labels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    /// Unique identifier, regenerated on every import
    pub id: Uuid,
    /// Left edge in key units
    pub x: f64,
    /// Top edge in key units
    pub y: f64,
    /// Width in key units
    pub width: f64,
    /// Height in key units
    pub height: f64,
    /// Second rectangle for stepped and L-shaped keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryRect>,
    /// Rotation, only present for a non-zero angle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    /// Legend slots; an empty string means no legend
    pub labels: Vec<String>,
    /// Per-slot legend colors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_color: Vec<Option<String>>,
    /// Per-slot legend sizes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_size: Vec<Option<f64>>,
    /// Fallback legend color and size
    #[serde(default, skip_serializing_if = "KeyDefaults::is_empty")]
    pub default: KeyDefaults,
    /// Keycap color
    pub color: String,
    /// Keycap profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Homing nub
    #[serde(default)]
    pub nub: bool,
    /// Ghosted (drawn translucent)
    #[serde(default)]
    pub ghost: bool,
    /// Stepped cap
    #[serde(default)]
    pub stepped: bool,
    /// Decoration, not a real key
    #[serde(default)]
    pub decal: bool,
    /// Legend alignment flags as written by the producer
    #[serde(default)]
    pub align: u8,
    /// Front legends: left, center, right
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_legends: Option<[String; 3]>,
    /// Secondary center legend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_legend: Option<String>,
    /// Switch override for this key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch: Option<SwitchInfo>,
}

impl Key {
    /// Creates a 1x1 key at the given position with no legends.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: 1.0,
            height: 1.0,
            secondary: None,
            rotation: None,
            labels: Vec::new(),
            text_color: Vec::new(),
            text_size: Vec::new(),
            default: KeyDefaults::default(),
            color: DEFAULT_KEY_COLOR.to_string(),
            profile: None,
            nub: false,
            ghost: false,
            stepped: false,
            decal: false,
            align: 0,
            front_legends: None,
            center_legend: None,
            switch: None,
        }
    }

    /// Legend in `slot`, or `None` when unset.
    pub fn label(&self, slot: usize) -> Option<&str> {
        self.labels
            .get(slot)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Front legend at position 0 (left), 1 (center) or 2 (right).
    pub fn front_legend(&self, position: usize) -> Option<&str> {
        self.front_legends
            .as_ref()
            .and_then(|front| front.get(position))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Effective legend color for `slot`, backfilled from the key default.
    pub fn text_color_at(&self, slot: usize) -> &str {
        self.text_color
            .get(slot)
            .and_then(Option::as_deref)
            .or(self.default.text_color.as_deref())
            .unwrap_or(DEFAULT_TEXT_COLOR)
    }

    /// Effective legend size for `slot`, backfilled from the key default.
    pub fn text_size_at(&self, slot: usize) -> f64 {
        self.text_size
            .get(slot)
            .copied()
            .flatten()
            .or(self.default.text_size)
            .unwrap_or(DEFAULT_TEXT_SIZE)
    }

    /// Axis-aligned bounds `(min_x, min_y, max_x, max_y)` of the unrotated key,
    /// including its secondary rectangle.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = self.x;
        let mut min_y = self.y;
        let mut max_x = self.x + self.width;
        let mut max_y = self.y + self.height;
        if let Some(rect) = self.secondary {
            min_x = min_x.min(self.x + rect.x2);
            min_y = min_y.min(self.y + rect.y2);
            max_x = max_x.max(self.x + rect.x2 + rect.width2);
            max_y = max_y.max(self.y + rect.y2 + rect.height2);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Compares two keys field by field, ignoring `id`.
    pub fn same_as(&self, other: &Self) -> bool {
        let mut other = other.clone();
        other.id = self.id;
        *self == other
    }
}
