//! Application-wide constants.
//!
//! This module defines the application name and the defaults of the legacy
//! layout format that a key falls back to when a field was never set.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Keyboard Layout Importer";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "kbdlayout";

/// Maximum number of legend slots on one key.
pub const MAX_LEGEND_SLOTS: usize = 12;

/// Number of front legend positions (left, center, right).
pub const FRONT_LEGEND_SLOTS: usize = 3;

/// Keycap color used when no `c` property was seen.
pub const DEFAULT_KEY_COLOR: &str = "#cccccc";

/// Legend color used when neither a slot color nor a default was set.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Legend size used when neither a slot size nor a default was set.
pub const DEFAULT_TEXT_SIZE: f64 = 3.0;

/// Legend size forced onto slots that contain icon markup.
pub const ICON_TEXT_SIZE: f64 = 9.0;

/// Minimum width (in key units) at which spacebar-style front legends apply.
pub const WIDE_KEY_WIDTH: f64 = 2.0;
