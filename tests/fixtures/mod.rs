//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small fragment exercising metadata, colors, offsets, widths, an ISO
/// enter, a homing key, rotation and a decal.
pub const SAMPLE_LAYOUT: &str = r##"[
  {"name": "Sample", "author": "Test Suite", "backcolor": "#222222", "switchMount": "cherry"},
  [{"c": "#444444", "t": "#ffffff", "a": 7}, "Esc", {"x": 1}, "F1", "F2", "F3", "F4"],
  [{"y": 0.5, "w": 1.5}, "Tab", "Q", "W", "E", {"w": 1.25, "h": 2, "w2": 1.5, "h2": 1, "x": 0.25, "x2": -0.25}, "Enter"],
  [{"w": 1.75}, "Caps Lock", {"n": true}, "F\n\n\n\nscoop", "G"],
  [{"r": 10, "rx": 8, "ry": 4}, "R1", "R2"],
  [{"r": 0, "d": true}, "Logo\n\n\n\n\n\n\n\nmark"]
]"##;

/// Number of keys in [`SAMPLE_LAYOUT`].
pub const SAMPLE_KEY_COUNT: usize = 16;

/// The relaxed raw dialect: no outer brackets, unquoted keys, single-quoted
/// strings and trailing commas.
pub const RELAXED_LAYOUT: &str = r#"{name: 'Relaxed'},
["A", {w: 2}, 'B'],
["C",],"#;

/// A double-width spacebar with three front legends.
pub const SPACEBAR_LAYOUT: &str =
    "[[{\"w\":2},\"Spacebar\\n\\n\\n\\n\\n\\nLeft\\nCenter\\nRight\"]]";

/// Writes content to a file inside a fresh temp directory.
///
/// Returns the file path and the directory guard, which must be kept alive.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    (path, temp_dir)
}

/// Builds a single-row document with `count` plain labels.
pub fn single_row_document(count: usize) -> String {
    let labels: Vec<String> = (0..count).map(|i| format!("\"K{i}\"")).collect();
    format!("[[{}]]", labels.join(","))
}
