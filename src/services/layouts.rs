//! Layout file I/O service.
//!
//! This module centralizes reading layout files from disk and writing
//! normalized layouts back, so the CLI and embedding applications share the
//! same error messages and write semantics. The parser itself never touches
//! the filesystem.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::NormalizedLayout;
use crate::parser::{self, ImportOptions};

/// Service for layout file operations.
pub struct LayoutService;

impl LayoutService {
    /// Imports a layout file in either the legacy or the normalized format.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the layout file
    /// * `options` - Import options (homing nub style)
    ///
    /// # Returns
    ///
    /// * `Ok(NormalizedLayout)` - Successfully imported layout
    /// * `Err(...)` - File not found, I/O error, or invalid layout file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use kbdlayout::parser::ImportOptions;
    /// use kbdlayout::services::LayoutService;
    ///
    /// let layout = LayoutService::load(Path::new("tkl.json"), &ImportOptions::default())?;
    /// println!("{} keys", layout.key_count());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path, options: &ImportOptions) -> Result<NormalizedLayout> {
        if !path.is_file() {
            anyhow::bail!("Layout file not found: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

        let layout = parser::import_layout(&content, options)
            .with_context(|| format!("Invalid layout file: {}", path.display()))?;

        info!(
            path = %path.display(),
            keys = layout.key_count(),
            "imported layout"
        );
        Ok(layout)
    }

    /// Saves a layout as normalized JSON.
    ///
    /// This performs an atomic write using a temp file + rename pattern to ensure
    /// the file is never left in a corrupted state.
    pub fn save(layout: &NormalizedLayout, path: &Path, pretty: bool) -> Result<()> {
        let json = parser::to_normalized_json(layout, pretty)
            .context("Failed to serialize normalized layout")?;
        atomic_write(path, &json)
            .with_context(|| format!("Failed to save layout to {}", path.display()))
    }

    /// Default output path for an imported file: same stem, `.layout.json`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::{Path, PathBuf};
    /// # use kbdlayout::services::LayoutService;
    /// assert_eq!(
    ///     LayoutService::default_output_path(Path::new("boards/tkl.json")),
    ///     PathBuf::from("boards/tkl.layout.json")
    /// );
    /// ```
    pub fn default_output_path(input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map_or_else(|| "layout".into(), |s| s.to_string_lossy().into_owned());
        input.with_file_name(format!("{stem}.layout.json"))
    }
}

/// Performs an atomic file write using temp file + rename pattern.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_legacy_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("board.json");
        fs::write(&path, r#"[{"name":"Board"},["Q","W","E"]]"#)?;

        let layout = LayoutService::load(&path, &ImportOptions::default())?;
        assert_eq!(layout.key_count(), 3);
        assert_eq!(layout.metadata.name.as_deref(), Some("Board"));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = LayoutService::load(
            Path::new("/nonexistent/kbdlayout/board.json"),
            &ImportOptions::default(),
        );
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_load_invalid_file_mentions_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "oops")?;

        let message = format!("{:#}", LayoutService::load(&path, &ImportOptions::default()).unwrap_err());
        assert!(message.contains("Invalid layout file"));
        assert!(message.contains("not array/object"));
        Ok(())
    }

    #[test]
    fn test_save_then_load_normalized() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let source = temp_dir.path().join("board.json");
        fs::write(&source, r#"[[{"w":2},"Backspace"]]"#)?;
        let layout = LayoutService::load(&source, &ImportOptions::default())?;

        let output = LayoutService::default_output_path(&source);
        LayoutService::save(&layout, &output, true)?;
        assert!(!output.with_extension("json.tmp").exists());

        let reloaded = LayoutService::load(&output, &ImportOptions::default())?;
        assert_eq!(reloaded, layout);
        Ok(())
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            LayoutService::default_output_path(Path::new("a/b.json")),
            PathBuf::from("a/b.layout.json")
        );
        assert_eq!(
            LayoutService::default_output_path(Path::new("raw.txt")),
            PathBuf::from("raw.layout.json")
        );
    }
}
