//! Configuration management for the command-line tool.
//!
//! This module handles loading and saving the importer configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_BINARY_NAME;
use crate::parser::{HomingNubType, ImportOptions};

/// Legacy import settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImportConfig {
    /// Marker synthesized for homing keys that carry no explicit marker
    pub homing_nub_type: HomingNubType,
}

/// Normalized output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print normalized JSON
    pub pretty: bool,
}

/// Application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Import settings
    pub import: ImportConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/kbdlayout/`
    /// - macOS: `~/Library/Application Support/kbdlayout/`
    /// - Windows: `%APPDATA%\kbdlayout\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config.toml file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    /// Saves configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).with_context(|| {
                format!("Failed to create config directory: {}", config_dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, config_path).with_context(|| {
            format!("Failed to rename temp config file to: {}", config_path.display())
        })?;

        Ok(())
    }

    /// Import options derived from this configuration.
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::with_homing(self.import.homing_nub_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.import.homing_nub_type, HomingNubType::Scoop);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_config_dir_ends_with_binary_name() {
        if let Ok(dir) = Config::config_dir() {
            assert!(dir.ends_with(APP_BINARY_NAME));
        }
    }

    #[test]
    fn test_config_load_missing_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.import.homing_nub_type = HomingNubType::Bar;
        config.output.pretty = true;
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[output]\npretty = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.output.pretty);
        assert_eq!(config.import.homing_nub_type, HomingNubType::Scoop);
    }

    #[test]
    fn test_config_parses_homing_names() {
        let config: Config = toml::from_str("[import]\nhoming_nub_type = \"none\"\n").unwrap();
        assert_eq!(config.import.homing_nub_type, HomingNubType::None);
        assert_eq!(
            config.import_options().homing_nub_type,
            HomingNubType::None
        );
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[import\n").unwrap();

        let message = format!("{:#}", Config::load_from(&path).unwrap_err());
        assert!(message.contains("Failed to parse config file"));
    }
}
