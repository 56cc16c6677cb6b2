//! CLI command handlers for kbdlayout.
//!
//! This module provides headless, scriptable access to the importer
//! for automation and conversion pipelines.

pub mod common;
pub mod icons;
pub mod import;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use icons::IconsArgs;
pub use import::ImportArgs;
pub use inspect::{InspectArgs, LayoutSummary};
