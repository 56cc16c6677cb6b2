//! kbdlayout Library
//!
//! This library imports keyboard layouts written in the legacy
//! keyboard-layout-editor JSON format and converts them into a normalized
//! layout model with absolute key positions, classified legends and icon
//! metadata.
//!
//! # Example
//!
//! ```
//! use kbdlayout::parser::{parse_legacy_layout, ImportOptions};
//!
//! let layout = parse_legacy_layout(r#"[["Esc",{"x":1},"F1"]]"#, &ImportOptions::default())?;
//! assert_eq!(layout.keys[1].x, 2.0);
//! # Ok::<(), kbdlayout::Error>(())
//! ```

// Module declarations
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;

// Re-export commonly used types
pub use error::{Error, FormatError, Result};
pub use models::{Key, LayoutMetadata, NormalizedLayout};
pub use parser::{
    detect_format, import_layout, parse_legacy_layout, HomingNubType, ImportOptions, LayoutFormat,
};
