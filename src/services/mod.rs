//! Service layer for file-level operations.
//!
//! This module wraps the pure parser with the file I/O and error context that
//! the command-line interface and embedding applications need.

pub mod layouts;

// Re-export commonly used types and functions
pub use layouts::LayoutService;
