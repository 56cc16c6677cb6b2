//! Data models for normalized keyboard layouts.
//!
//! This module contains the structures produced by the importer and consumed by
//! renderers, serializers and persistence. Models are independent of parsing.

pub mod key;
pub mod layout;
pub mod profile;

// Re-export all model types
pub use key::{Key, KeyDefaults, Rotation, SecondaryRect, SwitchInfo};
pub use layout::{Background, LayoutMetadata, NormalizedLayout};
pub use profile::{CapFamily, Profile, RowTag};
