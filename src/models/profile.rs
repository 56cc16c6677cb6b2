//! Keycap profile parsed from the `p` property.
//!
//! The legacy format overloads a single string with two things: the cap
//! family (e.g. "DCS", "SA") and a row-position tag (e.g. "R1", "SPACE").
//! Either part may be missing, and producers in the wild write both orders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known keycap families.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CapFamily {
    /// Cherry-made DCS
    Dcs,
    /// Signature Plastics DSA
    Dsa,
    /// Signature Plastics SA
    Sa,
    /// Generic OEM
    Oem,
    /// Cherry profile
    Cherry,
    /// XDA
    Xda,
    /// MT3
    Mt3,
    /// KAT
    Kat,
    /// Laptop-style chicklet
    Chicklet,
    /// Flat-topped caps
    Flat,
    /// Any other family name, kept verbatim
    Other(String),
}

impl CapFamily {
    fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "DCS" => Self::Dcs,
            "DSA" => Self::Dsa,
            "SA" => Self::Sa,
            "OEM" => Self::Oem,
            "CHERRY" => Self::Cherry,
            "XDA" => Self::Xda,
            "MT3" => Self::Mt3,
            "KAT" => Self::Kat,
            "CHICKLET" => Self::Chicklet,
            "FLAT" => Self::Flat,
            _ => Self::Other(token.to_string()),
        }
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dcs => "DCS",
            Self::Dsa => "DSA",
            Self::Sa => "SA",
            Self::Oem => "OEM",
            Self::Cherry => "CHERRY",
            Self::Xda => "XDA",
            Self::Mt3 => "MT3",
            Self::Kat => "KAT",
            Self::Chicklet => "CHICKLET",
            Self::Flat => "FLAT",
            Self::Other(name) => name,
        }
    }
}

/// Row position tag within a sculpted profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTag {
    /// Numbered row (R1 is the function row side)
    Row(u8),
    /// Spacebar row
    Space,
}

impl RowTag {
    fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        if upper == "SPACE" {
            return Some(Self::Space);
        }
        let digits = upper.strip_prefix('R')?;
        let row: u8 = digits.parse().ok()?;
        (1..=5).contains(&row).then_some(Self::Row(row))
    }
}

impl fmt::Display for RowTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(n) => write!(f, "R{n}"),
            Self::Space => f.write_str("SPACE"),
        }
    }
}

/// A keycap profile: family and/or row tag.
///
/// Serializes back to the exact string it was parsed from so that re-imports
/// never alter what the producer wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Profile {
    raw: String,
    family: Option<CapFamily>,
    row: Option<RowTag>,
}

impl Profile {
    /// The string exactly as written in the layout.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The cap family, if the string named one.
    pub const fn family(&self) -> Option<&CapFamily> {
        self.family.as_ref()
    }

    /// The row-position tag, if the string carried one.
    pub const fn row(&self) -> Option<RowTag> {
        self.row
    }
}

impl FromStr for Profile {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut family = None;
        let mut row = None;
        let mut rest: Vec<&str> = Vec::new();

        for token in s.split_whitespace() {
            if row.is_none() {
                if let Some(tag) = RowTag::from_token(token) {
                    row = Some(tag);
                    continue;
                }
            }
            rest.push(token);
        }
        if !rest.is_empty() {
            family = Some(CapFamily::from_token(&rest.join(" ")));
        }

        Ok(Self {
            raw: s.to_string(),
            family,
            row,
        })
    }
}

impl From<String> for Profile {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(profile) => profile,
            Err(never) => match never {},
        }
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.raw
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
