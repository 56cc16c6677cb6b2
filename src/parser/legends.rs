//! Legend slot classification.
//!
//! A label string carries up to 12 newline-separated slots whose meaning is
//! fixed by position:
//!
//! | slot  | meaning                                                    |
//! |-------|------------------------------------------------------------|
//! | 0-3   | corner / top primary legends                               |
//! | 4     | front-left                                                 |
//! | 5     | primary center, or front-center when the front row is used |
//! | 6     | front-right                                                |
//! | 8 (9) | secondary center legend                                    |
//! | 9-11  | spacebar-style front legends on wide keys                  |
//!
//! Every non-empty slot ends up in exactly one of `labels`, `front_legends`
//! or `center_legend`. Slots that move out of `labels` are blanked there, so
//! `labels` keeps the length of the original split.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{FRONT_LEGEND_SLOTS, WIDE_KEY_WIDTH};

/// Front-left slot.
const FRONT_LEFT_SLOT: usize = 4;
/// Ambiguous center / front-center slot.
const CENTER_SLOT: usize = 5;
/// Front-right slot.
const FRONT_RIGHT_SLOT: usize = 6;
/// Secondary center legend slots, in priority order.
const CENTER_LEGEND_SLOTS: [usize; 2] = [8, 9];
/// First slot of the spacebar front triple on a full-length label.
const WIDE_FRONT_SLOT: usize = 9;

/// Front-center position in `front_legends`.
const FRONT_CENTER: usize = 1;

/// Size annotations such as `1.25u` written into a front slot.
static SIZE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+(?:\.\d+)?\s*[uU]\s*$").expect("size pattern is valid"));

/// Homing marker words.
static HOMING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(scoop|bar)\b").expect("homing pattern is valid"));

/// Style of homing nub synthesized for `nub` keys that carry no marker text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum HomingNubType {
    /// Scooped (dished deeper) homing cap
    #[default]
    Scoop,
    /// Raised bar
    Bar,
    /// Do not synthesize a legend
    None,
}

impl HomingNubType {
    /// Front-center legend to synthesize, if any.
    pub const fn legend(self) -> Option<&'static str> {
        match self {
            Self::Scoop => Some("Scoop"),
            Self::Bar => Some("Bar"),
            Self::None => None,
        }
    }
}

impl FromStr for HomingNubType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scoop" => Ok(Self::Scoop),
            "bar" => Ok(Self::Bar),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown homing nub type '{other}' (expected scoop, bar or none)"
            )),
        }
    }
}

impl fmt::Display for HomingNubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scoop => "scoop",
            Self::Bar => "bar",
            Self::None => "none",
        })
    }
}

/// Result of classifying one key's legend slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLegends {
    /// Primary legends; consumed slots are blank
    pub labels: Vec<String>,
    /// Front legends (left, center, right)
    pub front: [String; FRONT_LEGEND_SLOTS],
    /// Secondary center legend
    pub center_legend: Option<String>,
    /// Label slot each front legend was taken from
    front_sources: [Option<usize>; FRONT_LEGEND_SLOTS],
}

impl ClassifiedLegends {
    fn unclassified(slots: &[String]) -> Self {
        Self {
            labels: slots.to_vec(),
            front: Default::default(),
            center_legend: None,
            front_sources: [None; FRONT_LEGEND_SLOTS],
        }
    }

    /// Front legends, or `None` when all three are empty.
    pub fn front_legends(&self) -> Option<[String; FRONT_LEGEND_SLOTS]> {
        self.front
            .iter()
            .any(|s| !s.is_empty())
            .then(|| self.front.clone())
    }

    fn slot(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", String::as_str)
    }

    fn is_filled(&self, index: usize) -> bool {
        !self.slot(index).is_empty()
    }

    /// Moves label slot `index` into front position `position`.
    fn move_to_front(&mut self, index: usize, position: usize) {
        if let Some(text) = self.labels.get_mut(index) {
            self.front[position] = std::mem::take(text);
            self.front_sources[position] = Some(index);
        }
    }
}

/// Separates primary labels from front and center legends.
pub fn classify(slots: &[String], width: f64, decal: bool) -> ClassifiedLegends {
    let mut legends = ClassifiedLegends::unclassified(slots);
    if decal {
        return legends;
    }

    let left = legends.slot(FRONT_LEFT_SLOT);
    let genuine_left = !left.is_empty() && !SIZE_TOKEN.is_match(left);
    let left_filled = !left.is_empty();
    let center_filled = legends.is_filled(CENTER_SLOT);
    let right_filled = legends.is_filled(FRONT_RIGHT_SLOT);
    let center_is_front = center_filled && (genuine_left || right_filled);

    let wide_start = wide_front_start(legends.labels.len(), width, left_filled, center_filled);

    if left_filled {
        legends.move_to_front(FRONT_LEFT_SLOT, 0);
    }
    if center_is_front {
        legends.move_to_front(CENTER_SLOT, FRONT_CENTER);
    }
    if right_filled && wide_start != Some(FRONT_RIGHT_SLOT) {
        legends.move_to_front(FRONT_RIGHT_SLOT, 2);
    }

    if let Some(start) = wide_start {
        for position in 0..FRONT_LEGEND_SLOTS {
            let index = start + position;
            if legends.front[position].is_empty() && legends.is_filled(index) {
                legends.move_to_front(index, position);
            }
        }
    }

    if let Some(index) = CENTER_LEGEND_SLOTS
        .into_iter()
        .find(|&index| legends.is_filled(index))
    {
        legends.center_legend = Some(std::mem::take(&mut legends.labels[index]));
    }

    legends
}

/// First slot of the spacebar front triple, if the wide-key rule applies.
///
/// A full-length label uses slots 9-11. A shorter label written for a
/// spacebar ends in its front triple instead, so the last three slots are
/// used, but only when the regular front slots are empty and never before
/// slot 6.
fn wide_front_start(
    len: usize,
    width: f64,
    left_filled: bool,
    center_filled: bool,
) -> Option<usize> {
    if width < WIDE_KEY_WIDTH || len <= FRONT_RIGHT_SLOT + 2 {
        return None;
    }
    let start = (len - FRONT_LEGEND_SLOTS).clamp(FRONT_RIGHT_SLOT, WIDE_FRONT_SLOT);
    (start == WIDE_FRONT_SLOT || (!left_filled && !center_filled)).then_some(start)
}

/// Resolves homing-nub markers into the front-center legend.
///
/// The first marker word ("SCOOP", "BAR", any case, whole word) found in a
/// front legend or a primary label is stripped from its slot and written to
/// front-center as "Scoop" or "Bar". Front legends are searched first, then
/// labels in slot order. On a key without `nub`, a label only counts when the
/// marker is the entire slot, so a "Space Bar" legend is left alone. Later
/// markers stay where they are. Any other text that occupied front-center goes
/// back to the label slot it came from. A `nub` key with no marker gets one
/// synthesized from `homing`.
pub fn resolve_homing(legends: &mut ClassifiedLegends, nub: bool, homing: HomingNubType) {
    let mut found: Option<&'static str> = None;

    for position in 0..FRONT_LEGEND_SLOTS {
        if let Some((marker, rest)) = strip_marker(&legends.front[position]) {
            legends.front[position] = rest;
            if legends.front[position].is_empty() {
                legends.front_sources[position] = None;
            }
            found = Some(marker);
            break;
        }
    }

    if found.is_none() {
        for label in &mut legends.labels {
            let stripped = if nub {
                strip_marker(label)
            } else {
                whole_slot_marker(label).map(|marker| (marker, String::new()))
            };
            if let Some((marker, rest)) = stripped {
                *label = rest;
                found = Some(marker);
                break;
            }
        }
    }

    let marker = match found {
        Some(marker) => marker,
        None if nub => match homing.legend() {
            Some(marker) => marker,
            None => return,
        },
        None => return,
    };

    let displaced = std::mem::take(&mut legends.front[FRONT_CENTER]);
    if !displaced.is_empty() && displaced != marker {
        restore_displaced(legends, displaced);
    }
    legends.front[FRONT_CENTER] = marker.to_string();
    legends.front_sources[FRONT_CENTER] = None;
}

/// Puts text pushed out of front-center back where it came from.
fn restore_displaced(legends: &mut ClassifiedLegends, text: String) {
    let source = legends.front_sources[FRONT_CENTER]
        .filter(|&index| legends.labels.get(index).is_some_and(String::is_empty));
    if let Some(index) = source {
        legends.labels[index] = text;
        return;
    }

    // The source slot was refilled; keep the text somewhere visible.
    if let Some(position) = [0, 2]
        .into_iter()
        .find(|&position| legends.front[position].is_empty())
    {
        legends.front[position] = text;
    } else if let Some(slot) = legends.labels.iter_mut().find(|s| s.is_empty()) {
        *slot = text;
    } else {
        legends.labels.push(text);
    }
}

/// Normalized marker name for a matched marker word.
fn marker_name(word: &str) -> &'static str {
    if word.eq_ignore_ascii_case("scoop") {
        "Scoop"
    } else {
        "Bar"
    }
}

/// Removes the first marker word from `text`, returning the normalized marker
/// and the rest.
///
/// Only spaces and tabs next to the marker are dropped; the rest of the text,
/// line breaks included, is kept as written.
fn strip_marker(text: &str) -> Option<(&'static str, String)> {
    let found = HOMING_MARKER.find(text)?;
    let before = text[..found.start()].trim_end_matches([' ', '\t']);
    let after = text[found.end()..].trim_start_matches([' ', '\t']);
    let joiner = if before.is_empty()
        || after.is_empty()
        || before.ends_with('\n')
        || after.starts_with('\n')
    {
        ""
    } else {
        " "
    };
    Some((marker_name(found.as_str()), format!("{before}{joiner}{after}")))
}

/// The marker named by a slot that holds nothing but one marker word.
fn whole_slot_marker(text: &str) -> Option<&'static str> {
    let word = text.trim();
    HOMING_MARKER
        .find(word)
        .filter(|m| m.start() == 0 && m.end() == word.len())
        .map(|m| marker_name(m.as_str()))
}
