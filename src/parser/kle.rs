//! Row/key interpreter for the legacy layout format.
//!
//! Walks the rows of a [`RawLayoutDocument`] with a single [`ParseCursor`].
//! Property objects mutate the cursor; every label string snapshots it into
//! one [`Key`] and then resets the per-key fields.
//!
//! # Cursor lifetime
//!
//! | field                               | lifetime                          |
//! |-------------------------------------|-----------------------------------|
//! | x, y, row baseline                  | positional, advanced by the walk  |
//! | rotation angle/origin, origin carry | until overwritten (`r = 0` clears the carry) |
//! | color, profile, ghost, defaults, switch | sticky for the rest of the document |
//! | size, secondary rect, nub, stepped, decal, align, per-slot text | next key only |
//!
//! The interpreter never fails: malformed rows are skipped, and fields with
//! unusable values keep the cursor's last value.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::constants::{DEFAULT_KEY_COLOR, ICON_TEXT_SIZE, MAX_LEGEND_SLOTS};
use crate::models::{
    Background, Key, KeyDefaults, LayoutMetadata, NormalizedLayout, Profile, Rotation,
    SecondaryRect, SwitchInfo,
};
use crate::parser::icons::has_recognized_icons;
use crate::parser::legends::{classify, resolve_homing, HomingNubType};
use crate::parser::raw::{RawLayoutDocument, RawRow, RowItem};

/// Options for one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Front-center legend synthesized for homing keys without marker text
    pub homing_nub_type: HomingNubType,
}

impl ImportOptions {
    /// Options with the given homing nub style.
    pub const fn with_homing(homing_nub_type: HomingNubType) -> Self {
        Self { homing_nub_type }
    }
}

/// Running interpretation state, owned by one [`interpret_document`] call.
#[derive(Debug, Clone)]
struct ParseCursor {
    x: f64,
    y: f64,
    /// Y at which the current row began
    row_start_y: f64,
    /// Rotation origin X that row resets return to, until `r = 0`
    origin_carry: Option<f64>,

    width: f64,
    height: f64,
    x2: f64,
    y2: f64,
    width2: Option<f64>,
    height2: Option<f64>,

    rotation_angle: f64,
    rotation_x: f64,
    rotation_y: f64,

    color: String,
    text_color: Vec<Option<String>>,
    text_size: Vec<Option<f64>>,
    default: KeyDefaults,
    profile: Option<Profile>,
    switch: SwitchInfo,
    ghost: bool,

    nub: bool,
    stepped: bool,
    decal: bool,
    align: u8,
}

impl Default for ParseCursor {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            row_start_y: 0.0,
            origin_carry: None,
            width: 1.0,
            height: 1.0,
            x2: 0.0,
            y2: 0.0,
            width2: None,
            height2: None,
            rotation_angle: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            color: DEFAULT_KEY_COLOR.to_string(),
            text_color: Vec::new(),
            text_size: Vec::new(),
            default: KeyDefaults::default(),
            profile: None,
            switch: SwitchInfo::default(),
            ghost: false,
            nub: false,
            stepped: false,
            decal: false,
            align: 0,
        }
    }
}

impl ParseCursor {
    /// Positions the cursor at the start of a row.
    fn begin_row(&mut self, first: bool) {
        if !first {
            // Rows stack at unit intervals regardless of key heights.
            self.row_start_y = self.y + 1.0;
        }
        self.y = self.row_start_y;
        self.x = self.origin_carry.unwrap_or(0.0);
    }

    fn apply(&mut self, props: &Map<String, Value>) {
        // Rotation re-anchors before any relative offset in the same object.
        if let Some(rx) = number(props, "rx") {
            self.rotation_x = rx;
            self.x = rx;
            self.origin_carry = Some(rx);
        }
        if let Some(ry) = number(props, "ry") {
            self.rotation_y = ry;
            self.y = ry;
            self.row_start_y = ry;
        }
        if let Some(r) = number(props, "r") {
            self.rotation_angle = r;
            if r == 0.0 {
                self.origin_carry = None;
            }
        }

        if let Some(a) = number(props, "a") {
            self.align = a.clamp(0.0, 7.0) as u8;
        }

        match props.get("f") {
            Some(Value::Array(sizes)) => self.text_size = per_slot_numbers(sizes),
            Some(value) => {
                if let Some(size) = as_number(value) {
                    self.default.text_size = Some(size);
                    self.text_size.clear();
                } else {
                    ignored("f", value);
                }
            }
            None => {}
        }
        match props.get("f2") {
            Some(Value::Array(sizes)) => self.text_size = per_slot_numbers(sizes),
            Some(value) => {
                if let Some(size) = as_number(value) {
                    self.text_size.resize(MAX_LEGEND_SLOTS, None);
                    for slot in &mut self.text_size[1..] {
                        *slot = Some(size);
                    }
                } else {
                    ignored("f2", value);
                }
            }
            None => {}
        }
        match props.get("fa") {
            Some(Value::Array(sizes)) => self.text_size = per_slot_numbers(sizes),
            Some(value) => ignored("fa", value),
            None => {}
        }

        if let Some(p) = string(props, "p") {
            self.profile = (!p.trim().is_empty()).then(|| Profile::from(p.to_string()));
        }
        if let Some(c) = string(props, "c") {
            self.color = c.to_string();
        }
        match props.get("t") {
            Some(Value::String(colors)) => {
                let parts: Vec<&str> = colors.split('\n').collect();
                if let Some(first) = parts.first().filter(|s| !s.is_empty()) {
                    self.default.text_color = Some((*first).to_string());
                }
                if parts.len() > 1 {
                    self.text_color = parts
                        .iter()
                        .map(|s| (!s.is_empty()).then(|| (*s).to_string()))
                        .collect();
                }
            }
            Some(Value::Array(colors)) => {
                self.text_color = colors
                    .iter()
                    .map(|c| c.as_str().filter(|s| !s.is_empty()).map(String::from))
                    .collect();
            }
            Some(value) => ignored("t", value),
            None => {}
        }

        if let Some(x) = number(props, "x") {
            self.x += x;
        }
        if let Some(y) = number(props, "y") {
            self.y += y;
        }
        if let Some(w) = positive(props, "w") {
            self.width = w;
            self.width2 = None;
        }
        if let Some(h) = positive(props, "h") {
            self.height = h;
            self.height2 = None;
        }
        if let Some(x2) = number(props, "x2") {
            self.x2 = x2;
        }
        if let Some(y2) = number(props, "y2") {
            self.y2 = y2;
        }
        if let Some(w2) = positive(props, "w2") {
            self.width2 = Some(w2);
        }
        if let Some(h2) = positive(props, "h2") {
            self.height2 = Some(h2);
        }

        if let Some(g) = flag(props, "g") {
            self.ghost = g;
        }
        if let Some(n) = flag(props, "n") {
            self.nub = n;
        }
        if let Some(l) = flag(props, "l") {
            self.stepped = l;
        }
        if let Some(d) = flag(props, "d") {
            self.decal = d;
        }

        if let Some(sm) = string(props, "sm") {
            self.switch.mount = Some(sm.to_string());
        }
        if let Some(sb) = string(props, "sb") {
            self.switch.brand = Some(sb.to_string());
        }
        if let Some(st) = string(props, "st") {
            self.switch.kind = Some(st.to_string());
        }
    }

    /// Clears the fields that only apply to the key just emitted.
    fn reset_per_key(&mut self) {
        self.width = 1.0;
        self.height = 1.0;
        self.x2 = 0.0;
        self.y2 = 0.0;
        self.width2 = None;
        self.height2 = None;
        self.nub = false;
        self.stepped = false;
        self.decal = false;
        self.align = 0;
        self.text_color.clear();
        self.text_size.clear();
    }

    fn secondary_rect(&self) -> Option<SecondaryRect> {
        let width2 = self.width2.unwrap_or(self.width);
        let height2 = self.height2.unwrap_or(self.height);
        let differs = self.x2 != 0.0
            || self.y2 != 0.0
            || width2 != self.width
            || height2 != self.height;
        differs.then_some(SecondaryRect {
            x2: self.x2,
            y2: self.y2,
            width2,
            height2,
        })
    }

    fn rotation(&self) -> Option<Rotation> {
        (self.rotation_angle != 0.0).then_some(Rotation {
            angle: self.rotation_angle,
            origin_x: self.rotation_x,
            origin_y: self.rotation_y,
        })
    }
}

/// Interprets a raw document into a normalized layout.
pub fn interpret_document(doc: &RawLayoutDocument, options: &ImportOptions) -> NormalizedLayout {
    let metadata = doc
        .metadata
        .as_ref()
        .map(metadata_from_object)
        .unwrap_or_default();

    let mut cursor = ParseCursor::default();
    let mut keys = Vec::with_capacity(doc.label_count());
    let mut first_row = true;

    for (row_index, row) in doc.rows.iter().enumerate() {
        let items = match row {
            RawRow::Items(items) => items,
            RawRow::Malformed(value) => {
                debug!(row = row_index, value = %value, "skipping malformed row");
                continue;
            }
        };

        cursor.begin_row(first_row);
        first_row = false;

        for (item_index, item) in items.iter().enumerate() {
            match item {
                RowItem::Properties(props) => {
                    if item_index != 0 && ["r", "rx", "ry"].iter().any(|k| props.contains_key(*k))
                    {
                        warn!(
                            row = row_index,
                            item = item_index,
                            "rotation set after the first item of a row"
                        );
                    }
                    cursor.apply(props);
                }
                RowItem::Label(label) => {
                    keys.push(emit_key(&cursor, label, options));
                    cursor.x += cursor.width;
                    cursor.reset_per_key();
                }
                RowItem::Unknown(value) => {
                    debug!(row = row_index, item = item_index, value = %value, "skipping unknown row item");
                }
            }
        }
    }

    NormalizedLayout { metadata, keys }
}

/// Snapshots the cursor into one key.
fn emit_key(cursor: &ParseCursor, label: &str, options: &ImportOptions) -> Key {
    let slots = split_label(label);

    let mut text_size = cursor.text_size.clone();
    for (index, slot) in slots.iter().enumerate() {
        if slot.is_empty() || !has_recognized_icons(slot) {
            continue;
        }
        if text_size.len() <= index {
            text_size.resize(index + 1, None);
        }
        text_size[index].get_or_insert(ICON_TEXT_SIZE);
    }

    let mut legends = classify(&slots, cursor.width, cursor.decal);
    if !cursor.decal {
        resolve_homing(&mut legends, cursor.nub, options.homing_nub_type);
    }

    Key {
        x: cursor.x,
        y: cursor.y,
        width: cursor.width,
        height: cursor.height,
        secondary: cursor.secondary_rect(),
        rotation: cursor.rotation(),
        front_legends: legends.front_legends(),
        center_legend: legends.center_legend,
        labels: legends.labels,
        text_color: trim_trailing_none(cursor.text_color.clone()),
        text_size: trim_trailing_none(text_size),
        default: cursor.default.clone(),
        color: cursor.color.clone(),
        profile: cursor.profile.clone(),
        nub: cursor.nub,
        ghost: cursor.ghost,
        stepped: cursor.stepped,
        decal: cursor.decal,
        align: cursor.align,
        switch: (!cursor.switch.is_empty()).then(|| cursor.switch.clone()),
        ..Key::new(cursor.x, cursor.y)
    }
}

/// Splits a label into at most 12 slots; overflow folds into the last slot.
fn split_label(label: &str) -> Vec<String> {
    let mut slots: Vec<String> = label.split('\n').map(String::from).collect();
    if slots.len() > MAX_LEGEND_SLOTS {
        let overflow = slots.split_off(MAX_LEGEND_SLOTS);
        let last = &mut slots[MAX_LEGEND_SLOTS - 1];
        for extra in overflow {
            last.push('\n');
            last.push_str(&extra);
        }
    }
    slots
}

fn trim_trailing_none<T>(mut values: Vec<Option<T>>) -> Vec<Option<T>> {
    while matches!(values.last(), Some(None)) {
        values.pop();
    }
    values
}

/// Builds metadata from the leading object; mistyped fields land in `extra`.
pub fn metadata_from_object(object: &Map<String, Value>) -> LayoutMetadata {
    let mut metadata = LayoutMetadata::default();

    for (key, value) in object {
        let accepted = match key.as_str() {
            "name" => set_string(&mut metadata.name, value),
            "author" => set_string(&mut metadata.author, value),
            "notes" => set_string(&mut metadata.notes, value),
            "backcolor" => set_string(&mut metadata.backcolor, value),
            "radii" => set_string(&mut metadata.radii, value),
            "switchMount" => set_string(&mut metadata.switch_mount, value),
            "switchBrand" => set_string(&mut metadata.switch_brand, value),
            "switchType" => set_string(&mut metadata.switch_type, value),
            "css" => set_string(&mut metadata.css, value),
            "plate" => set_bool(&mut metadata.plate, value),
            "pcb" => set_bool(&mut metadata.pcb, value),
            "background" => match value {
                Value::Object(background) => {
                    metadata.background = Some(Background {
                        name: background.get("name").and_then(Value::as_str).map(String::from),
                        style: background
                            .get("style")
                            .and_then(Value::as_str)
                            .map(String::from),
                    });
                    true
                }
                _ => false,
            },
            _ => false,
        };
        if !accepted {
            metadata.extra.insert(key.clone(), value.clone());
        }
    }

    metadata
}

fn set_string(field: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::String(s) => {
            *field = Some(s.clone());
            true
        }
        _ => false,
    }
}

fn set_bool(field: &mut Option<bool>, value: &Value) -> bool {
    match as_flag(value) {
        Some(b) => {
            *field = Some(b);
            true
        }
        None => false,
    }
}

fn ignored(field: &str, value: &Value) {
    debug!(field, value = %value, "ignoring property with unusable value");
}

/// Numbers, and numeric strings written by some producers.
fn as_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|n: &f64| n.is_finite())
}

fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        _ => None,
    }
}

fn number(props: &Map<String, Value>, field: &str) -> Option<f64> {
    let value = props.get(field)?;
    let parsed = as_number(value);
    if parsed.is_none() {
        ignored(field, value);
    }
    parsed
}

fn positive(props: &Map<String, Value>, field: &str) -> Option<f64> {
    number(props, field).filter(|n| {
        let ok = *n > 0.0;
        if !ok {
            debug!(field, value = n, "ignoring non-positive size");
        }
        ok
    })
}

fn flag(props: &Map<String, Value>, field: &str) -> Option<bool> {
    let value = props.get(field)?;
    let parsed = as_flag(value);
    if parsed.is_none() {
        ignored(field, value);
    }
    parsed
}

fn string<'a>(props: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    let value = props.get(field)?;
    let parsed = value.as_str();
    if parsed.is_none() {
        ignored(field, value);
    }
    parsed
}

fn per_slot_numbers(values: &[Value]) -> Vec<Option<f64>> {
    values
        .iter()
        .take(MAX_LEGEND_SLOTS)
        .map(|v| as_number(v).filter(|n| *n > 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::raw::parse_raw_document;

    fn import(text: &str) -> NormalizedLayout {
        let doc = parse_raw_document(text).unwrap();
        interpret_document(&doc, &ImportOptions::default())
    }

    fn positions(layout: &NormalizedLayout) -> Vec<(f64, f64)> {
        layout.keys.iter().map(|k| (k.x, k.y)).collect()
    }

    #[test]
    fn test_keys_advance_along_row() {
        let layout = import(r#"[["A","B","C","D"]]"#);
        assert_eq!(
            positions(&layout),
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]
        );
        assert!(layout.keys.iter().all(|k| k.width == 1.0 && k.height == 1.0));
    }

    #[test]
    fn test_row_baseline_ignores_key_height() {
        let layout = import(r#"[[{"h":2},"Tall"],["Next"]]"#);
        assert_eq!(layout.keys[0].height, 2.0);
        assert_eq!(layout.keys[1].y, 1.0);
    }

    #[test]
    fn test_width_resets_after_key() {
        let layout = import(r#"[[{"w":1.5},"Tab","Q"]]"#);
        assert_eq!(layout.keys[0].width, 1.5);
        assert_eq!(layout.keys[1].x, 1.5);
        assert_eq!(layout.keys[1].width, 1.0);
    }

    #[test]
    fn test_offsets_accumulate() {
        let layout = import(r#"[["Esc",{"x":1},"F1"],[{"y":0.5},"~"],["Tab"]]"#);
        assert_eq!(
            positions(&layout),
            vec![(0.0, 0.0), (2.0, 0.0), (0.0, 1.5), (0.0, 2.5)]
        );
    }

    #[test]
    fn test_empty_row_still_advances() {
        let layout = import(r#"[["A"],[],["B"]]"#);
        assert_eq!(layout.keys.len(), 2);
        assert_eq!(layout.keys[1].y, 2.0);
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let layout = import(r#"[["A"], 5, ["B"]]"#);
        assert_eq!(layout.keys.len(), 2);
        assert_eq!(layout.keys[1].y, 1.0);
    }

    #[test]
    fn test_rotation_origin_carries_to_next_row() {
        let layout = import(r#"[[{"rx":5,"r":45},"A"],["B"],[{"r":0},"C"],["D"]]"#);
        let a = &layout.keys[0];
        assert_eq!((a.x, a.y), (5.0, 0.0));
        let rotation = a.rotation.unwrap();
        assert_eq!(rotation.angle, 45.0);
        assert_eq!(rotation.origin_x, 5.0);

        assert_eq!(layout.keys[1].x, 5.0);
        assert_eq!(layout.keys[2].x, 5.0);
        assert!(layout.keys[2].rotation.is_none());
        assert_eq!(layout.keys[3].x, 0.0);
    }

    #[test]
    fn test_rotation_anchor_applies_before_offsets() {
        let layout = import(r#"[[{"r":15,"rx":2,"ry":3,"x":0.5,"y":0.25},"A"],["B"]]"#);
        let a = &layout.keys[0];
        assert_eq!((a.x, a.y), (2.5, 3.25));
        assert_eq!(
            a.rotation,
            Some(Rotation {
                angle: 15.0,
                origin_x: 2.0,
                origin_y: 3.0
            })
        );
        let b = &layout.keys[1];
        assert_eq!((b.x, b.y), (2.0, 4.25));
    }

    #[test]
    fn test_iso_enter_secondary_rect() {
        let layout = import(r#"[[{"w":1.25,"h":2,"w2":1.5,"h2":1,"x2":-0.25},"Enter"]]"#);
        let key = &layout.keys[0];
        assert_eq!(
            key.secondary,
            Some(SecondaryRect {
                x2: -0.25,
                y2: 0.0,
                width2: 1.5,
                height2: 1.0
            })
        );
    }

    #[test]
    fn test_plain_wide_key_has_no_secondary_rect() {
        let layout = import(r#"[[{"w":2},"Backspace"]]"#);
        assert_eq!(layout.keys[0].secondary, None);
    }

    #[test]
    fn test_sticky_appearance_and_per_key_flags() {
        let layout = import(
            r##"[[{"c":"#ff0000","p":"DCS R2","g":true,"n":true,"a":4},"F",{"l":true,"d":true},"G","H"]]"##,
        );
        let [f, g, h] = [&layout.keys[0], &layout.keys[1], &layout.keys[2]];
        assert!(f.nub);
        assert_eq!(f.align, 4);
        assert!(!g.nub);
        assert!(g.stepped && g.decal);
        assert!(!h.stepped && !h.decal);
        for key in [f, g, h] {
            assert_eq!(key.color, "#ff0000");
            assert!(key.ghost);
            assert_eq!(key.profile.as_ref().map(Profile::raw), Some("DCS R2"));
        }
        assert_eq!(h.align, 0);
    }

    #[test]
    fn test_text_defaults_persist_and_slots_reset() {
        let layout = import(r##"[[{"t":"#111111\n\n#222222","f":4},"A\n\nB",{"f2":2},"C\nD","E"]]"##);
        let a = &layout.keys[0];
        assert_eq!(a.default.text_color.as_deref(), Some("#111111"));
        assert_eq!(a.default.text_size, Some(4.0));
        assert_eq!(a.text_color_at(2), "#222222");
        assert_eq!(a.text_size_at(0), 4.0);

        let c = &layout.keys[1];
        assert!(c.text_color.is_empty());
        assert_eq!(c.text_size_at(0), 4.0);
        assert_eq!(c.text_size_at(1), 2.0);

        let e = &layout.keys[2];
        assert!(e.text_size.is_empty());
        assert_eq!(e.default.text_color.as_deref(), Some("#111111"));
    }

    #[test]
    fn test_icon_legend_forces_size() {
        let layout = import(
            r#"[["<span class=\"trashcons icon-enter\"></span>",{"fa":[5]},"<i class=\"fa fa-home\"></i>","Plain"]]"#,
        );
        assert_eq!(layout.keys[0].text_size_at(0), ICON_TEXT_SIZE);
        assert_eq!(layout.keys[1].text_size_at(0), 5.0);
        assert!(layout.keys[2].text_size.is_empty());
    }

    #[test]
    fn test_homing_nub_from_front_slot() {
        let layout = import(r#"[[{"n":true},"F\n\n\n\nbar"]]"#);
        let key = &layout.keys[0];
        assert!(key.nub);
        assert_eq!(key.front_legend(1), Some("Bar"));
        assert_eq!(key.labels[4], "");
    }

    #[test]
    fn test_homing_nub_synthesized_from_options() {
        let doc = parse_raw_document(r#"[[{"n":true},"J"]]"#).unwrap();
        let layout = interpret_document(&doc, &ImportOptions::with_homing(HomingNubType::Bar));
        assert_eq!(layout.keys[0].front_legend(1), Some("Bar"));

        let layout = interpret_document(&doc, &ImportOptions::with_homing(HomingNubType::None));
        assert_eq!(layout.keys[0].front_legends, None);
    }

    #[test]
    fn test_decal_keeps_slot_eight() {
        let layout = import(r#"[[{"d":true},"LED\n\n\n\n\n\n\n\nCaps"]]"#);
        let key = &layout.keys[0];
        assert_eq!(key.labels[8], "Caps");
        assert_eq!(key.center_legend, None);
    }

    #[test]
    fn test_spacebar_front_legends() {
        let layout = import(r#"[[{"w":2},"Spacebar\n\n\n\n\n\nLeft\nCenter\nRight"]]"#);
        assert_eq!(layout.keys.len(), 1);
        let key = &layout.keys[0];
        assert_eq!((key.x, key.y, key.width), (0.0, 0.0, 2.0));
        assert_eq!(
            key.front_legends,
            Some(["Left".to_string(), "Center".to_string(), "Right".to_string()])
        );
        assert_eq!(key.labels.len(), 9);
    }

    #[test]
    fn test_label_overflow_folds_into_last_slot() {
        let slots = split_label("0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11\n12");
        assert_eq!(slots.len(), MAX_LEGEND_SLOTS);
        assert_eq!(slots[11], "11\n12");
    }

    #[test]
    fn test_bad_field_values_keep_last_value() {
        let layout = import(r#"[[{"w":"wide","h":-1,"c":7},"A",{"w":"1.75"},"B"]]"#);
        let a = &layout.keys[0];
        assert_eq!((a.width, a.height), (1.0, 1.0));
        assert_eq!(a.color, DEFAULT_KEY_COLOR);
        assert_eq!(layout.keys[1].width, 1.75);
    }

    #[test]
    fn test_switch_override_is_sticky() {
        let layout = import(r#"[[{"sm":"cherry","sb":"gateron","st":"yellow"},"A","B"]]"#);
        for key in &layout.keys {
            let switch = key.switch.as_ref().unwrap();
            assert_eq!(switch.mount.as_deref(), Some("cherry"));
            assert_eq!(switch.kind.as_deref(), Some("yellow"));
        }
    }

    #[test]
    fn test_metadata_fields() {
        let layout = import(
            r##"[{"name":"TKL","author":"me","backcolor":"#222","background":{"name":"Carbon","style":"x"},"plate":true,"switchMount":"alps","custom":1,"pcb":"yes"},["A"]]"##,
        );
        let metadata = &layout.metadata;
        assert_eq!(metadata.name.as_deref(), Some("TKL"));
        assert_eq!(metadata.plate, Some(true));
        assert_eq!(metadata.switch_mount.as_deref(), Some("alps"));
        assert_eq!(
            metadata.background.as_ref().and_then(|b| b.name.as_deref()),
            Some("Carbon")
        );
        assert_eq!(metadata.extra["custom"], 1);
        assert_eq!(metadata.extra["pcb"], "yes");
        assert_eq!(metadata.pcb, None);
    }

    #[test]
    fn test_ids_are_unique() {
        let layout = import(r#"[["A","B"],["C"]]"#);
        let mut ids: Vec<_> = layout.keys.iter().map(|k| k.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
