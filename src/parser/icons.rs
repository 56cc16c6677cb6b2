//! Icon markup inside legend strings.
//!
//! Legends may embed `<span class="...">` or `<i class="...">` tags naming an
//! icon from one of three families:
//!
//! - `trashcons` and `kb` are glyph fonts; each icon maps to a private-use-area
//!   code point that a renderer draws with the matching font.
//! - `fa` icons are vector icons; they carry no glyph and are resolved by name.
//!
//! Tags come paired (`<i class="fa fa-home"></i>`), self-closing
//! (`<i class="fa fa-home"/>`) or unclosed at the end of the legend. Markup
//! that does not name a registered icon is passed through as plain text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Icon family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFamily {
    /// Trashcons glyph font
    Trashcons,
    /// kbd-webfont glyph font
    Kb,
    /// Font Awesome vector icons
    Fa,
}

impl IconFamily {
    /// Class token that marks a tag as belonging to this family.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Trashcons => "trashcons",
            Self::Kb => "kb",
            Self::Fa => "fa",
        }
    }

    /// Prefix of the per-icon class within the family.
    const fn icon_prefix(self) -> &'static str {
        match self {
            Self::Trashcons => "icon-",
            Self::Kb => "kb-",
            Self::Fa => "fa-",
        }
    }
}

/// Registered icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDef {
    /// Family the icon belongs to
    pub family: IconFamily,
    /// Full per-icon class, e.g. `icon-enter`
    pub class: &'static str,
    /// Glyph code point for font icons, `None` for vector icons
    pub glyph: Option<char>,
}

impl IconDef {
    /// Icon name without the family prefix, e.g. `enter`.
    pub fn name(&self) -> &'static str {
        self.class
            .strip_prefix(self.family.icon_prefix())
            .unwrap_or(self.class)
    }
}

const fn glyph(family: IconFamily, class: &'static str, code: char) -> IconDef {
    IconDef {
        family,
        class,
        glyph: Some(code),
    }
}

const fn vector(class: &'static str) -> IconDef {
    IconDef {
        family: IconFamily::Fa,
        class,
        glyph: None,
    }
}

use IconFamily::{Kb, Trashcons};

/// The fixed icon registry.
pub static ICON_REGISTRY: &[IconDef] = &[
    glyph(Trashcons, "icon-enter", '\u{e000}'),
    glyph(Trashcons, "icon-backspace", '\u{e001}'),
    glyph(Trashcons, "icon-tab", '\u{e002}'),
    glyph(Trashcons, "icon-shift", '\u{e003}'),
    glyph(Trashcons, "icon-capslock", '\u{e004}'),
    glyph(Trashcons, "icon-command", '\u{e005}'),
    glyph(Trashcons, "icon-option", '\u{e006}'),
    glyph(Trashcons, "icon-control", '\u{e007}'),
    glyph(Trashcons, "icon-escape", '\u{e008}'),
    glyph(Trashcons, "icon-arrow-up", '\u{e009}'),
    glyph(Trashcons, "icon-arrow-down", '\u{e00a}'),
    glyph(Trashcons, "icon-arrow-left", '\u{e00b}'),
    glyph(Trashcons, "icon-arrow-right", '\u{e00c}'),
    glyph(Trashcons, "icon-home", '\u{e00d}'),
    glyph(Trashcons, "icon-end", '\u{e00e}'),
    glyph(Trashcons, "icon-page-up", '\u{e00f}'),
    glyph(Trashcons, "icon-page-down", '\u{e010}'),
    glyph(Trashcons, "icon-delete", '\u{e011}'),
    glyph(Trashcons, "icon-power", '\u{e012}'),
    glyph(Trashcons, "icon-eject", '\u{e013}'),
    glyph(Trashcons, "icon-windows", '\u{e014}'),
    glyph(Trashcons, "icon-apple", '\u{e015}'),
    glyph(Trashcons, "icon-menu", '\u{e016}'),
    glyph(Trashcons, "icon-fn", '\u{e017}'),
    glyph(Trashcons, "icon-play-pause", '\u{e018}'),
    glyph(Trashcons, "icon-volume-up", '\u{e019}'),
    glyph(Trashcons, "icon-volume-down", '\u{e01a}'),
    glyph(Trashcons, "icon-mute", '\u{e01b}'),
    glyph(Kb, "kb-Arrows-Up", '\u{e100}'),
    glyph(Kb, "kb-Arrows-Down", '\u{e101}'),
    glyph(Kb, "kb-Arrows-Left", '\u{e102}'),
    glyph(Kb, "kb-Arrows-Right", '\u{e103}'),
    glyph(Kb, "kb-Arrows-Top-Bottom", '\u{e104}'),
    glyph(Kb, "kb-Line-Start-End", '\u{e105}'),
    glyph(Kb, "kb-Unicode-Page-Up", '\u{e106}'),
    glyph(Kb, "kb-Unicode-Page-Down", '\u{e107}'),
    glyph(Kb, "kb-Return-2", '\u{e108}'),
    glyph(Kb, "kb-Tab-1", '\u{e109}'),
    glyph(Kb, "kb-Shift-1", '\u{e10a}'),
    glyph(Kb, "kb-Multimedia-Play-Pause", '\u{e10b}'),
    glyph(Kb, "kb-Multimedia-Mute-1", '\u{e10c}'),
    glyph(Kb, "kb-Multimedia-Volume-Up-1", '\u{e10d}'),
    glyph(Kb, "kb-Multimedia-Volume-Down-1", '\u{e10e}'),
    glyph(Kb, "kb-logo-windows-8", '\u{e10f}'),
    glyph(Kb, "kb-logo-apple", '\u{e110}'),
    glyph(Kb, "kb-logo-linux-tux", '\u{e111}'),
    vector("fa-home"),
    vector("fa-power-off"),
    vector("fa-arrow-up"),
    vector("fa-arrow-down"),
    vector("fa-arrow-left"),
    vector("fa-arrow-right"),
    vector("fa-volume-up"),
    vector("fa-volume-down"),
    vector("fa-volume-off"),
    vector("fa-play"),
    vector("fa-pause"),
    vector("fa-backward"),
    vector("fa-forward"),
    vector("fa-eject"),
    vector("fa-lock"),
    vector("fa-bars"),
    vector("fa-windows"),
    vector("fa-apple"),
    vector("fa-linux"),
];

/// Looks up an icon by its class attribute (whitespace-separated class list).
///
/// Both the family class and a registered per-icon class must be present.
pub fn lookup_icon(class_list: &str) -> Option<&'static IconDef> {
    let classes: Vec<&str> = class_list.split_whitespace().collect();
    ICON_REGISTRY.iter().find(|def| {
        classes.contains(&def.family.class()) && classes.contains(&def.class)
    })
}

/// Opening tag of a span or italic element with a class attribute.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(span|i)\s+class\s*=\s*(?:"([^"]*)"|'([^']*)')\s*(/?)>"#)
        .expect("icon tag pattern is valid")
});

/// Fast pre-check for markup following the registry's class convention.
static ICON_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:span|i)\b[^>]*\bclass\s*=\s*["'][^"']*\b(?:trashcons|kb|fa)\b"#)
        .expect("icon hint pattern is valid")
});

/// Which element an icon was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTag {
    /// `<span>`
    Span,
    /// `<i>`
    I,
}

impl IconTag {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Span => "span",
            Self::I => "i",
        }
    }
}

/// How the icon element was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagForm {
    /// Opening and closing tag
    Paired,
    /// `<i class="..."/>`
    SelfClosing,
    /// Opening tag with no closing tag
    Unclosed,
}

/// An icon span within a legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSpan {
    /// Glyph to draw, empty for vector icons
    pub content: String,
    /// Class attribute exactly as written
    pub class_name: String,
    /// Registry name of the icon
    pub icon_name: String,
    /// Element the icon was written with
    pub tag: IconTag,
    /// Closing style
    pub form: TagForm,
    /// Text between the opening and closing tag
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub inner: String,
    /// Opening tag exactly as written, quoting and spacing included
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub open_tag: String,
}

impl IconSpan {
    /// Opening tag text, rebuilt in canonical form when it was not recorded.
    fn opening(&self) -> String {
        if !self.open_tag.is_empty() {
            return self.open_tag.clone();
        }
        let tag = self.tag.as_str();
        match self.form {
            TagForm::SelfClosing => format!("<{tag} class=\"{}\"/>", self.class_name),
            TagForm::Paired | TagForm::Unclosed => {
                format!("<{tag} class=\"{}\">", self.class_name)
            }
        }
    }
}

/// A segment of a tokenized legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IconPart {
    /// Plain text, including unrecognized markup
    Text {
        /// The text
        content: String,
    },
    /// A recognized icon
    Icon(IconSpan),
}

impl IconPart {
    /// True for icon segments.
    pub const fn is_icon(&self) -> bool {
        matches!(self, Self::Icon(_))
    }
}

/// True iff the legend contains markup following the icon class convention.
///
/// This does not check the registry; use [`parse_icon_legend`] for that.
pub fn has_icons(legend: &str) -> bool {
    legend.contains('<') && ICON_HINT.is_match(legend)
}

/// True iff the legend contains at least one registered icon.
pub fn has_recognized_icons(legend: &str) -> bool {
    has_icons(legend) && parse_icon_legend(legend).iter().any(IconPart::is_icon)
}

/// Splits a legend into text and icon segments.
pub fn parse_icon_legend(legend: &str) -> Vec<IconPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while let Some(caps) = OPEN_TAG.captures_at(legend, pos) {
        let Some(open) = caps.get(0) else { break };
        text.push_str(&legend[pos..open.start()]);

        let tag = if &caps[1] == "span" {
            IconTag::Span
        } else {
            IconTag::I
        };
        let class_name = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        let self_closing = caps.get(4).is_some_and(|m| !m.as_str().is_empty());

        let Some(def) = lookup_icon(class_name) else {
            // Unknown markup stays visible as text; scanning resumes after it.
            text.push_str(open.as_str());
            pos = open.end();
            continue;
        };

        let (form, inner, end) = if self_closing {
            (TagForm::SelfClosing, "", open.end())
        } else {
            let closing = format!("</{}>", tag.as_str());
            let rest = &legend[open.end()..];
            match rest.find(&closing) {
                Some(offset) if !rest[..offset].contains('<') => (
                    TagForm::Paired,
                    &rest[..offset],
                    open.end() + offset + closing.len(),
                ),
                _ => (TagForm::Unclosed, "", open.end()),
            }
        };

        if !text.is_empty() {
            parts.push(IconPart::Text {
                content: std::mem::take(&mut text),
            });
        }
        parts.push(IconPart::Icon(IconSpan {
            content: def.glyph.map(String::from).unwrap_or_default(),
            class_name: class_name.to_string(),
            icon_name: def.name().to_string(),
            tag,
            form,
            inner: inner.to_string(),
            open_tag: open.as_str().to_string(),
        }));
        pos = end;
    }

    text.push_str(&legend[pos..]);
    if !text.is_empty() {
        parts.push(IconPart::Text { content: text });
    }
    parts
}

/// Renders segments back to legend markup.
///
/// For legends made of registered, well-formed tags this reproduces the input
/// of [`parse_icon_legend`] exactly.
pub fn icon_parts_to_html(parts: &[IconPart]) -> String {
    let mut html = String::new();
    for part in parts {
        match part {
            IconPart::Text { content } => html.push_str(content),
            IconPart::Icon(span) => {
                html.push_str(&span.opening());
                if span.form == TagForm::Paired {
                    html.push_str(&span.inner);
                    html.push_str(&format!("</{}>", span.tag.as_str()));
                }
            }
        }
    }
    html
}
