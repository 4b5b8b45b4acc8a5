//! Field style derivation.
//!
//! Converts configured style groups into CSS declarations. Unconfigured
//! fields are omitted, never defaulted; a color that is absent or fully
//! transparent is treated as unset rather than black.
//!
//! Hover variants are carried in the same map under a `hover-` name
//! prefix and split into a `:hover` rule when the map is emitted as a
//! class-scoped block. Inline emission is only used for maps that carry
//! no hover declarations.

use sha2::{Digest, Sha256};

use crate::models::style::{
    AlignmentField, BorderField, ColorField, FontField, SpacingField, StyleGroups,
};

const HOVER_PREFIX: &str = "hover-";

/// An ordered list of CSS property/value pairs. Setting a property that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    props: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        StyleMap { props: Vec::new() }
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self.props.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.props.push((name.to_string(), value));
        }
    }

    pub fn set_opt(&mut self, name: &str, value: Option<String>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn merge(&mut self, other: StyleMap) {
        for (name, value) in other.props {
            self.set(&name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Declarations joined for a `style="..."` attribute.
    pub fn inline(&self) -> String {
        self.props
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn base(&self) -> impl Iterator<Item = &(String, String)> {
        self.props
            .iter()
            .filter(|(name, _)| !name.starts_with(HOVER_PREFIX))
    }

    fn hover(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().filter_map(|(name, value)| {
            name.strip_prefix(HOVER_PREFIX)
                .map(|stripped| (stripped, value.as_str()))
        })
    }
}

/// Format a px length the way the configuration carries it: `16` → `16px`,
/// `0.5` → `0.5px`.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Convert a configured color into an `rgba()` value. Absent and
/// zero-alpha colors yield `None` so callers omit the property entirely.
pub fn rgba_color(color: &ColorField) -> Option<String> {
    if let (Some(r), Some(g), Some(b)) = (color.r, color.g, color.b) {
        let alpha = color.a.unwrap_or(1.0);
        if alpha == 0.0 {
            return None;
        }
        return Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha));
    }

    let hex_value = color.color.as_deref()?;
    let (r, g, b) = parse_hex(hex_value)?;
    let alpha = color.opacity.map(|percent| percent / 100.0).unwrap_or(1.0);
    if alpha == 0.0 {
        return None;
    }
    Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}

fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let channel = |i: usize| {
                u8::from_str_radix(&digits[i..i + 1], 16)
                    .ok()
                    .map(|v| v * 17)
            };
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

pub fn font_style(font: &FontField) -> StyleMap {
    let mut map = StyleMap::new();
    if let Some(family) = &font.font {
        map.set("font-family", family.clone());
    }
    if let Some(size) = font.size {
        let unit = font.size_unit.as_deref().unwrap_or("px");
        map.set("font-size", format!("{}{}", size, unit));
    }
    if let Some(color) = &font.color {
        map.set("color", color.clone());
    }
    if font.bold == Some(true) {
        map.set("font-weight", "bold");
    }
    if font.italic == Some(true) {
        map.set("font-style", "italic");
    }
    if font.underline == Some(true) {
        map.set("text-decoration", "underline");
    }
    map
}

pub fn font_hover_style(font: &FontField) -> StyleMap {
    hover_variant(font_style(font))
}

pub fn border_style(border: &BorderField) -> StyleMap {
    let mut map = StyleMap::new();
    if let Some(width) = border.width {
        let line_style = border.style.as_deref().unwrap_or("solid");
        let value = match rgba_color(&border.color) {
            Some(color) => format!("{}px {} {}", width, line_style, color),
            None => format!("{}px {}", width, line_style),
        };
        map.set("border", value);
    }
    map
}

pub fn border_hover_style(border: &BorderField) -> StyleMap {
    hover_variant(border_style(border))
}

pub fn spacing_style(spacing: &SpacingField) -> StyleMap {
    let mut map = StyleMap::new();
    if let Some(margin) = &spacing.margin {
        map.set_opt("margin-top", margin.top.map(px));
        map.set_opt("margin-right", margin.right.map(px));
        map.set_opt("margin-bottom", margin.bottom.map(px));
        map.set_opt("margin-left", margin.left.map(px));
    }
    if let Some(padding) = &spacing.padding {
        map.set_opt("padding-top", padding.top.map(px));
        map.set_opt("padding-right", padding.right.map(px));
        map.set_opt("padding-bottom", padding.bottom.map(px));
        map.set_opt("padding-left", padding.left.map(px));
    }
    map
}

pub fn alignment_style(alignment: &AlignmentField) -> StyleMap {
    let mut map = StyleMap::new();
    if let Some(align) = &alignment.horizontal_align {
        map.set("text-align", align.to_lowercase());
    }
    map
}

fn hover_variant(base: StyleMap) -> StyleMap {
    let mut map = StyleMap::new();
    for (name, value) in base.props {
        map.set(&format!("{}{}", HOVER_PREFIX, name), value);
    }
    map
}

/// Emit a class-scoped rule (plus a `:hover` rule when the map carries
/// hover declarations). Empty maps contribute nothing.
pub fn scoped_rule(scope: &str, class: &str, map: &StyleMap) -> String {
    let mut css = String::new();

    let base: Vec<_> = map.base().collect();
    if !base.is_empty() {
        css.push_str(&format!(".{} .{} {{\n", scope, class));
        for (name, value) in base {
            css.push_str(&format!("    {}: {};\n", name, value));
        }
        css.push_str("}\n");
    }

    let hover: Vec<_> = map.hover().collect();
    if !hover.is_empty() {
        css.push_str(&format!(".{} .{}:hover {{\n", scope, class));
        for (name, value) in hover {
            css.push_str(&format!("    {}: {};\n", name, value));
        }
        css.push_str("}\n");
    }

    css
}

/// Per-instance scope class. The suffix is a truncated digest of the
/// serialized style tree, so rendering stays deterministic and two
/// instances only share a scope when their styling is identical.
pub fn scope_class(style: &StyleGroups) -> String {
    let serialized = serde_json::to_string(style).unwrap_or_default();
    let digest = hex::encode(Sha256::digest(serialized.as_bytes()));
    format!("blog-posts-{}", &digest[..8])
}
