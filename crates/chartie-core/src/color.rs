// File: crates/chartie-core/src/color.rs
// Summary: RGBA color parsing, the default palette, and color-range resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 8-bit RGBA color. Deserializes from CSS-style strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Fallback used wherever a color slot has nothing to resolve to.
    pub const FALLBACK: Color = Color::rgb(0x34, 0x98, 0xdb);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with its alpha replaced by `alpha` in [0,1].
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: unit_to_u8(alpha), ..self }
    }

    /// Multiply the existing alpha by `factor` (canvas `globalAlpha` equivalent).
    pub fn fade(self, factor: f64) -> Self {
        Self { a: unit_to_u8(self.a as f64 / 255.0 * factor), ..self }
    }

    pub fn alpha_f64(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` or a CSS name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower.strip_prefix("rgba(").or_else(|| lower.strip_prefix("rgb(")) {
            return parse_functional(args.strip_suffix(')')?);
        }
        parse_named(&lower)
    }
}

fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| -> Option<u8> {
        let v: f64 = s.parse().ok()?;
        Some(v.clamp(0.0, 255.0).round() as u8)
    };
    let alpha = match parts.get(3) {
        Some(a) => unit_to_u8(a.parse().ok()?),
        None => 255,
    };
    Some(Color::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha))
}

fn parse_named(s: &str) -> Option<Color> {
    match s {
        "transparent"   => Some(Color::TRANSPARENT),
        "black"         => Some(Color::BLACK),
        "white"         => Some(Color::WHITE),
        "red"           => Some(Color::rgb(255, 0, 0)),
        "green"         => Some(Color::rgb(0, 128, 0)),
        "blue"          => Some(Color::rgb(0, 0, 255)),
        "yellow"        => Some(Color::rgb(255, 255, 0)),
        "cyan"          => Some(Color::rgb(0, 255, 255)),
        "magenta"       => Some(Color::rgb(255, 0, 255)),
        "gray" | "grey" => Some(Color::rgb(128, 128, 128)),
        "orange"        => Some(Color::rgb(255, 165, 0)),
        "purple"        => Some(Color::rgb(128, 0, 128)),
        "pink"          => Some(Color::rgb(255, 192, 203)),
        "brown"         => Some(Color::rgb(165, 42, 42)),
        _               => None,
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| ChartError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = (self.alpha_f64() * 1000.0).round() / 1000.0;
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
        }
    }
}

/// Palette applied when a dataset does not specify its own colors.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::rgb(0x34, 0x98, 0xdb),
    Color::rgb(0xe7, 0x4c, 0x3c),
    Color::rgb(0x2e, 0xcc, 0x71),
    Color::rgb(0xf3, 0x9c, 0x12),
    Color::rgb(0x9b, 0x59, 0xb6),
    Color::rgb(0x1a, 0xbc, 0x9c),
    Color::rgb(0x34, 0x49, 0x5e),
    Color::rgb(0xe6, 0x7e, 0x22),
    Color::rgb(0x95, 0xa5, 0xa6),
    Color::rgb(0xd3, 0x54, 0x00),
];

/// A single color or an ordered sequence of colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(Color),
    Many(Vec<Color>),
}

impl ColorSpec {
    pub fn palette() -> Self {
        ColorSpec::Many(DEFAULT_PALETTE.to_vec())
    }

    /// First color of the spec; the whole color when single.
    pub fn first(&self) -> Option<Color> {
        match self {
            ColorSpec::Single(c) => Some(*c),
            ColorSpec::Many(v) => v.first().copied(),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(c: Color) -> Self {
        ColorSpec::Single(c)
    }
}

impl From<Vec<Color>> for ColorSpec {
    fn from(v: Vec<Color>) -> Self {
        ColorSpec::Many(v)
    }
}

/// Resolve `colors` to exactly `length` entries.
///
/// A single color is broadcast. A sequence is truncated when longer, or padded by
/// repeating its last entry when shorter.
pub fn resolve_color_range(colors: &ColorSpec, length: usize) -> Vec<Color> {
    match colors {
        ColorSpec::Single(c) => vec![*c; length],
        ColorSpec::Many(v) => {
            let pad = v.last().copied().unwrap_or(Color::FALLBACK);
            v.iter().copied().chain(std::iter::repeat(pad)).take(length).collect()
        }
    }
}

/// Palette color for the `index`-th series among `count`.
pub fn palette_color(index: usize, count: usize) -> Color {
    resolve_color_range(&ColorSpec::palette(), count.max(index + 1))[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Color {
        s.parse().unwrap()
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(c("#fff"), Color::WHITE);
        assert_eq!(c("#3498db"), Color::rgb(0x34, 0x98, 0xdb));
        assert_eq!(c("#00000080"), Color::rgba(0, 0, 0, 0x80));
        assert!(Color::parse("#12345").is_none());
        assert!(Color::parse("#zzzzzz").is_none());
    }

    #[test]
    fn parses_functional_and_named() {
        assert_eq!(c("rgba(0, 0, 0, 0.1)"), Color::rgba(0, 0, 0, 26));
        assert_eq!(c("rgb(16,185,129)"), Color::rgb(16, 185, 129));
        assert_eq!(c("  White "), Color::WHITE);
        assert!(Color::parse("rgba(1,2)").is_none());
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for s in ["#6366f1", "rgba(255, 255, 255, 0.1)"] {
            let col = c(s);
            assert_eq!(c(&col.to_string()), col);
        }
    }

    #[test]
    fn resolve_pads_with_last_color() {
        let spec = ColorSpec::Many(vec![c("#fff"), c("#000")]);
        let out = resolve_color_range(&spec, 5);
        assert_eq!(out, vec![Color::WHITE, Color::BLACK, Color::BLACK, Color::BLACK, Color::BLACK]);
    }

    #[test]
    fn resolve_truncates_and_broadcasts() {
        let spec = ColorSpec::Many(DEFAULT_PALETTE.to_vec());
        assert_eq!(resolve_color_range(&spec, 2), DEFAULT_PALETTE[..2].to_vec());
        assert_eq!(resolve_color_range(&ColorSpec::Single(Color::BLACK), 3), vec![Color::BLACK; 3]);
        assert_eq!(resolve_color_range(&ColorSpec::Many(vec![]), 1), vec![Color::FALLBACK]);
    }

    #[test]
    fn fade_scales_alpha() {
        assert_eq!(Color::WHITE.fade(0.3).a, 77);
        assert_eq!(Color::rgba(0, 0, 0, 0).fade(0.5).a, 0);
        assert_eq!(Color::BLACK.with_alpha(0.5).a, 128);
    }
}
