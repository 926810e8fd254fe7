//! RGBA colors
//!
//! Component props carry colors the way page authors write them: `#rgb`,
//! `#rrggbb`, `#rrggbbaa` or a CSS color keyword such as `whitesmoke`.
//! [`Color::parse`] accepts all of these; [`Color::parse_or`] is the lenient
//! variant used while resolving props.

use crate::error::{ExtrudeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color with sRGB components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit channels, rounding to nearest
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Parse a hex string or CSS color keyword
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ExtrudeError::InvalidColor(input.to_string()));
        }
        named(&trimmed.to_ascii_lowercase())
            .ok_or_else(|| ExtrudeError::InvalidColor(input.to_string()))
    }

    /// Parse a color, substituting `fallback` when the input is not a color
    pub fn parse_or(input: &str, fallback: Color) -> Self {
        match Self::parse(input) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!("{}, using {}", err, fallback);
                fallback
            }
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ExtrudeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ExtrudeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 0xFF)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 0xFF)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// CSS color keywords that appear in component props
fn named(name: &str) -> Option<Color> {
    let hex = match name {
        "transparent" => return Some(Color::TRANSPARENT),
        "black" => 0x000000,
        "white" => 0xFFFFFF,
        "whitesmoke" => 0xF5F5F5,
        "red" => 0xFF0000,
        "green" => 0x008000,
        "lime" => 0x00FF00,
        "blue" => 0x0000FF,
        "yellow" => 0xFFFF00,
        "cyan" | "aqua" => 0x00FFFF,
        "magenta" | "fuchsia" => 0xFF00FF,
        "gray" | "grey" => 0x808080,
        "silver" => 0xC0C0C0,
        "lightgray" | "lightgrey" => 0xD3D3D3,
        "darkgray" | "darkgrey" => 0xA9A9A9,
        "orange" => 0xFFA500,
        "purple" => 0x800080,
        "violet" => 0xEE82EE,
        "pink" => 0xFFC0CB,
        "gold" => 0xFFD700,
        "navy" => 0x000080,
        "teal" => 0x008080,
        "maroon" => 0x800000,
        "olive" => 0x808000,
        "indigo" => 0x4B0082,
        "skyblue" => 0x87CEEB,
        "royalblue" => 0x4169E1,
        "crimson" => 0xDC143C,
        "coral" => 0xFF7F50,
        "tomato" => 0xFF6347,
        _ => return None,
    };
    Some(Color::from_hex(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#ff0000").unwrap(), Color::RED);
        assert_eq!(Color::parse("#0f0").unwrap().to_rgba8(), [0, 255, 0, 255]);
        assert_eq!(
            Color::parse("#1e88e580").unwrap().to_rgba8(),
            [0x1e, 0x88, 0xe5, 0x80]
        );
        assert_eq!(Color::parse("#FFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Color::parse("whitesmoke").unwrap().to_rgba8(), [245, 245, 245, 255]);
        assert_eq!(Color::parse("Red").unwrap(), Color::RED);
        assert_eq!(Color::parse("transparent").unwrap().a, 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse("#12").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("not-a-color").is_err());
        assert_eq!(Color::parse_or("nope", Color::WHITE), Color::WHITE);
    }

    #[test]
    fn test_hex_string_round_trip() {
        let color = Color::parse("#003838").unwrap();
        assert_eq!(color.to_hex_string(), "#003838");
        assert_eq!(Color::RED.with_alpha(0.0).to_hex_string(), "#ff000000");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: Color = serde_json::from_str("\"#60a5fa\"").unwrap();
        assert_eq!(back.to_rgba8(), [0x60, 0xa5, 0xfa, 0xff]);
        assert!(serde_json::from_str::<Color>("\"bogus\"").is_err());
    }

    #[test]
    fn test_lerp_clamps() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 2.0), Color::WHITE);
    }
}
