use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color {0:?} (use #rrggbb, #rgb or a named color)")]
pub struct ColorError(pub String);

/// An opaque sRGB color. Opacity is carried separately by `PolygonStyle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GREY: Color = Color::rgb(0xd3, 0xd3, 0xd3);
    pub const LIGHT_BLUE: Color = Color::rgb(0xad, 0xd8, 0xe6);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Color::BLACK,
            "white" => Color::rgb(0xff, 0xff, 0xff),
            "grey" | "gray" => Color::rgb(0x80, 0x80, 0x80),
            "lightgrey" | "lightgray" => Color::LIGHT_GREY,
            "lightblue" => Color::LIGHT_BLUE,
            "red" => Color::rgb(0xff, 0, 0),
            "green" => Color::rgb(0, 0x80, 0),
            "blue" => Color::rgb(0, 0, 0xff),
            _ => return None,
        };
        Some(color)
    }

    fn hex(digits: &str) -> Option<Self> {
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #rgb expands each digit: #abc == #aabbcc
            3 => Some(Color::rgb(
                channel(&digits[0..1])? * 0x11,
                channel(&digits[1..2])? * 0x11,
                channel(&digits[2..3])? * 0x11,
            )),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(digits) => Color::hex(digits),
            None => Color::named(&trimmed.to_ascii_lowercase()),
        };
        parsed.ok_or_else(|| ColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill and edge styling for one polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonStyle {
    pub fill: Color,
    pub fill_opacity: f64,
    pub edge: Color,
    /// Edge width in points
    pub line_width: f64,
}

impl PolygonStyle {
    pub fn plate() -> Self {
        Self {
            fill: Color::LIGHT_GREY,
            fill_opacity: 1.0,
            edge: Color::BLACK,
            line_width: 1.0,
        }
    }

    pub fn piece() -> Self {
        Self {
            fill: Color::LIGHT_BLUE,
            ..Self::plate()
        }
    }
}
