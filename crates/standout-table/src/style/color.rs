//! Color value parsing.
//!
//! Supports:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors, `gray`/`grey`)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit)
//!
//! # Example
//!
//! ```rust
//! use standout_table::style::ColorDef;
//!
//! let red = ColorDef::parse_string("red").unwrap();
//! let hex = ColorDef::parse_string("#ff6b35").unwrap();
//! let palette = ColorDef::parse_string("208").unwrap();
//! assert_eq!(palette, ColorDef::Color256(208));
//! ```

use console::Color;
use serde::Deserialize;

/// A parsed foreground or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ColorRaw")]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// True color RGB, rendered through the nearest palette entry.
    Rgb(u8, u8, u8),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRaw {
    Index(u64),
    Text(String),
}

impl TryFrom<ColorRaw> for ColorDef {
    type Error = String;

    fn try_from(raw: ColorRaw) -> Result<Self, Self::Error> {
        match raw {
            ColorRaw::Index(n) => u8::try_from(n)
                .map(ColorDef::Color256)
                .map_err(|_| format!("Color palette index {} out of range (0-255)", n)),
            ColorRaw::Text(s) => ColorDef::parse_string(&s),
        }
    }
}

impl ColorDef {
    /// Parses a color from a string value.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u8>()
                .map(ColorDef::Color256)
                .map_err(|_| format!("Color palette index {} out of range (0-255)", s));
        }

        Self::parse_named(s)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        let component = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("Invalid hex: #{}", hex))
        };
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                component(&hex[0..1])? * 17,
                component(&hex[1..2])? * 17,
                component(&hex[2..3])? * 17,
            )),
            6 => Ok(ColorDef::Rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses a named color (including bright variants).
    fn parse_named(name: &str) -> Result<Self, String> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            return Self::parse_bright_color(base);
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::White,
            _ => return Err(format!("Unknown color name: {}", name)),
        };

        Ok(ColorDef::Named(color))
    }

    /// Bright colors live at palette indices 8-15.
    fn parse_bright_color(base: &str) -> Result<Self, String> {
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return Err(format!("Unknown bright color: bright_{}", base)),
        };

        Ok(ColorDef::Color256(index))
    }

    /// Converts this color definition to a `console::Color`.
    pub fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(crate::rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

impl From<Color> for ColorDef {
    fn from(color: Color) -> Self {
        ColorDef::Named(color)
    }
}
