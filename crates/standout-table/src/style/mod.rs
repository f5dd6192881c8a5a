//! Style fragments, the precedence chain, and text styling.
//!
//! A [`Style`] is a bag of optional attributes. Fragments from several
//! sources are layered with [`Style::merge`], later fragments overriding only
//! the attributes they define:
//!
//! ```text
//! theme (cell / alternating) → row rule → column style → cell rule
//! ```
//!
//! Formatter output that already carries its own styling is wrapped as
//! [`CellText::styled`] and bypasses the chain entirely.
//!
//! # Example
//!
//! ```rust
//! use standout_table::style::{resolve, ColorDef, Style};
//! use console::Color;
//!
//! let base = Style::new().bg(Color::Blue);
//! let row = Style::new().fg(Color::Red);
//! let cell = Style::new().bold();
//!
//! let effective = resolve(&base, Some(&row), None, Some(&cell));
//! assert_eq!(effective.bg, Some(ColorDef::Named(Color::Blue)));
//! assert_eq!(effective.fg, Some(ColorDef::Named(Color::Red)));
//! assert_eq!(effective.bold, Some(true));
//! ```

mod color;

pub use color::ColorDef;

use serde::Deserialize;

/// A set of optional visual attributes.
///
/// `None` means "inherit from the previous layer", never "reset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    /// Foreground color.
    #[serde(default)]
    pub fg: Option<ColorDef>,
    /// Background color.
    #[serde(default)]
    pub bg: Option<ColorDef>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub italic: Option<bool>,
    #[serde(default)]
    pub underline: Option<bool>,
    #[serde(default)]
    pub dim: Option<bool>,
}

impl Style {
    /// Creates an empty style that defines nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: impl Into<ColorDef>) -> Self {
        self.fg = Some(color.into());
        self
    }

    pub fn bg(mut self, color: impl Into<ColorDef>) -> Self {
        self.bg = Some(color.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = Some(true);
        self
    }

    /// Returns true when no attribute is defined.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Layers `over` on top of `self`: attributes defined by `over` win,
    /// everything else falls through from `self`.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
            bold: over.bold.or(self.bold),
            italic: over.italic.or(self.italic),
            underline: over.underline.or(self.underline),
            dim: over.dim.or(self.dim),
        }
    }

    /// Converts into a `console::Style` that always emits escape codes.
    pub fn to_console(&self) -> console::Style {
        let mut style = console::Style::new().force_styling(true);
        if let Some(fg) = self.fg {
            style = style.fg(fg.to_console_color());
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg.to_console_color());
        }
        if self.bold == Some(true) {
            style = style.bold();
        }
        if self.italic == Some(true) {
            style = style.italic();
        }
        if self.underline == Some(true) {
            style = style.underlined();
        }
        if self.dim == Some(true) {
            style = style.dim();
        }
        style
    }
}

/// Merges the style precedence chain for one cell.
///
/// `base` is the theme-selected row style; the optional layers are applied in
/// ascending precedence.
pub fn resolve(
    base: &Style,
    row: Option<&Style>,
    column: Option<&Style>,
    cell: Option<&Style>,
) -> Style {
    [row, column, cell]
        .into_iter()
        .flatten()
        .fold(*base, |acc, layer| acc.merge(layer))
}

/// How resolved styles are turned into output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleOutput {
    /// Emit ANSI escape sequences.
    #[default]
    Ansi,
    /// Drop all styling; output is plain text.
    Plain,
}

/// Display text for a cell, tagged with whether it is already styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    text: String,
    pre_styled: bool,
}

impl CellText {
    /// Unstyled text; the style chain applies to it.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pre_styled: false,
        }
    }

    /// Text that already carries its own styling and must not be restyled.
    pub fn styled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pre_styled: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_pre_styled(&self) -> bool {
        self.pre_styled
    }
}

impl From<String> for CellText {
    fn from(text: String) -> Self {
        CellText::plain(text)
    }
}

impl From<&str> for CellText {
    fn from(text: &str) -> Self {
        CellText::plain(text)
    }
}

/// Renders `text` with `style`.
///
/// Empty styles and [`StyleOutput::Plain`] return the text unchanged.
pub fn apply(text: &str, style: &Style, output: StyleOutput) -> String {
    if output == StyleOutput::Plain || style.is_empty() {
        return text.to_string();
    }
    style.to_console().apply_to(text).to_string()
}
