//! Column configuration types.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::source::CellValue;
use crate::style::{CellText, Style};

use super::resolve::ColumnConstraint;
use super::traits::{CellFormatter, CellStyler};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// Spaces placed outside a cell's content width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
}

impl Padding {
    pub const fn new(left: usize, right: usize) -> Self {
        Padding { left, right }
    }

    /// Total horizontal padding.
    pub fn total(&self) -> usize {
        self.left + self.right
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding { left: 1, right: 1 }
    }
}

/// Configuration for one column, matched to the row source by key.
///
/// # Example
///
/// ```rust
/// use standout_table::{Align, ColumnSpec};
///
/// let name = ColumnSpec::new("name")
///     .header("Name")
///     .min_width(8)
///     .max_width(30)
///     .flex_grow(1);
/// let price = ColumnSpec::new("price").align(Align::Right);
/// ```
#[derive(Clone, Default)]
pub struct ColumnSpec {
    /// Column key in the row source.
    pub key: String,
    /// Header label; the key is shown when unset.
    pub header: Option<String>,
    pub align: Align,
    /// Minimum content width (treated as at least 1).
    pub min_width: Option<usize>,
    /// Maximum content width.
    pub max_width: Option<usize>,
    /// Share of leftover width; 0 keeps the column at its natural size.
    pub flex_grow: usize,
    /// Overrides the table-wide padding.
    pub padding: Option<Padding>,
    pub style: Option<Style>,
    pub header_style: Option<Style>,
    pub formatter: Option<Arc<dyn CellFormatter>>,
    pub cell_style: Option<Arc<dyn CellStyler>>,
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("align", &self.align)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("flex_grow", &self.flex_grow)
            .field("padding", &self.padding)
            .field("style", &self.style)
            .field("header_style", &self.header_style)
            .field("formatter", &self.formatter.is_some())
            .field("cell_style", &self.cell_style.is_some())
            .finish()
    }
}

impl ColumnSpec {
    /// Create a column for the given row source key.
    pub fn new(key: impl Into<String>) -> Self {
        ColumnSpec {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set alignment to center (shorthand for `.align(Align::Center)`).
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn flex_grow(mut self, weight: usize) -> Self {
        self.flex_grow = weight;
        self
    }

    pub fn padding(mut self, left: usize, right: usize) -> Self {
        self.padding = Some(Padding::new(left, right));
        self
    }

    /// Set the static style for data cells.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the style for this column's header cell, layered over the theme.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    /// Set the formatter turning raw values into display text.
    ///
    /// Return [`CellText::styled`] for output that carries its own styling.
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&CellValue, usize) -> CellText + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Set the per-cell conditional style.
    pub fn cell_style<F>(mut self, styler: F) -> Self
    where
        F: Fn(&CellValue) -> Option<Style> + Send + Sync + 'static,
    {
        self.cell_style = Some(Arc::new(styler));
        self
    }

    /// The header label shown for this column.
    pub fn label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.key)
    }

    /// Effective padding given the table-wide default.
    pub fn padding_or(&self, default: Padding) -> Padding {
        self.padding.unwrap_or(default)
    }

    /// Width constraints for distribution.
    pub fn constraint(&self, default_padding: Padding) -> ColumnConstraint {
        ColumnConstraint {
            name: self.key.clone(),
            min: self.min_width.unwrap_or(1),
            max: self.max_width,
            flex_grow: self.flex_grow,
            padding: self.padding_or(default_padding),
        }
    }

    /// Display text for a raw value: formatter output when configured,
    /// compact JSON for structured values, plain text for scalars.
    pub fn format(&self, value: &CellValue, row_index: usize) -> CellText {
        match &self.formatter {
            Some(formatter) => formatter.format(value, row_index),
            None => CellText::plain(stringify(value)),
        }
    }
}

/// Default textual form of a raw value. `null` becomes empty text.
pub fn stringify(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::String(s) => s.clone(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Number(n) => n.to_string(),
        CellValue::Array(_) | CellValue::Object(_) => value.to_string(),
    }
}
