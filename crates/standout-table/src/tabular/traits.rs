//! Callback capabilities for columns, rows and footers.
//!
//! Each trait has a blanket implementation for matching closures, so plain
//! functions work wherever a capability is accepted:
//!
//! ```rust
//! use standout_table::{CellText, ColumnSpec};
//! use standout_table::style::Style;
//!
//! let price = ColumnSpec::new("price")
//!     .formatter(|v: &serde_json::Value, _row: usize| {
//!         CellText::plain(format!("${:.2}", v.as_f64().unwrap_or(0.0)))
//!     })
//!     .cell_style(|v: &serde_json::Value| {
//!         (v.as_f64() > Some(100.0)).then(|| Style::new().bold())
//!     });
//! ```

use crate::source::{CellValue, Row};
use crate::style::{CellText, Style};

use super::window::FooterInfo;

/// Turns a raw cell value into display text.
pub trait CellFormatter: Send + Sync {
    /// `row_index` is the absolute index in the row source.
    fn format(&self, value: &CellValue, row_index: usize) -> CellText;
}

impl<F> CellFormatter for F
where
    F: Fn(&CellValue, usize) -> CellText + Send + Sync,
{
    fn format(&self, value: &CellValue, row_index: usize) -> CellText {
        self(value, row_index)
    }
}

/// Chooses a style for one cell from its raw value.
pub trait CellStyler: Send + Sync {
    fn style(&self, value: &CellValue) -> Option<Style>;
}

impl<F> CellStyler for F
where
    F: Fn(&CellValue) -> Option<Style> + Send + Sync,
{
    fn style(&self, value: &CellValue) -> Option<Style> {
        self(value)
    }
}

/// Chooses a style for a whole row from its raw fields.
pub trait RowStyler: Send + Sync {
    fn style(&self, row: &Row) -> Option<Style>;
}

impl<F> RowStyler for F
where
    F: Fn(&Row) -> Option<Style> + Send + Sync,
{
    fn style(&self, row: &Row) -> Option<Style> {
        self(row)
    }
}

/// Produces the footer line's text.
pub trait FooterText: Send + Sync {
    fn text(&self, info: &FooterInfo) -> String;
}

impl<F> FooterText for F
where
    F: Fn(&FooterInfo) -> String + Send + Sync,
{
    fn text(&self, info: &FooterInfo) -> String {
        self(info)
    }
}
