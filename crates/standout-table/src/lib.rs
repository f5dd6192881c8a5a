//! # Standout Table - Fixed-Width Styled Tables for the Terminal
//!
//! `standout-table` lays tabular data out as bordered, fixed-width text.
//! Column widths are resolved against an optional width budget, cell text is
//! truncated and aligned with Unicode-aware width measurement, and styles are
//! layered from a theme down to individual cells.
//!
//! ## Core Concepts
//!
//! - [`RowSource`]: indexed access to the data ([`Records`], [`Columns`])
//! - [`ColumnSpec`]: per-column width limits, alignment, formatting and style
//! - [`TableConfig`]: width budget, pagination, borders, theme, callbacks
//! - [`Theme`]: styles for header, cells, alternating rows and footer
//! - [`render`]: turns a source and a config into the table text
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use standout_table::{render, ColumnSpec, Records, StyleOutput, TableConfig};
//!
//! #[derive(Serialize)]
//! struct Item {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! let items = vec![
//!     Item { id: 1, name: "A very long item name that will need truncation".into(), price: 12.99 },
//!     Item { id: 2, name: "Short name".into(), price: 5.0 },
//! ];
//!
//! let config = TableConfig::new()
//!     .width(40)
//!     .style_output(StyleOutput::Plain)
//!     .column(ColumnSpec::new("price").right());
//!
//! let table = render(&Records::from_serialize(&items).unwrap(), &config).unwrap();
//! for line in table.lines() {
//!     assert_eq!(standout_table::display_width(line), 40);
//! }
//! println!("{}", table);
//! ```
//!
//! ## Styling
//!
//! Each data cell's style is merged from, in increasing precedence:
//!
//! 1. the theme's cell style (or alternating-row style)
//! 2. the row style callback
//! 3. the column's static style
//! 4. the column's cell style callback
//!
//! Attributes a layer leaves unset fall through from the layers below it.
//! Formatters that return [`CellText::styled`] opt their cell out of the
//! chain entirely.
//!
//! ```rust
//! use console::Color;
//! use standout_table::style::Style;
//! use standout_table::{render, ColumnSpec, Columns, TableConfig};
//!
//! let source = Columns::new()
//!     .column("task", ["write docs", "ship"])
//!     .column("late", [true, false]);
//!
//! let config = TableConfig::new()
//!     .alternating_rows(true)
//!     .row_style(|row: &standout_table::Row| {
//!         (row["late"] == true).then(|| Style::new().fg(Color::Red))
//!     })
//!     .column(ColumnSpec::new("task").style(Style::new().bold()));
//!
//! let table = render(&source, &config).unwrap();
//! assert!(table.contains("\x1b[31m"));
//! ```
//!
//! ## Configuration Files
//!
//! Everything except callbacks loads from YAML with
//! [`TableConfig::from_yaml`]; see [`TableConfig`] for the schema.
//!
//! ## Logging
//!
//! Width resolution and rendering emit `tracing` events at `debug` and
//! `trace` level. Nothing is logged unless the application installs a
//! subscriber.

mod config;
mod error;
pub mod source;
pub mod style;
pub mod tabular;
pub mod theme;
mod util;

// Error types
pub use error::{Result, TableError};

// Data
pub use source::{CellValue, Columns, Records, Row, RowSource};

// Styling
pub use style::{CellText, StyleOutput};
pub use theme::{Theme, ThemeOverrides};

// Configuration
pub use config::{TableConfig, DEFAULT_TRUNCATION_MARKER};

// Layout and rendering
pub use tabular::{
    align_and_truncate, render, Align, BorderOverrides, BorderSpec, BorderStyle, ColumnSpec,
    FooterInfo, Padding, RowWindow,
};

// Text utilities
pub use util::{display_width, rgb_to_ansi256, truncate_end, truncate_to_display_width};
