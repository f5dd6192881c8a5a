//! Table layout: width resolution, cell shaping, borders and assembly.
//!
//! The pieces compose in one direction:
//!
//! - [`ideal_widths`] and [`distribute`] decide each column's content width.
//! - [`align_and_truncate`] fits one cell's text into that width.
//! - [`BorderSpec`] draws the frame around the shaped cells.
//! - [`render`] drives them over a [`RowSource`](crate::RowSource) and a
//!   [`TableConfig`](crate::TableConfig).
//!
//! Most callers only need [`render`] and [`ColumnSpec`]; the lower layers are
//! public for tools that lay out their own lines.
//!
//! ## Width resolution
//!
//! | Setting | Effect |
//! |---------|--------|
//! | `min_width` | Never narrower than this (at least 1) |
//! | `max_width` | Never wider than this; longer content is truncated |
//! | `flex_grow` | Share of leftover width when a budget is set |
//!
//! Without an available width, columns take their natural width, clamped to
//! their min and max.
//!
//! ## Truncation
//!
//! Content wider than its column is cut at the end and marked with the
//! configured marker (default `…`):
//!
//! ```rust
//! use standout_table::{align_and_truncate, Align, Padding};
//!
//! let cell = align_and_truncate("Hello World", 8, Align::Left, Padding::new(0, 0), "…");
//! assert_eq!(cell, "Hello W…");
//! ```

mod decorator;
mod render;
mod resolve;
mod shape;
mod traits;
mod types;
mod window;

pub use decorator::{BorderOverrides, BorderSpec, BorderStyle, LineType};
pub use render::{render, NO_DATA};
pub use resolve::{
    border_overhead, constrain, distribute, ideal_widths, ColumnConstraint, ResolvedWidths,
};
pub use shape::align_and_truncate;
pub use traits::{CellFormatter, CellStyler, FooterText, RowStyler};
pub use types::{stringify, Align, ColumnSpec, Padding};
pub use window::{FooterInfo, RowWindow};
