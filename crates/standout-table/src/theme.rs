//! Table themes.
//!
//! A [`Theme`] has four style slots: the header row, regular data rows,
//! every other displayed row when alternating shading is on, and the footer.
//!
//! Overrides are merged attribute by attribute onto the built-in defaults,
//! so overriding the header's color keeps it bold:
//!
//! ```rust
//! use standout_table::{Theme, ThemeOverrides};
//! use standout_table::style::Style;
//! use console::Color;
//!
//! let theme = Theme::default().with_overrides(&ThemeOverrides {
//!     header: Some(Style::new().fg(Color::Cyan)),
//!     ..Default::default()
//! });
//! assert_eq!(theme.header, Style::new().bold().fg(Color::Cyan));
//! ```
//!
//! # From YAML
//!
//! ```rust
//! use standout_table::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! header:
//!   fg: cyan
//! alternating_cell:
//!   bg: "#303030"
//! "##).unwrap();
//! assert_eq!(theme.header.bold, Some(true));
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::style::Style;

/// Styles for the four table regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header row cells.
    pub header: Style,
    /// Data row cells.
    pub cell: Style,
    /// Layered over `cell` on odd displayed rows when alternating shading is on.
    pub alternating_cell: Style,
    /// The footer line.
    pub footer: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header: Style::new().bold(),
            cell: Style::new(),
            alternating_cell: Style::new().dim(),
            footer: Style::new().dim(),
        }
    }
}

/// Optional per-slot overrides, as supplied by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    pub header: Option<Style>,
    pub cell: Option<Style>,
    pub alternating_cell: Option<Style>,
    pub footer: Option<Style>,
}

impl Theme {
    /// A theme with every slot unstyled.
    pub fn plain() -> Self {
        Theme {
            header: Style::new(),
            cell: Style::new(),
            alternating_cell: Style::new(),
            footer: Style::new(),
        }
    }

    /// Built-in defaults with `yaml` overrides merged in.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let overrides: ThemeOverrides = serde_yaml::from_str(yaml)?;
        Ok(Theme::default().with_overrides(&overrides))
    }

    /// Merges each override slot onto the matching slot of `self`.
    pub fn with_overrides(&self, overrides: &ThemeOverrides) -> Self {
        let slot = |base: &Style, over: &Option<Style>| match over {
            Some(over) => base.merge(over),
            None => *base,
        };
        Theme {
            header: slot(&self.header, &overrides.header),
            cell: slot(&self.cell, &overrides.cell),
            alternating_cell: slot(&self.alternating_cell, &overrides.alternating_cell),
            footer: slot(&self.footer, &overrides.footer),
        }
    }

    /// The base style for a data row at `display_index` within the window.
    pub fn row_style(&self, display_index: usize, alternating: bool) -> Style {
        if alternating && display_index % 2 == 1 {
            self.cell.merge(&self.alternating_cell)
        } else {
            self.cell
        }
    }

    pub fn header(mut self, style: Style) -> Self {
        self.header = style;
        self
    }

    pub fn cell(mut self, style: Style) -> Self {
        self.cell = style;
        self
    }

    pub fn alternating_cell(mut self, style: Style) -> Self {
        self.alternating_cell = style;
        self
    }

    pub fn footer(mut self, style: Style) -> Self {
        self.footer = style;
        self
    }
}
