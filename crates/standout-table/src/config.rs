//! Table configuration.
//!
//! [`TableConfig`] gathers everything a render needs besides the data:
//! width budget, padding, pagination, border glyphs, theme, per-column
//! settings and callbacks.
//!
//! # Builder
//!
//! ```rust
//! use standout_table::{BorderStyle, ColumnSpec, TableConfig};
//!
//! let config = TableConfig::new()
//!     .width(60)
//!     .border_style(BorderStyle::Double)
//!     .alternating_rows(true)
//!     .limit(20)
//!     .column(ColumnSpec::new("name").flex_grow(1))
//!     .column(ColumnSpec::new("price").right());
//! ```
//!
//! # From YAML
//!
//! All settings except callbacks can be loaded from YAML. Callbacks are
//! attached afterwards with [`TableConfig::configure_column`],
//! [`TableConfig::row_style`] and [`TableConfig::footer`].
//!
//! ```rust
//! use standout_table::{CellText, TableConfig};
//!
//! let config = TableConfig::from_yaml(r#"
//! width: 72
//! truncation_marker: "..."
//! border: rounded
//! theme:
//!   header:
//!     fg: cyan
//! columns:
//!   - key: price
//!     header: Price
//!     align: right
//!     max_width: 10
//! "#)
//! .unwrap()
//! .configure_column("price", |col| {
//!     col.formatter(|v: &serde_json::Value, _row: usize| {
//!         CellText::plain(format!("{:.2}", v.as_f64().unwrap_or(0.0)))
//!     })
//! });
//! assert_eq!(config.available_width, Some(72));
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Result, TableError};
use crate::source::Row;
use crate::style::{Style, StyleOutput};
use crate::tabular::{
    Align, BorderOverrides, BorderSpec, BorderStyle, ColumnSpec, FooterInfo, FooterText, Padding,
    RowStyler,
};
use crate::theme::{Theme, ThemeOverrides};

/// Default text appended to truncated cells.
pub const DEFAULT_TRUNCATION_MARKER: &str = "…";

/// Everything a render needs besides the row source.
#[derive(Clone)]
pub struct TableConfig {
    /// Total line width to fit, borders included. `None` renders at natural
    /// width.
    pub available_width: Option<usize>,
    /// Padding for columns without their own override.
    pub padding: Padding,
    pub truncation_marker: String,
    /// First source row to display.
    pub offset: usize,
    /// Maximum number of rows to display.
    pub limit: Option<usize>,
    pub border: BorderSpec,
    pub theme: Theme,
    /// Layer the theme's alternating style over every other displayed row.
    pub alternating_rows: bool,
    pub style_output: StyleOutput,
    /// Per-column settings, matched to source columns by key.
    pub columns: Vec<ColumnSpec>,
    pub row_style: Option<Arc<dyn RowStyler>>,
    pub footer: Option<Arc<dyn FooterText>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            available_width: None,
            padding: Padding::default(),
            truncation_marker: DEFAULT_TRUNCATION_MARKER.to_string(),
            offset: 0,
            limit: None,
            border: BorderSpec::default(),
            theme: Theme::default(),
            alternating_rows: false,
            style_output: StyleOutput::default(),
            columns: Vec::new(),
            row_style: None,
            footer: None,
        }
    }
}

impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("available_width", &self.available_width)
            .field("padding", &self.padding)
            .field("truncation_marker", &self.truncation_marker)
            .field("offset", &self.offset)
            .field("limit", &self.limit)
            .field("border", &self.border)
            .field("theme", &self.theme)
            .field("alternating_rows", &self.alternating_rows)
            .field("style_output", &self.style_output)
            .field("columns", &self.columns)
            .field("row_style", &self.row_style.is_some())
            .field("footer", &self.footer.is_some())
            .finish()
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the available width budget.
    pub fn width(mut self, width: usize) -> Self {
        self.available_width = Some(width);
        self
    }

    /// Set the default cell padding.
    pub fn padding(mut self, left: usize, right: usize) -> Self {
        self.padding = Padding::new(left, right);
        self
    }

    pub fn truncation_marker(mut self, marker: impl Into<String>) -> Self {
        self.truncation_marker = marker.into();
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn border(mut self, border: BorderSpec) -> Self {
        self.border = border;
        self
    }

    /// Use a preset glyph set.
    pub fn border_style(self, style: BorderStyle) -> Self {
        self.border(style.spec())
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Merge slot overrides onto the current theme.
    pub fn theme_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        self.theme = self.theme.with_overrides(overrides);
        self
    }

    pub fn alternating_rows(mut self, enabled: bool) -> Self {
        self.alternating_rows = enabled;
        self
    }

    pub fn style_output(mut self, output: StyleOutput) -> Self {
        self.style_output = output;
        self
    }

    /// Add a column spec, replacing any existing spec with the same key.
    pub fn column(mut self, column: ColumnSpec) -> Self {
        match self.columns.iter_mut().find(|c| c.key == column.key) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        self
    }

    /// Edit the spec for `key`, starting from a default spec if none exists.
    pub fn configure_column<F>(mut self, key: &str, configure: F) -> Self
    where
        F: FnOnce(ColumnSpec) -> ColumnSpec,
    {
        let position = self.columns.iter().position(|c| c.key == key);
        let current = match position {
            Some(index) => self.columns.remove(index),
            None => ColumnSpec::new(key),
        };
        let updated = configure(current);
        match position {
            Some(index) => self.columns.insert(index, updated),
            None => self.columns.push(updated),
        }
        self
    }

    /// Set the row-level conditional style. The callback sees the displayed
    /// columns of the row, keyed by column name.
    pub fn row_style<F>(mut self, styler: F) -> Self
    where
        F: Fn(&Row) -> Option<Style> + Send + Sync + 'static,
    {
        self.row_style = Some(Arc::new(styler));
        self
    }

    /// Set the footer text callback. A footer line is drawn only when set.
    pub fn footer<F>(mut self, footer: F) -> Self
    where
        F: Fn(&FooterInfo) -> String + Send + Sync + 'static,
    {
        self.footer = Some(Arc::new(footer));
        self
    }

    /// The spec for `key`, if one was configured.
    pub fn column_spec(&self, key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Loads configuration from YAML.
    ///
    /// # Errors
    ///
    /// [`TableError::Parse`] for malformed YAML, unknown fields or invalid
    /// colors; [`TableError::Negative`] for negative widths or padding.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        raw.into_config()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    width: Option<i64>,
    padding: Option<RawPadding>,
    truncation_marker: Option<String>,
    offset: Option<i64>,
    limit: Option<i64>,
    border: Option<BorderStyle>,
    border_glyphs: Option<BorderOverrides>,
    theme: Option<ThemeOverrides>,
    alternating_rows: Option<bool>,
    style_output: Option<StyleOutput>,
    columns: Vec<RawColumn>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPadding {
    left: i64,
    right: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColumn {
    key: String,
    #[serde(default)]
    header: Option<String>,
    #[serde(default)]
    align: Option<Align>,
    #[serde(default)]
    min_width: Option<i64>,
    #[serde(default)]
    max_width: Option<i64>,
    #[serde(default)]
    flex_grow: Option<i64>,
    #[serde(default)]
    padding: Option<RawPadding>,
    #[serde(default)]
    style: Option<Style>,
    #[serde(default)]
    header_style: Option<Style>,
}

fn non_negative(field: impl Into<String>, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| TableError::Negative {
        field: field.into(),
        value,
    })
}

impl RawPadding {
    fn resolve(&self, owner: &str) -> Result<Padding> {
        Ok(Padding::new(
            non_negative(format!("{}padding.left", owner), self.left)?,
            non_negative(format!("{}padding.right", owner), self.right)?,
        ))
    }
}

impl RawConfig {
    fn into_config(self) -> Result<TableConfig> {
        let mut config = TableConfig::default();

        if let Some(width) = self.width {
            config.available_width = Some(non_negative("width", width)?);
        }
        if let Some(padding) = &self.padding {
            config.padding = padding.resolve("")?;
        }
        if let Some(marker) = self.truncation_marker {
            config.truncation_marker = marker;
        }
        if let Some(offset) = self.offset {
            // Offsets before the first row start at the first row.
            config.offset = usize::try_from(offset).unwrap_or(0);
        }
        if let Some(limit) = self.limit {
            config.limit = Some(non_negative("limit", limit)?);
        }
        let border = self.border.unwrap_or_default().spec();
        config.border = match &self.border_glyphs {
            Some(overrides) => border.with_overrides(overrides)?,
            None => border,
        };
        if let Some(theme) = &self.theme {
            config.theme = config.theme.with_overrides(theme);
        }
        config.alternating_rows = self.alternating_rows.unwrap_or(false);
        config.style_output = self.style_output.unwrap_or_default();

        for raw in self.columns {
            let column = raw.into_column()?;
            config = config.column(column);
        }

        Ok(config)
    }
}

impl RawColumn {
    fn into_column(self) -> Result<ColumnSpec> {
        let owner = format!("columns.{}.", self.key);
        let mut column = ColumnSpec::new(self.key.clone());
        column.header = self.header;
        column.align = self.align.unwrap_or_default();
        if let Some(min) = self.min_width {
            column.min_width = Some(non_negative(format!("{}min_width", owner), min)?);
        }
        if let Some(max) = self.max_width {
            column.max_width = Some(non_negative(format!("{}max_width", owner), max)?);
        }
        if let Some(flex) = self.flex_grow {
            column.flex_grow = non_negative(format!("{}flex_grow", owner), flex)?;
        }
        if let Some(padding) = &self.padding {
            column.padding = Some(padding.resolve(&owner)?);
        }
        column.style = self.style;
        column.header_style = self.header_style;
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Color;

    #[test]
    fn defaults() {
        let config = TableConfig::new();
        assert_eq!(config.available_width, None);
        assert_eq!(config.padding, Padding::new(1, 1));
        assert_eq!(config.truncation_marker, "…");
        assert_eq!(config.offset, 0);
        assert_eq!(config.limit, None);
        assert_eq!(config.border, BorderStyle::Single.spec());
        assert_eq!(config.theme, Theme::default());
        assert!(!config.alternating_rows);
        assert_eq!(config.style_output, StyleOutput::Ansi);
    }

    #[test]
    fn column_replaces_same_key() {
        let config = TableConfig::new()
            .column(ColumnSpec::new("a").header("First"))
            .column(ColumnSpec::new("b"))
            .column(ColumnSpec::new("a").header("Second"));
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.column_spec("a").unwrap().label(), "Second");
    }

    #[test]
    fn configure_column_keeps_position_and_settings() {
        let config = TableConfig::new()
            .column(ColumnSpec::new("a").min_width(4))
            .column(ColumnSpec::new("b"))
            .configure_column("a", |c| c.right());
        assert_eq!(config.columns[0].key, "a");
        assert_eq!(config.columns[0].min_width, Some(4));
        assert_eq!(config.columns[0].align, Align::Right);

        let config = config.configure_column("c", |c| c.flex_grow(2));
        assert_eq!(config.column_spec("c").unwrap().flex_grow, 2);
    }

    #[test]
    fn from_yaml_full() {
        let config = TableConfig::from_yaml(
            r#"
width: 80
padding: { left: 2, right: 0 }
truncation_marker: "..."
offset: 3
limit: 5
border: double
border_glyphs:
  cell_separator: "|"
theme:
  footer:
    fg: yellow
alternating_rows: true
style_output: plain
columns:
  - key: name
    header: Name
    align: center
    min_width: 4
    max_width: 20
    flex_grow: 2
    padding: { left: 0, right: 1 }
    style: { fg: green }
    header_style: { underline: true }
"#,
        )
        .unwrap();

        assert_eq!(config.available_width, Some(80));
        assert_eq!(config.padding, Padding::new(2, 0));
        assert_eq!(config.truncation_marker, "...");
        assert_eq!((config.offset, config.limit), (3, Some(5)));
        assert_eq!(config.border.vertical, '║');
        assert_eq!(config.border.cell_separator, '|');
        assert_eq!(config.theme.footer, Style::new().dim().fg(Color::Yellow));
        assert!(config.alternating_rows);
        assert_eq!(config.style_output, StyleOutput::Plain);

        let name = config.column_spec("name").unwrap();
        assert_eq!(name.label(), "Name");
        assert_eq!(name.align, Align::Center);
        assert_eq!((name.min_width, name.max_width), (Some(4), Some(20)));
        assert_eq!(name.flex_grow, 2);
        assert_eq!(name.padding, Some(Padding::new(0, 1)));
        assert_eq!(name.style, Some(Style::new().fg(Color::Green)));
        assert_eq!(name.header_style, Some(Style::new().underline()));
    }

    #[test]
    fn from_yaml_negative_width_is_rejected() {
        let err = TableConfig::from_yaml("width: -3").unwrap_err();
        assert_eq!(
            err,
            TableError::Negative {
                field: "width".to_string(),
                value: -3
            }
        );
    }

    #[test]
    fn from_yaml_negative_column_padding_is_rejected() {
        let err = TableConfig::from_yaml(
            "columns:\n  - key: a\n    padding: { left: -1, right: 1 }\n",
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Negative { ref field, .. } if field == "columns.a.padding.left"));
    }

    #[test]
    fn from_yaml_negative_offset_starts_at_first_row() {
        let config = TableConfig::from_yaml("offset: -4").unwrap();
        assert_eq!(config.offset, 0);
    }

    #[test]
    fn from_yaml_unknown_field_is_rejected() {
        assert!(matches!(
            TableConfig::from_yaml("colour: red"),
            Err(TableError::Parse(_))
        ));
    }

    #[test]
    fn from_yaml_invalid_color_is_rejected() {
        let err = TableConfig::from_yaml("theme:\n  header:\n    fg: octarine\n").unwrap_err();
        assert!(err.to_string().contains("octarine"));
    }

    #[test]
    fn from_yaml_wide_border_glyph_is_rejected() {
        let err = TableConfig::from_yaml("border_glyphs:\n  vertical: \"日\"\n").unwrap_err();
        assert!(matches!(err, TableError::Parse(ref msg) if msg.contains("vertical")));
    }

    #[test]
    fn from_yaml_empty_mapping_is_default() {
        let config = TableConfig::from_yaml("{}").unwrap();
        assert_eq!(config.available_width, None);
        assert!(config.columns.is_empty());
    }
}
