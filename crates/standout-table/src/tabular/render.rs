//! Table assembly: the single pass from row source to output text.
//!
//! [`render`] reads the display window once, formats every cell, resolves the
//! column widths, then emits the frame line by line:
//!
//! ```text
//! ┌────┬──────┐   top border
//! │ id │ name │   header
//! ├────┼──────┤   header separator
//! │ 1  │ a    │   data rows
//! ├────┴──────┤   footer separator (only with a footer)
//! │ 1 row     │   footer
//! └───────────┘   bottom border
//! ```

use crate::config::TableConfig;
use crate::error::Result;
use crate::source::{CellValue, Row, RowSource};
use crate::style::{apply, resolve, CellText, Style};

use super::decorator::LineType;
use super::resolve::{constrain, distribute, ideal_widths, ColumnConstraint};
use super::shape::align_and_truncate;
use super::traits::{CellStyler, FooterText, RowStyler};
use super::types::{Align, ColumnSpec, Padding};
use super::window::{FooterInfo, RowWindow};

/// Shown in place of a table when the source has no columns.
pub const NO_DATA: &str = "(no data)";

static NULL: CellValue = CellValue::Null;

/// One windowed source row, read once.
struct WindowRow {
    index: usize,
    values: Vec<CellValue>,
    /// Keyed view of `values`, built only when a row style is configured.
    raw: Option<Row>,
    cells: Vec<CellText>,
}

/// Renders `source` as a bordered table.
///
/// Rows are read by index, in increasing order, and only inside the window
/// selected by `offset` and `limit`. Output lines are joined with `\n` and
/// have no trailing newline.
///
/// ```rust
/// use standout_table::{render, Columns, StyleOutput, TableConfig};
///
/// let source = Columns::new()
///     .column("id", [1, 2])
///     .column("name", ["a", "bb"]);
/// let config = TableConfig::new().style_output(StyleOutput::Plain);
///
/// let table = render(&source, &config).unwrap();
/// assert_eq!(
///     table,
///     "┌────┬──────┐\n\
///      │ id │ name │\n\
///      ├────┼──────┤\n\
///      │ 1  │ a    │\n\
///      │ 2  │ bb   │\n\
///      └────┴──────┘"
/// );
/// ```
///
/// # Errors
///
/// - [`TableError::RowRange`](crate::TableError::RowRange) from the row source.
/// - [`TableError::MinExceedsMax`](crate::TableError::MinExceedsMax) for an
///   inconsistent column configuration.
/// - [`TableError::Parse`](crate::TableError::Parse) for a border glyph that is
///   not one column wide.
pub fn render<S: RowSource + ?Sized>(source: &S, config: &TableConfig) -> Result<String> {
    config.border.validate()?;
    let keys = source.column_names();
    if keys.is_empty() {
        tracing::debug!("row source has no columns");
        return Ok(apply(NO_DATA, &config.theme.footer, config.style_output));
    }

    let total = source.row_count();
    let window = RowWindow::new(config.offset, config.limit, total);
    tracing::debug!(
        columns = keys.len(),
        total,
        start = window.start,
        end = window.end,
        "rendering table"
    );

    let specs: Vec<ColumnSpec> = keys
        .iter()
        .map(|key| {
            config
                .column_spec(key)
                .cloned()
                .unwrap_or_else(|| ColumnSpec::new(key.clone()))
        })
        .collect();

    let rows = read_window(source, window, &keys, &specs, config)?;

    let headers: Vec<&str> = specs.iter().map(ColumnSpec::label).collect();
    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.cells.iter().map(CellText::as_str).collect())
        .collect();
    let ideal = ideal_widths(&headers, &cells);

    let constraints: Vec<ColumnConstraint> = specs
        .iter()
        .map(|spec| spec.constraint(config.padding))
        .collect();
    let widths = match config.available_width {
        Some(available) => distribute(&ideal, available, &constraints)?,
        None => constrain(&ideal, &constraints)?,
    };
    tracing::debug!(widths = ?widths.widths, "resolved column widths");

    let layout = Layout {
        specs: &specs,
        widths: &widths.widths,
        paddings: constraints.iter().map(|c| c.padding).collect(),
        config,
    };
    let spans = layout.spans();
    let border = &config.border;

    let mut lines = Vec::with_capacity(rows.len() + 6);
    lines.push(border.horizontal_line(LineType::Top, &spans));
    lines.push(border.wrap_row(&layout.header_cells(&headers)));
    lines.push(border.horizontal_line(LineType::HeaderSeparator, &spans));

    if rows.is_empty() {
        let blank: Vec<String> = spans.iter().map(|&span| " ".repeat(span)).collect();
        lines.push(border.wrap_row(&blank));
    }
    for (display_index, row) in rows.iter().enumerate() {
        lines.push(border.wrap_row(&layout.data_cells(display_index, row)));
    }

    match &config.footer {
        Some(footer) => {
            let info = FooterInfo::new(window, config.limit, total);
            let inner = spans.iter().sum::<usize>() + spans.len() - 1;
            let text = footer.text(&info);
            let content = align_and_truncate(
                &text,
                inner.saturating_sub(1),
                Align::Left,
                Padding::new(1, 0),
                &config.truncation_marker,
            );
            lines.push(border.horizontal_line(LineType::FooterSeparator, &spans));
            lines.push(border.wrap_full(&apply(
                &content,
                &config.theme.footer,
                config.style_output,
            )));
            lines.push(border.plain_bottom(inner));
        }
        None => lines.push(border.horizontal_line(LineType::Bottom, &spans)),
    }

    Ok(lines.join("\n"))
}

fn read_window<S: RowSource + ?Sized>(
    source: &S,
    window: RowWindow,
    keys: &[String],
    specs: &[ColumnSpec],
    config: &TableConfig,
) -> Result<Vec<WindowRow>> {
    let mut rows = Vec::with_capacity(window.len());
    for index in window.range() {
        let values = source.row_values(index)?;
        let raw: Option<Row> = config
            .row_style
            .as_ref()
            .map(|_| keys.iter().cloned().zip(values.iter().cloned()).collect());
        let cells = specs
            .iter()
            .enumerate()
            .map(|(col, spec)| spec.format(values.get(col).unwrap_or(&NULL), index))
            .collect();
        rows.push(WindowRow {
            index,
            values,
            raw,
            cells,
        });
    }
    Ok(rows)
}

/// Resolved geometry shared by every line of one render.
struct Layout<'a> {
    specs: &'a [ColumnSpec],
    widths: &'a [usize],
    paddings: Vec<Padding>,
    config: &'a TableConfig,
}

impl Layout<'_> {
    /// Full cell widths, padding included.
    fn spans(&self) -> Vec<usize> {
        self.widths
            .iter()
            .zip(&self.paddings)
            .map(|(width, padding)| width + padding.total())
            .collect()
    }

    fn shape(&self, col: usize, text: &str) -> String {
        align_and_truncate(
            text,
            self.widths[col],
            self.specs[col].align,
            self.paddings[col],
            &self.config.truncation_marker,
        )
    }

    fn header_cells(&self, headers: &[&str]) -> Vec<String> {
        headers
            .iter()
            .enumerate()
            .map(|(col, label)| {
                let shaped = self.shape(col, label);
                if shaped.trim().is_empty() {
                    return shaped;
                }
                let style = match &self.specs[col].header_style {
                    Some(over) => self.config.theme.header.merge(over),
                    None => self.config.theme.header,
                };
                apply(&shaped, &style, self.config.style_output)
            })
            .collect()
    }

    fn data_cells(&self, display_index: usize, row: &WindowRow) -> Vec<String> {
        let base = self
            .config
            .theme
            .row_style(display_index, self.config.alternating_rows);
        let row_layer: Option<Style> = match (&self.config.row_style, &row.raw) {
            (Some(styler), Some(raw)) => RowStyler::style(&**styler, raw),
            _ => None,
        };

        row.cells
            .iter()
            .enumerate()
            .map(|(col, text)| {
                let shaped = self.shape(col, text.as_str());
                if text.is_pre_styled() {
                    return shaped;
                }
                let spec = &self.specs[col];
                let value = row.values.get(col).unwrap_or(&NULL);
                let cell_layer = spec
                    .cell_style
                    .as_ref()
                    .and_then(|styler| CellStyler::style(&**styler, value));
                let style = resolve(
                    &base,
                    row_layer.as_ref(),
                    spec.style.as_ref(),
                    cell_layer.as_ref(),
                );
                tracing::trace!(row = row.index, col, ?style, "cell style");
                apply(&shaped, &style, self.config.style_output)
            })
            .collect()
    }
}
