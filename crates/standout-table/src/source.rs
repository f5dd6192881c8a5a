//! Row sources: the data a table renders.
//!
//! Rendering reads rows through the [`RowSource`] trait, one row at a time in
//! increasing index order, and only within the display window. Two in-memory
//! adapters are provided:
//!
//! - [`Records`]: a list of keyed records, e.g. any `Serialize` struct slice.
//! - [`Columns`]: named column vectors.
//!
//! ```rust
//! use serde::Serialize;
//! use standout_table::{Records, RowSource};
//!
//! #[derive(Serialize)]
//! struct Item { id: u32, name: String }
//!
//! let items = vec![Item { id: 1, name: "Widget".into() }];
//! let source = Records::from_serialize(&items).unwrap();
//! assert_eq!(source.column_names(), vec!["id", "name"]);
//! assert_eq!(source.row_count(), 1);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, TableError};

/// A raw cell value: text, number, boolean, null, or structured data.
pub type CellValue = Value;

/// One row as a key → raw value mapping.
pub type Row = Map<String, Value>;

/// Indexed access to tabular data.
pub trait RowSource {
    /// Column keys, in display order.
    fn column_names(&self) -> Vec<String>;

    fn row_count(&self) -> usize;

    /// The row's values aligned with [`column_names`](RowSource::column_names).
    ///
    /// # Errors
    ///
    /// [`TableError::RowRange`] when `index >= row_count()`.
    fn row_values(&self, index: usize) -> Result<Vec<CellValue>>;

    /// The row as a keyed mapping. Defaults to the displayed columns paired
    /// with [`row_values`](RowSource::row_values).
    ///
    /// # Errors
    ///
    /// [`TableError::RowRange`] when `index >= row_count()`.
    fn row_map(&self, index: usize) -> Result<Row> {
        let values = self.row_values(index)?;
        Ok(self.column_names().into_iter().zip(values).collect())
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(TableError::RowRange { index, len })
    }
}

/// Row-oriented records. Columns are the union of record keys in first-seen
/// order; keys missing from a record read as null.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Records {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Records {
    pub fn new(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Records { columns, rows }
    }

    /// Builds records from serializable items.
    ///
    /// Items that serialize to a non-object value become a single `value`
    /// column.
    ///
    /// # Errors
    ///
    /// [`TableError::Parse`] when an item fails to serialize.
    pub fn from_serialize<T: Serialize>(items: &[T]) -> Result<Self> {
        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let value =
                serde_json::to_value(item).map_err(|e| TableError::Parse(e.to_string()))?;
            rows.push(match value {
                Value::Object(map) => map,
                other => {
                    let mut map = Map::new();
                    map.insert("value".to_string(), other);
                    map
                }
            });
        }
        Ok(Records::new(rows))
    }

    /// Restricts and reorders the displayed columns.
    pub fn with_columns<S: Into<String>, I: IntoIterator<Item = S>>(mut self, columns: I) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

impl RowSource for Records {
    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_values(&self, index: usize) -> Result<Vec<CellValue>> {
        check_index(index, self.rows.len())?;
        let row = &self.rows[index];
        Ok(self
            .columns
            .iter()
            .map(|key| row.get(key).cloned().unwrap_or(Value::Null))
            .collect())
    }

    /// The full record, including keys hidden by
    /// [`with_columns`](Records::with_columns).
    fn row_map(&self, index: usize) -> Result<Row> {
        check_index(index, self.rows.len())?;
        Ok(self.rows[index].clone())
    }
}

/// Column-oriented data. The row count is the longest column; shorter
/// columns read as null past their end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
    columns: Vec<(String, Vec<Value>)>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named column.
    pub fn column<V: Into<Value>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.columns
            .push((name.into(), values.into_iter().map(Into::into).collect()));
        self
    }
}

impl RowSource for Columns {
    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(name, _)| name.clone()).collect()
    }

    fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0)
    }

    fn row_values(&self, index: usize) -> Result<Vec<CellValue>> {
        check_index(index, self.row_count())?;
        Ok(self
            .columns
            .iter()
            .map(|(_, values)| values.get(index).cloned().unwrap_or(Value::Null))
            .collect())
    }
}
