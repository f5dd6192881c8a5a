//! Error types for table rendering.
//!
//! Rendering either succeeds completely or fails before any output is
//! produced. Conditions with a defined fallback (a budget too small for the
//! column minimums, an offset past the last row) are not errors.

use thiserror::Error;

/// Errors that can occur while configuring or rendering a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The row source was asked for a row outside `0..len`.
    #[error("row index {index} out of range (row count is {len})")]
    RowRange { index: usize, len: usize },

    /// A column's effective minimum width exceeds its maximum width.
    #[error("column '{column}': minimum width {min} exceeds maximum width {max}")]
    MinExceedsMax {
        column: String,
        min: usize,
        max: usize,
    },

    /// A width or padding value in loaded configuration was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: i64 },

    /// Configuration could not be parsed.
    #[error("invalid table configuration: {0}")]
    Parse(String),
}

impl TableError {
    /// Returns true for errors caused by invalid configuration rather than
    /// by the row source.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, TableError::RowRange { .. })
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Parse(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_range_display() {
        let err = TableError::RowRange { index: 5, len: 2 };
        let msg = err.to_string();
        assert!(msg.contains("row index 5"));
        assert!(msg.contains("row count is 2"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn min_exceeds_max_display() {
        let err = TableError::MinExceedsMax {
            column: "name".to_string(),
            min: 10,
            max: 4,
        };
        assert!(err.to_string().contains("'name'"));
        assert!(err.is_configuration());
    }

    #[test]
    fn from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let err: TableError = yaml_err.into();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
