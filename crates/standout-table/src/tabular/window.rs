//! Pagination: which rows of the source are rendered.

use std::ops::Range;

/// The contiguous slice `[start, end)` of the row source that is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowWindow {
    pub start: usize,
    pub end: usize,
}

impl RowWindow {
    /// Window for `offset`/`limit` over `total` rows.
    ///
    /// An offset past the end yields an empty window starting at `total`, so
    /// `start <= end` always holds. No limit shows every remaining row.
    ///
    /// ```rust
    /// use standout_table::RowWindow;
    ///
    /// let window = RowWindow::new(1, Some(1), 2);
    /// assert_eq!(window.range(), 1..2);
    /// assert!(RowWindow::new(5, None, 2).is_empty());
    /// ```
    pub fn new(offset: usize, limit: Option<usize>, total: usize) -> Self {
        let start = offset.min(total);
        let end = match limit {
            Some(limit) => total.min(start.saturating_add(limit)),
            None => total,
        };
        RowWindow { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Summary handed to the footer callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterInfo {
    pub total_rows: usize,
    pub displayed_rows: usize,
    /// True when the configured row limit is smaller than the row count.
    pub is_truncated: bool,
    /// The offset, clamped to `total_rows` so that `start_row <= end_row`.
    pub start_row: usize,
    pub end_row: usize,
}

impl FooterInfo {
    pub fn new(window: RowWindow, limit: Option<usize>, total: usize) -> Self {
        FooterInfo {
            total_rows: total,
            displayed_rows: window.len(),
            is_truncated: limit.is_some_and(|limit| limit < total),
            start_row: window.start,
            end_row: window.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_to_everything() {
        let window = RowWindow::new(0, None, 10);
        assert_eq!(window.range(), 0..10);
        assert_eq!(window.len(), 10);
    }

    #[test]
    fn window_offset_and_limit() {
        let window = RowWindow::new(3, Some(4), 10);
        assert_eq!(window.range(), 3..7);
    }

    #[test]
    fn window_limit_clipped_to_total() {
        assert_eq!(RowWindow::new(8, Some(5), 10).range(), 8..10);
    }

    #[test]
    fn window_offset_past_end_is_empty() {
        let window = RowWindow::new(12, Some(5), 10);
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.start, 10);
    }

    #[test]
    fn footer_info_clamps_start_past_end() {
        let info = FooterInfo::new(RowWindow::new(12, Some(5), 10), Some(5), 10);
        assert_eq!((info.start_row, info.end_row), (10, 10));
        assert_eq!(info.displayed_rows, 0);
    }

    #[test]
    fn window_zero_limit_is_empty() {
        assert!(RowWindow::new(0, Some(0), 10).is_empty());
    }

    #[test]
    fn footer_info_truncation_flag() {
        let window = RowWindow::new(0, Some(5), 10);
        let info = FooterInfo::new(window, Some(5), 10);
        assert!(info.is_truncated);
        assert_eq!(info.displayed_rows, 5);
        assert_eq!((info.start_row, info.end_row), (0, 5));

        let window = RowWindow::new(0, Some(50), 10);
        assert!(!FooterInfo::new(window, Some(50), 10).is_truncated);
        assert!(!FooterInfo::new(RowWindow::new(0, None, 10), None, 10).is_truncated);
    }
}
