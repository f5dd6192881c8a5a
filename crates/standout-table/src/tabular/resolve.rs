//! Width resolution for table columns.
//!
//! Resolution happens in two steps:
//!
//! 1. [`ideal_widths`]: each column's natural width, the widest of its header
//!    and every cell in the display window.
//! 2. [`distribute`]: fit those widths into an available-width budget.
//!    Widths are clamped into `[min, max]`, flexible columns grow into any
//!    slack proportionally to their weight, and when content is too wide the
//!    widest columns give up one column at a time.
//!
//! Growth is iterative integer division rather than a single floating split:
//! a column that reaches its maximum mid-way hands its unused share to the
//! other flexible columns on the next round.
//!
//! ```rust
//! use standout_table::tabular::{distribute, ColumnConstraint};
//!
//! let constraints = vec![
//!     ColumnConstraint::new("id"),
//!     ColumnConstraint::new("name").flex_grow(1),
//! ];
//! // 2 columns: 3 border glyphs + 4 padding, leaving 33 for content.
//! let widths = distribute(&[4, 10], 40, &constraints).unwrap();
//! assert_eq!(widths.widths, vec![4, 29]);
//! ```

use crate::error::{Result, TableError};
use crate::util::display_width;

use super::types::Padding;

/// Width limits and growth weight for one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnConstraint {
    /// Column name, used in error messages.
    pub name: String,
    /// Minimum content width. Values below 1 are treated as 1.
    pub min: usize,
    /// Maximum content width, unbounded when `None`.
    pub max: Option<usize>,
    /// Proportional share of leftover width; 0 means fixed.
    pub flex_grow: usize,
    pub padding: Padding,
}

impl ColumnConstraint {
    /// An unconstrained, fixed column with default padding.
    pub fn new(name: impl Into<String>) -> Self {
        ColumnConstraint {
            name: name.into(),
            min: 1,
            max: None,
            flex_grow: 0,
            padding: Padding::default(),
        }
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn flex_grow(mut self, weight: usize) -> Self {
        self.flex_grow = weight;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn floor(&self) -> usize {
        self.min.max(1)
    }

    fn cap(&self) -> usize {
        self.max.unwrap_or(usize::MAX)
    }

    /// Rejects a minimum that exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        match self.max {
            Some(max) if self.floor() > max => Err(TableError::MinExceedsMax {
                column: self.name.clone(),
                min: self.floor(),
                max,
            }),
            _ => Ok(()),
        }
    }

    fn clamp(&self, width: usize) -> usize {
        width.max(self.floor()).min(self.cap())
    }

    fn can_grow(&self, width: usize) -> bool {
        self.flex_grow > 0 && width < self.cap()
    }
}

/// Resolved content widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns, excluding padding.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without padding or borders).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Full line width: content, padding, and one border glyph per column
    /// boundary plus the two outer walls.
    pub fn line_width(&self, constraints: &[ColumnConstraint]) -> usize {
        let padding: usize = constraints.iter().map(|c| c.padding.total()).sum();
        self.total() + padding + border_overhead(self.len())
    }
}

/// Border glyphs on a row: one between each pair of columns plus two walls.
pub fn border_overhead(columns: usize) -> usize {
    columns + 1
}

/// Natural width of each column: the widest of its header and every cell.
///
/// Rows shorter than the header list contribute nothing to the missing
/// columns.
pub fn ideal_widths<H, C>(headers: &[H], rows: &[Vec<C>]) -> Vec<usize>
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h.as_ref())).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell.as_ref()));
        }
    }

    widths
}

/// Clamps ideal widths into each column's `[min, max]` range.
///
/// This is what a table without a width budget uses.
pub fn constrain(ideal: &[usize], constraints: &[ColumnConstraint]) -> Result<ResolvedWidths> {
    let mut widths = Vec::with_capacity(constraints.len());
    for (i, constraint) in constraints.iter().enumerate() {
        constraint.validate()?;
        widths.push(constraint.clamp(ideal.get(i).copied().unwrap_or(0)));
    }
    Ok(ResolvedWidths { widths })
}

/// Fits ideal widths into an `available` line width.
///
/// `available` covers the whole line: borders, padding and content. When the
/// column minimums alone exceed it, every column ends at its minimum and the
/// table is wider than requested.
///
/// # Errors
///
/// [`TableError::MinExceedsMax`] when a column's minimum exceeds its maximum.
pub fn distribute(
    ideal: &[usize],
    available: usize,
    constraints: &[ColumnConstraint],
) -> Result<ResolvedWidths> {
    let mut resolved = constrain(ideal, constraints)?;

    let padding: usize = constraints.iter().map(|c| c.padding.total()).sum();
    let budget = available.saturating_sub(border_overhead(constraints.len()) + padding);
    let total = resolved.total();

    tracing::debug!(available, budget, natural = total, "distributing column widths");

    if budget > total {
        grow(&mut resolved.widths, constraints, budget - total);
    }

    let total = resolved.total();
    if total > budget {
        let unresolved = shrink(&mut resolved.widths, constraints, total - budget);
        if unresolved > 0 {
            tracing::debug!(
                unresolved,
                "column minimums exceed the width budget; table overflows"
            );
        }
    }

    Ok(resolved)
}

/// Hands `remaining` columns of slack to flexible columns.
fn grow(widths: &mut [usize], constraints: &[ColumnConstraint], mut remaining: usize) {
    let mut round = 0;

    while remaining > 0 {
        let growable: Vec<usize> = (0..widths.len())
            .filter(|&i| constraints[i].can_grow(widths[i]))
            .collect();
        if growable.is_empty() {
            return;
        }

        let total_weight: usize = growable.iter().map(|&i| constraints[i].flex_grow).sum();
        let shares: Vec<(usize, usize)> = growable
            .iter()
            .map(|&i| {
                let share = (remaining as u128 * constraints[i].flex_grow as u128
                    / total_weight as u128) as usize;
                (i, share.min(constraints[i].cap() - widths[i]))
            })
            .collect();

        let grown: usize = shares.iter().map(|&(_, share)| share).sum();
        for (i, share) in shares {
            widths[i] += share;
        }

        round += 1;
        tracing::trace!(round, grown, remaining, "flex growth round");

        if grown == 0 {
            break;
        }
        remaining -= grown;
    }

    // Rounding leftovers: one column at a time, heaviest weight first.
    while remaining > 0 {
        let mut growable: Vec<usize> = (0..widths.len())
            .filter(|&i| constraints[i].can_grow(widths[i]))
            .collect();
        if growable.is_empty() {
            return;
        }
        growable.sort_by_key(|&i| std::cmp::Reverse(constraints[i].flex_grow));

        for i in growable {
            if remaining == 0 {
                break;
            }
            widths[i] += 1;
            remaining -= 1;
        }
    }
}

/// Removes `excess` columns from the widest shrinkable columns. Returns the
/// excess that could not be removed.
fn shrink(widths: &mut [usize], constraints: &[ColumnConstraint], mut excess: usize) -> usize {
    while excess > 0 {
        let widest = (0..widths.len())
            .filter(|&i| widths[i] > constraints[i].floor())
            .map(|i| widths[i])
            .max();
        let Some(widest) = widest else {
            break;
        };

        for i in 0..widths.len() {
            if excess == 0 {
                break;
            }
            if widths[i] == widest && widths[i] > constraints[i].floor() {
                widths[i] -= 1;
                excess -= 1;
            }
        }
    }
    excess
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(widths: &ResolvedWidths, constraints: &[ColumnConstraint]) -> usize {
        widths.line_width(constraints)
    }

    #[test]
    fn ideal_widths_from_headers_and_rows() {
        let headers = ["id", "name"];
        let rows = vec![vec!["1", "Alice"], vec!["200", "Bo"]];
        assert_eq!(ideal_widths(&headers, &rows), vec![3, 5]);
    }

    #[test]
    fn ideal_widths_empty_window_uses_headers() {
        let headers = ["id", "description"];
        let rows: Vec<Vec<&str>> = vec![];
        assert_eq!(ideal_widths(&headers, &rows), vec![2, 11]);
    }

    #[test]
    fn ideal_widths_measure_display_width() {
        let headers = ["x"];
        let rows = vec![vec!["日本語"], vec!["\x1b[1mbold\x1b[0m"]];
        assert_eq!(ideal_widths(&headers, &rows), vec![6]);
    }

    #[test]
    fn constrain_clamps_to_bounds() {
        let constraints = vec![
            ColumnConstraint::new("a").min(5),
            ColumnConstraint::new("b").max(3),
            ColumnConstraint::new("c"),
        ];
        let resolved = constrain(&[2, 10, 0], &constraints).unwrap();
        assert_eq!(resolved.widths, vec![5, 3, 1]);
    }

    #[test]
    fn min_above_max_is_an_error() {
        let constraints = vec![ColumnConstraint::new("a").min(10).max(4)];
        let err = distribute(&[5], 80, &constraints).unwrap_err();
        assert_eq!(
            err,
            TableError::MinExceedsMax {
                column: "a".to_string(),
                min: 10,
                max: 4
            }
        );
        assert!(constrain(&[5], &constraints).is_err());
    }

    #[test]
    fn zero_max_conflicts_with_implicit_minimum() {
        let constraints = vec![ColumnConstraint::new("a").max(0)];
        assert!(distribute(&[5], 80, &constraints).is_err());
    }

    #[test]
    fn no_flex_content_fits_keeps_ideal() {
        let constraints = vec![ColumnConstraint::new("a"), ColumnConstraint::new("b")];
        let resolved = distribute(&[4, 6], 80, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![4, 6]);
    }

    #[test]
    fn single_flex_column_takes_all_slack() {
        let constraints = vec![
            ColumnConstraint::new("a"),
            ColumnConstraint::new("b").flex_grow(1),
        ];
        let resolved = distribute(&[4, 6], 40, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![4, 29]);
        assert_eq!(line(&resolved, &constraints), 40);
    }

    #[test]
    fn flex_weights_split_proportionally() {
        let constraints = vec![
            ColumnConstraint::new("a").flex_grow(2),
            ColumnConstraint::new("b").flex_grow(1),
        ];
        // overhead 3 + padding 4 => budget 37; natural 2, slack 35
        let resolved = distribute(&[1, 1], 44, &constraints).unwrap();
        // floor(35*2/3)=23, floor(35/3)=11, leftover 1 to the heavier column
        assert_eq!(resolved.widths, vec![25, 12]);
        assert_eq!(line(&resolved, &constraints), 44);
    }

    #[test]
    fn capped_flex_column_redistributes_unused_share() {
        let constraints = vec![
            ColumnConstraint::new("a").flex_grow(1).max(5),
            ColumnConstraint::new("b").flex_grow(1),
        ];
        // budget 37 - 2 natural = 35 slack; a stops at 5, b takes the rest
        let resolved = distribute(&[1, 1], 44, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![5, 32]);
        assert_eq!(line(&resolved, &constraints), 44);
    }

    #[test]
    fn all_flex_columns_capped_leaves_slack() {
        let constraints = vec![
            ColumnConstraint::new("a").flex_grow(1).max(3),
            ColumnConstraint::new("b").flex_grow(2).max(4),
        ];
        let resolved = distribute(&[1, 1], 80, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![3, 4]);
    }

    #[test]
    fn rounding_remainder_goes_to_heaviest_then_leftmost() {
        let constraints = vec![
            ColumnConstraint::new("a").flex_grow(1),
            ColumnConstraint::new("b").flex_grow(1),
            ColumnConstraint::new("c").flex_grow(1),
        ];
        // overhead 4 + padding 6 => budget 5 - 3 natural = 2 slack
        let resolved = distribute(&[1, 1, 1], 15, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![2, 2, 1]);
        assert_eq!(line(&resolved, &constraints), 15);
    }

    #[test]
    fn shrink_takes_from_widest_first() {
        let constraints = vec![
            ColumnConstraint::new("id"),
            ColumnConstraint::new("name"),
            ColumnConstraint::new("price"),
        ];
        // overhead 4 + padding 6 => budget 30
        let resolved = distribute(&[2, 47, 5], 40, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![2, 23, 5]);
        assert_eq!(line(&resolved, &constraints), 40);
    }

    #[test]
    fn shrink_levels_tied_columns() {
        let constraints = vec![ColumnConstraint::new("a"), ColumnConstraint::new("b")];
        // budget 20 - 3 - 4 = 13, natural 20, excess 7
        let resolved = distribute(&[10, 10], 20, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![6, 7]);
    }

    #[test]
    fn shrink_respects_minimums_and_overflows() {
        let constraints = vec![
            ColumnConstraint::new("a").min(10),
            ColumnConstraint::new("b").min(10),
        ];
        let resolved = distribute(&[30, 30], 15, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![10, 10]);
        assert!(line(&resolved, &constraints) > 15);
    }

    #[test]
    fn zero_flex_weight_is_fixed() {
        let constraints = vec![ColumnConstraint::new("a").flex_grow(0)];
        let resolved = distribute(&[3], 50, &constraints).unwrap();
        assert_eq!(resolved.widths, vec![3]);
    }

    #[test]
    fn empty_constraints() {
        let resolved = distribute(&[], 50, &[]).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn resolved_widths_accessors() {
        let resolved = ResolvedWidths {
            widths: vec![10, 20, 30],
        };
        assert_eq!(resolved.get(0), Some(10));
        assert_eq!(resolved.get(3), None);
        assert_eq!(resolved.total(), 60);
        assert_eq!(resolved.len(), 3);
        assert!(!resolved.is_empty());
    }
}
