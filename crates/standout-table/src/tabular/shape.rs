//! Fitting one cell's text into its column.
//!
//! The result of [`align_and_truncate`] always has a display width of exactly
//! `width + padding.left + padding.right`, measured with the same metric the
//! width resolver uses.

use crate::util::{display_width, truncate_end};

use super::types::{Align, Padding};

/// Truncates `text` to `width` (ending in `marker` when cut), aligns it within
/// `width`, and surrounds it with padding.
///
/// When `width` is narrower than the marker, only a clipped marker remains.
///
/// ```rust
/// use standout_table::{align_and_truncate, Align, Padding};
///
/// let cell = align_and_truncate("Hello World", 8, Align::Left, Padding::new(1, 1), "…");
/// assert_eq!(cell, " Hello W… ");
///
/// let cell = align_and_truncate("42", 5, Align::Right, Padding::new(1, 1), "…");
/// assert_eq!(cell, "    42 ");
/// ```
pub fn align_and_truncate(
    text: &str,
    width: usize,
    align: Align,
    padding: Padding,
    marker: &str,
) -> String {
    let fitted = truncate_end(text, width, marker);
    let fill = width.saturating_sub(display_width(&fitted));
    let (before, after) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };

    let mut out = String::with_capacity(fitted.len() + fill + padding.total());
    out.push_str(&" ".repeat(padding.left + before));
    out.push_str(&fitted);
    out.push_str(&" ".repeat(after + padding.right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::display_width;

    const PAD: Padding = Padding::new(1, 1);

    #[test]
    fn left_alignment_fills_right() {
        assert_eq!(align_and_truncate("abc", 6, Align::Left, PAD, "…"), " abc    ");
    }

    #[test]
    fn right_alignment_fills_left() {
        assert_eq!(align_and_truncate("abc", 6, Align::Right, PAD, "…"), "    abc ");
    }

    #[test]
    fn center_alignment_puts_extra_fill_right() {
        assert_eq!(align_and_truncate("ab", 5, Align::Center, PAD, "…"), "  ab   ");
        assert_eq!(align_and_truncate("ab", 6, Align::Center, PAD, "…"), "   ab   ");
    }

    #[test]
    fn asymmetric_padding() {
        let cell = align_and_truncate("x", 3, Align::Right, Padding::new(0, 2), "…");
        assert_eq!(cell, "  x  ");
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        assert_eq!(align_and_truncate("abcde", 5, Align::Left, PAD, "…"), " abcde ");
    }

    #[test]
    fn truncation_appends_marker() {
        let cell = align_and_truncate("abcdefgh", 5, Align::Left, PAD, "…");
        assert_eq!(cell, " abcd… ");
    }

    #[test]
    fn truncation_with_multi_glyph_marker() {
        let cell = align_and_truncate("abcdefgh", 5, Align::Right, PAD, "...");
        assert_eq!(cell, " ab... ");
    }

    #[test]
    fn marker_is_clipped_when_column_is_narrower() {
        assert_eq!(align_and_truncate("abcdefgh", 2, Align::Left, PAD, "..."), " .. ");
        assert_eq!(
            align_and_truncate("abcdefgh", 0, Align::Left, Padding::new(0, 0), "…"),
            ""
        );
    }

    #[test]
    fn wide_glyphs_keep_exact_width() {
        // "日本" needs 4 columns; in 4 columns with a marker only one fits.
        let cell = align_and_truncate("日本語", 4, Align::Left, PAD, "…");
        assert_eq!(cell, " 日…  ");
        assert_eq!(display_width(&cell), 6);
    }

    #[test]
    fn emoji_sequences_keep_exact_width() {
        let cell = align_and_truncate("❤️❤️❤️", 3, Align::Left, PAD, "…");
        assert_eq!(cell, " ❤️… ");
        assert_eq!(display_width(&cell), 5);
    }

    #[test]
    fn truncated_hyperlink_keeps_exact_width() {
        let link = "\x1b]8;;http://example.com\x1b\\link text\x1b]8;;\x1b\\";
        let cell = align_and_truncate(link, 6, Align::Left, PAD, "…");
        assert_eq!(display_width(&cell), 8);
        assert!(cell.ends_with("\x1b]8;;\x1b\\ "));
    }

    #[test]
    fn styled_text_measured_without_escapes() {
        let styled = "\x1b[31mred\x1b[0m";
        let cell = align_and_truncate(styled, 5, Align::Left, PAD, "…");
        assert_eq!(display_width(&cell), 7);
        assert!(cell.contains(styled));
    }
}
