//! Text measurement and color conversion helpers.
//!
//! Every width in this crate is a *display* width: the number of terminal
//! columns a string occupies. CJK and emoji glyphs count as two columns and
//! ANSI escape sequences count as zero, so pre-styled text measures the same
//! as its plain content.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// Text is measured one grapheme cluster at a time, so emoji sequences
/// (`❤️`, `👨‍👩‍👧`) and combining marks count the same here as they do when a
/// cell is cut. CSI sequences (colors) and OSC sequences (hyperlinks) are
/// zero width.
///
/// # Example
///
/// ```rust
/// use standout_table::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    Segments::new(s)
        .map(|segment| match segment {
            Segment::Escape(_) => 0,
            Segment::Text(text) => text_width(text),
        })
        .sum()
}

fn text_width(text: &str) -> usize {
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// Truncates a string from the end to fit within `max_width`, appending
/// `marker` when anything was cut.
///
/// Escape sequences that follow the cut (a closing reset, the end of a
/// hyperlink) are kept after the marker, so styled text stays balanced.
/// When `max_width` is narrower than the marker itself, the marker is clipped
/// and returned alone (possibly empty).
///
/// # Example
///
/// ```rust
/// use standout_table::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// assert_eq!(truncate_end("Hello", 2, "..."), "..");
/// assert_eq!(
///     truncate_end("\x1b[31mHello World\x1b[0m", 4, "…"),
///     "\x1b[31mHel…\x1b[0m"
/// );
/// ```
pub fn truncate_end(s: &str, max_width: usize, marker: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let marker_width = display_width(marker);
    if max_width < marker_width {
        return truncate_to_display_width(marker, max_width);
    }

    let (mut result, tail) = split_at_width(s, max_width - marker_width);
    result.push_str(marker);
    result.push_str(&tail);
    result
}

/// Returns the longest prefix of `s` whose display width is at most
/// `max_width`.
///
/// ANSI escape sequences are copied through untouched and never count
/// toward the width; those after the cut are appended to the prefix. A
/// grapheme that would straddle the limit is dropped, so the result may be
/// one column narrower than `max_width`.
pub fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let (mut head, tail) = split_at_width(s, max_width);
    head.push_str(&tail);
    head
}

/// Splits `s` at `max_width` columns into the visible prefix and the escape
/// sequences found after the cut.
fn split_at_width(s: &str, max_width: usize) -> (String, String) {
    let mut head = String::with_capacity(s.len());
    let mut tail = String::new();
    let mut width = 0;
    let mut cut = false;

    for segment in Segments::new(s) {
        match segment {
            Segment::Escape(seq) if cut => tail.push_str(seq),
            Segment::Escape(seq) => head.push_str(seq),
            Segment::Text(_) if cut => {}
            Segment::Text(text) => {
                for grapheme in text.graphemes(true) {
                    let grapheme_width = grapheme.width();
                    if width + grapheme_width > max_width {
                        cut = true;
                        break;
                    }
                    width += grapheme_width;
                    head.push_str(grapheme);
                }
            }
        }
    }

    (head, tail)
}

/// A run of printable text or one complete escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Escape(&'a str),
    Text(&'a str),
}

/// Splits a string into text runs and escape sequences.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        if rest.is_empty() {
            return None;
        }
        let (segment, len) = if rest.starts_with('\x1b') {
            let len = escape_len(rest);
            (Segment::Escape(&rest[..len]), len)
        } else {
            let len = rest.find('\x1b').unwrap_or(rest.len());
            (Segment::Text(&rest[..len]), len)
        };
        self.rest = &rest[len..];
        Some(segment)
    }
}

/// Byte length of the escape sequence at the start of `s`.
///
/// CSI (`ESC [`) runs to its final byte in `@`..=`~`. OSC (`ESC ]`) runs to
/// BEL or ST (`ESC \`). Any other escape covers the next character. An
/// unterminated sequence swallows the rest of the string.
fn escape_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.get(1) {
        Some(b'[') => bytes[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map_or(s.len(), |i| i + 3),
        Some(b']') => {
            let mut i = 2;
            while i < bytes.len() {
                match bytes[i] {
                    0x07 => return i + 1,
                    0x1b if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
                    _ => i += 1,
                }
            }
            s.len()
        }
        Some(_) => 1 + s[1..].chars().next().map_or(0, char::len_utf8),
        None => 1,
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use standout_table::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width(" "), 1);
    }

    #[test]
    fn display_width_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
        assert_eq!(display_width("\x1b[38;5;196mcolor\x1b[0m"), 5);
    }

    #[test]
    fn display_width_wide_glyphs() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("café"), 4);
    }

    #[test]
    fn truncate_end_no_truncation() {
        assert_eq!(truncate_end("hello", 10, "…"), "hello");
        assert_eq!(truncate_end("hello", 5, "…"), "hello");
    }

    #[test]
    fn truncate_end_basic() {
        assert_eq!(truncate_end("hello world", 8, "…"), "hello w…");
        assert_eq!(truncate_end("hello world", 6, "…"), "hello…");
    }

    #[test]
    fn truncate_end_multi_char_marker() {
        assert_eq!(truncate_end("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn truncate_end_clips_marker() {
        assert_eq!(truncate_end("hello", 1, "…"), "…");
        assert_eq!(truncate_end("hello", 0, "…"), "");
        assert_eq!(truncate_end("hello world", 2, "..."), "..");
    }

    #[test]
    fn truncate_end_keeps_ansi() {
        let styled = "\x1b[31mhello world\x1b[0m";
        let result = truncate_end(styled, 8, "…");
        assert_eq!(display_width(&result), 8);
        assert!(result.starts_with("\x1b[31m"));
    }

    #[test]
    fn truncate_end_wide_glyphs() {
        assert_eq!(truncate_end("日本語テスト", 7, "…"), "日本語…");
        // 2 columns left for text before the marker: one wide glyph
        assert_eq!(truncate_end("日本語", 4, "…"), "日…");
    }

    #[test]
    fn truncate_prefix_drops_straddling_wide_glyph() {
        assert_eq!(truncate_to_display_width("日本", 3), "日");
        assert_eq!(truncate_to_display_width("ab", 0), "");
    }

    #[test]
    fn display_width_grapheme_clusters() {
        assert_eq!(display_width("❤️"), 2);
        assert_eq!(display_width("e\u{301}"), 1);
        assert_eq!(display_width("👨‍👩‍👧"), display_width("👨‍👩‍👧👨‍👩‍👧") / 2);
    }

    #[test]
    fn display_width_skips_hyperlinks() {
        let link = "\x1b]8;;http://example.com\x1b\\link text\x1b]8;;\x1b\\";
        assert_eq!(display_width(link), 9);
        let bel = "\x1b]8;;http://example.com\x07link\x1b]8;;\x07";
        assert_eq!(display_width(bel), 4);
    }

    #[test]
    fn truncate_end_emoji_presentation() {
        let result = truncate_end("❤️❤️❤️", 3, "…");
        assert_eq!(result, "❤️…");
        assert_eq!(display_width(&result), 3);
        // the variation selector never survives without its base
        assert_eq!(truncate_to_display_width("❤️", 1), "");
    }

    #[test]
    fn truncate_end_keeps_combining_marks() {
        assert_eq!(truncate_end("e\u{301}e\u{301}e\u{301}", 2, "…"), "e\u{301}…");
    }

    #[test]
    fn truncate_end_keeps_closing_reset() {
        let result = truncate_end("\x1b[31mhello world\x1b[0m", 4, "…");
        assert_eq!(result, "\x1b[31mhel…\x1b[0m");
    }

    #[test]
    fn truncate_end_keeps_hyperlink_whole() {
        let link = "\x1b]8;;http://example.com\x1b\\link text\x1b]8;;\x1b\\";
        let result = truncate_end(link, 6, "…");
        assert_eq!(result, "\x1b]8;;http://example.com\x1b\\link …\x1b]8;;\x1b\\");
        assert_eq!(display_width(&result), 6);
    }

    #[test]
    fn unterminated_escape_is_zero_width() {
        assert_eq!(display_width("ab\x1b[31"), 2);
        assert_eq!(display_width("ab\x1b]8;;http://x"), 2);
    }

    #[test]
    fn rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }
}
