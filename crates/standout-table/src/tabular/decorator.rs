//! Border glyphs and the horizontal/vertical lines built from them.
//!
//! A [`BorderSpec`] holds the twelve glyphs a table frame needs. Presets come
//! from [`BorderStyle`]; single glyphs can be replaced with
//! [`BorderOverrides`], merged field by field:
//!
//! ```rust
//! use standout_table::{BorderOverrides, BorderSpec, BorderStyle};
//!
//! let border = BorderStyle::Double
//!     .spec()
//!     .with_overrides(&BorderOverrides {
//!         cell_separator: Some('│'),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(border.vertical, '║');
//! assert_eq!(border.cell_separator, '│');
//! ```
//!
//! Every glyph must occupy exactly one terminal column; the width budget
//! counts one column per border glyph. [`BorderSpec::validate`] enforces this.

use serde::Deserialize;

use crate::error::{Result, TableError};
use crate::util::display_width;

/// Named glyph presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Light box-drawing: ┌ ─ ┐ │ └ ┘ ├ ┼ ┤ ┬ ┴
    #[default]
    Single,
    /// Double-line box-drawing: ╔ ═ ╗ ║ ╚ ╝ ╠ ╬ ╣ ╦ ╩
    Double,
    /// Rounded corners with light lines: ╭ ─ ╮ │ ╰ ╯
    Rounded,
    /// Heavy box-drawing: ┏ ━ ┓ ┃ ┗ ┛ ┣ ╋ ┫ ┳ ┻
    Heavy,
    /// ASCII: + - |
    Ascii,
}

impl BorderStyle {
    /// The glyph set for this preset.
    pub fn spec(&self) -> BorderSpec {
        match self {
            BorderStyle::Single => BorderSpec {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                header_left: '├',
                header_right: '┤',
                top_junction: '┬',
                middle_junction: '┼',
                bottom_junction: '┴',
                cell_separator: '│',
            },
            BorderStyle::Double => BorderSpec {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                header_left: '╠',
                header_right: '╣',
                top_junction: '╦',
                middle_junction: '╬',
                bottom_junction: '╩',
                cell_separator: '║',
            },
            BorderStyle::Rounded => BorderSpec {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                ..BorderStyle::Single.spec()
            },
            BorderStyle::Heavy => BorderSpec {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
                header_left: '┣',
                header_right: '┫',
                top_junction: '┳',
                middle_junction: '╋',
                bottom_junction: '┻',
                cell_separator: '┃',
            },
            BorderStyle::Ascii => BorderSpec {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                header_left: '+',
                header_right: '+',
                top_junction: '+',
                middle_junction: '+',
                bottom_junction: '+',
                cell_separator: '|',
            },
        }
    }
}

/// The twelve glyphs of a table frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderSpec {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    /// Outer walls of content rows.
    pub vertical: char,
    /// Left end of the header/body and body/footer separators.
    pub header_left: char,
    /// Right end of the header/body and body/footer separators.
    pub header_right: char,
    /// Column boundary on the top border.
    pub top_junction: char,
    /// Column boundary on the header/body separator.
    pub middle_junction: char,
    /// Column boundary on the bottom border and the footer separator.
    pub bottom_junction: char,
    /// Between cells of a content row.
    pub cell_separator: char,
}

impl Default for BorderSpec {
    fn default() -> Self {
        BorderStyle::Single.spec()
    }
}

/// Optional replacements for individual glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderOverrides {
    pub top_left: Option<char>,
    pub top_right: Option<char>,
    pub bottom_left: Option<char>,
    pub bottom_right: Option<char>,
    pub horizontal: Option<char>,
    pub vertical: Option<char>,
    pub header_left: Option<char>,
    pub header_right: Option<char>,
    pub top_junction: Option<char>,
    pub middle_junction: Option<char>,
    pub bottom_junction: Option<char>,
    pub cell_separator: Option<char>,
}

/// Which horizontal line to draw across the columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    /// Above the header.
    Top,
    /// Between header and body.
    HeaderSeparator,
    /// Between body and footer; columns end here.
    FooterSeparator,
    /// Below the body when there is no footer.
    Bottom,
}

impl BorderSpec {
    /// Replaces each glyph that `overrides` defines.
    ///
    /// # Errors
    ///
    /// [`TableError::Parse`] when a resulting glyph is not one column wide.
    pub fn with_overrides(&self, overrides: &BorderOverrides) -> Result<Self> {
        let border = BorderSpec {
            top_left: overrides.top_left.unwrap_or(self.top_left),
            top_right: overrides.top_right.unwrap_or(self.top_right),
            bottom_left: overrides.bottom_left.unwrap_or(self.bottom_left),
            bottom_right: overrides.bottom_right.unwrap_or(self.bottom_right),
            horizontal: overrides.horizontal.unwrap_or(self.horizontal),
            vertical: overrides.vertical.unwrap_or(self.vertical),
            header_left: overrides.header_left.unwrap_or(self.header_left),
            header_right: overrides.header_right.unwrap_or(self.header_right),
            top_junction: overrides.top_junction.unwrap_or(self.top_junction),
            middle_junction: overrides.middle_junction.unwrap_or(self.middle_junction),
            bottom_junction: overrides.bottom_junction.unwrap_or(self.bottom_junction),
            cell_separator: overrides.cell_separator.unwrap_or(self.cell_separator),
        };
        border.validate()?;
        Ok(border)
    }

    /// Checks that every glyph occupies exactly one terminal column.
    ///
    /// # Errors
    ///
    /// [`TableError::Parse`] naming the first offending glyph.
    pub fn validate(&self) -> Result<()> {
        let glyphs = [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_left", self.bottom_left),
            ("bottom_right", self.bottom_right),
            ("horizontal", self.horizontal),
            ("vertical", self.vertical),
            ("header_left", self.header_left),
            ("header_right", self.header_right),
            ("top_junction", self.top_junction),
            ("middle_junction", self.middle_junction),
            ("bottom_junction", self.bottom_junction),
            ("cell_separator", self.cell_separator),
        ];
        for (name, glyph) in glyphs {
            let mut buf = [0; 4];
            if glyph.is_control() || display_width(glyph.encode_utf8(&mut buf)) != 1 {
                return Err(TableError::Parse(format!(
                    "border glyph {} {:?} must be one column wide",
                    name, glyph
                )));
            }
        }
        Ok(())
    }

    /// A horizontal rule with a junction at every column boundary.
    ///
    /// `spans` are the full cell widths (content plus padding).
    pub fn horizontal_line(&self, line_type: LineType, spans: &[usize]) -> String {
        let (left, joint, right) = match line_type {
            LineType::Top => (self.top_left, self.top_junction, self.top_right),
            LineType::HeaderSeparator => {
                (self.header_left, self.middle_junction, self.header_right)
            }
            LineType::FooterSeparator => {
                (self.header_left, self.bottom_junction, self.header_right)
            }
            LineType::Bottom => (self.bottom_left, self.bottom_junction, self.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, &span) in spans.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(self.horizontal, span));
        }
        line.push(right);
        line
    }

    /// A bottom border without junctions, spanning `inner` columns.
    pub fn plain_bottom(&self, inner: usize) -> String {
        let mut line = String::new();
        line.push(self.bottom_left);
        line.extend(std::iter::repeat_n(self.horizontal, inner));
        line.push(self.bottom_right);
        line
    }

    /// Joins rendered cells with separators between and walls outside.
    pub fn wrap_row<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let mut line = String::new();
        line.push(self.vertical);
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push(self.cell_separator);
            }
            line.push_str(cell.as_ref());
        }
        line.push(self.vertical);
        line
    }

    /// Wraps one full-width cell with the outer walls.
    pub fn wrap_full(&self, content: &str) -> String {
        format!("{}{}{}", self.vertical, content, self.vertical)
    }
}
