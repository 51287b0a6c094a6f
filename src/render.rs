//! Text rendering for completed maze rows.

use std::fmt::Write as _;

use crate::maze::Row;

/// Render one completed row as a single text line.
///
/// The leading glyph is column 0's left boundary; every column then
/// contributes its floor glyph (`_` while its down passage is closed) and
/// its right-wall glyph (`|` while its right passage is closed).
pub fn row_to_ascii(row: &Row) -> String {
    let mut line = String::with_capacity(row.width() * 2 + 1);
    line.push(if row[0].left { ' ' } else { '|' });
    for cell in row {
        let _ = write!(line, "{cell}");
    }

    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            line.width(),
            row.width() * 2 + 1,
            "A rendered row must occupy one character column per glyph."
        );
    }

    line
}
