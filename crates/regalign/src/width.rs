//! Width measurement helpers.
//!
//! Widths are display widths, not byte lengths, so CJK characters count as
//! two columns. Registry XML is ASCII in practice, where the two agree.

use unicode_width::UnicodeWidthStr;

/// Display width of a string in editor columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Append `n` spaces to `out`.
pub fn push_spaces(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}
