#![forbid(unsafe_code)]

//! Glyph display-width classification.
//!
//! The painter consumes these as pure functions; the classification tables
//! themselves live in the unicode crates. Widths are 0 (non-printing),
//! 1 (normal), or 2 (wide).

use unicode_display_width::is_double_width;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Number of grid columns a character occupies.
///
/// Control characters, combining marks, and other non-printing code points
/// are width 0; CJK and other East Asian Wide characters are width 2;
/// everything else is width 1.
#[inline]
pub fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return if matches!(ch, ' '..='~') { 1 } else { 0 };
    }
    if is_double_width(ch) {
        return 2;
    }
    match UnicodeWidthChar::width(ch) {
        None | Some(0) => 0,
        Some(w) => w.min(2),
    }
}

/// Number of grid columns a grapheme cluster occupies.
#[inline]
fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().all(|c| char_width(c) == 0) {
        return 0;
    }
    (unicode_display_width::width(grapheme) as usize).clamp(1, 2)
}

/// Number of grid columns a string occupies when painted on one row.
///
/// Measures grapheme clusters, so a base character with combining marks
/// counts once. Control characters contribute nothing.
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.chars().filter(|c| matches!(c, ' '..='~')).count();
    }
    text.graphemes(true).map(grapheme_width).sum()
}
