#![forbid(unsafe_code)]

//! The per-cell style record.

use crate::color::Color;

bitflags::bitflags! {
    /// 8-bit cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
        /// Hidden / invisible text.
        const HIDDEN        = 0b1000_0000;
    }
}

/// Foreground/background colors plus attribute flags for one cell.
///
/// `Style` is a small `Copy` value; builder methods return modified copies.
///
/// When the REVERSE flag is set, the colors actually shown are the swap of
/// `fg` and `bg`. Code that needs to know what is rendered must go through
/// [`Style::effective_fg`] / [`Style::effective_bg`] instead of reading the
/// fields directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color as declared.
    pub fg: Color,
    /// Background color as declared.
    pub bg: Color,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Style {
    /// Create a style with default colors and no attributes.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Set the attribute flags wholesale.
    #[inline]
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Add bold.
    #[inline]
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs |= StyleFlags::BOLD;
        self
    }

    /// Add dim.
    #[inline]
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.attrs |= StyleFlags::DIM;
        self
    }

    /// Add italic.
    #[inline]
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attrs |= StyleFlags::ITALIC;
        self
    }

    /// Add underline.
    #[inline]
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attrs |= StyleFlags::UNDERLINE;
        self
    }

    /// Add reverse video.
    #[inline]
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.attrs |= StyleFlags::REVERSE;
        self
    }

    /// Check whether a specific flag is set.
    #[inline]
    #[must_use]
    pub fn has(self, flag: StyleFlags) -> bool {
        self.attrs.contains(flag)
    }

    /// The foreground color actually rendered, after the reverse-video swap.
    #[inline]
    #[must_use]
    pub fn effective_fg(self) -> Color {
        if self.has(StyleFlags::REVERSE) {
            self.bg
        } else {
            self.fg
        }
    }

    /// The background color actually rendered, after the reverse-video swap.
    #[inline]
    #[must_use]
    pub fn effective_bg(self) -> Color {
        if self.has(StyleFlags::REVERSE) {
            self.fg
        } else {
            self.bg
        }
    }
}
