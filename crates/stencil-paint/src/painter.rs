#![forbid(unsafe_code)]

//! The clipping painter.
//!
//! A `Painter` draws styled glyphs into a [`Surface`] through an active clip
//! rectangle. Scoped combinators ([`Painter::with_mask`],
//! [`Painter::with_style`], [`Painter::with_offset`]) derive a *new* painter
//! for the duration of a callback instead of mutating the parent, so a
//! narrowed clip or swapped style can never leak past the scope that
//! requested it. There is no push/pop stack to unbalance.
//!
//! Clipping is silent: coordinates outside the active clip or outside the
//! surface are dropped, never reported. Drawing code may therefore paint at
//! any coordinate, including negative ones, without bounds checks.

use crate::border::BorderChars;
use crate::surface::Surface;
use stencil_core::geometry::{Rect, Size};
use stencil_core::glyph::char_width;
use stencil_style::{Style, Theme};

/// Draws styled glyphs into a shared [`Surface`], bounded by a clip
/// rectangle.
///
/// A painter is a cheap, ephemeral value: it borrows the surface and theme
/// from whoever owns them and carries only the clip, the current style, and
/// a local-coordinate offset. Every painter derived from the same root
/// writes to the same backing grid; the `&mut` reborrow handed to each
/// combinator callback enforces the single-writer frame discipline
/// statically.
pub struct Painter<'a> {
    surface: &'a mut dyn Surface,
    theme: &'a Theme,
    style: Style,
    clip: Rect,
    dx: i32,
    dy: i32,
}

impl<'a> Painter<'a> {
    /// Create a root painter whose clip covers the whole surface.
    ///
    /// The current style starts as the theme's base style.
    pub fn new(surface: &'a mut dyn Surface, theme: &'a Theme) -> Self {
        let clip = Rect::from_size(surface.size());
        stencil_core::debug!(?clip, "root painter");
        Self {
            surface,
            theme,
            style: theme.base(),
            clip,
            dx: 0,
            dy: 0,
        }
    }

    /// The surface extent, re-read on every call.
    ///
    /// This is the drawable extent callers iterate over; it is independent
    /// of the active clip and may change between frames.
    #[inline]
    pub fn size(&self) -> Size {
        self.surface.size()
    }

    /// The active clip rectangle, in absolute surface coordinates.
    #[inline]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// The current style applied to drawn glyphs.
    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }

    /// The shared theme.
    #[inline]
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Run `f` with a painter clipped to `rect`.
    ///
    /// The child's clip is the intersection of this painter's clip with
    /// `rect` (taken in this painter's local coordinates). Masks nest to any
    /// depth and only ever shrink the visible region; once a level's clip is
    /// empty, nothing a descendant draws can become visible, no matter what
    /// rectangles it requests.
    ///
    /// This painter is never mutated: code after `with_mask` draws with the
    /// original clip.
    pub fn with_mask<F>(&mut self, rect: Rect, f: F)
    where
        F: FnOnce(&mut Painter<'_>),
    {
        let clip = self.clip.intersection(&rect.translated(self.dx, self.dy));
        stencil_core::trace!(?clip, "mask derived");
        f(&mut Painter {
            surface: &mut *self.surface,
            theme: self.theme,
            style: self.style,
            clip,
            dx: self.dx,
            dy: self.dy,
        });
    }

    /// Run `f` with a painter whose current style is `style`.
    pub fn with_style<F>(&mut self, style: Style, f: F)
    where
        F: FnOnce(&mut Painter<'_>),
    {
        f(&mut Painter {
            surface: &mut *self.surface,
            theme: self.theme,
            style,
            clip: self.clip,
            dx: self.dx,
            dy: self.dy,
        });
    }

    /// Run `f` with the named theme style (base style for unknown names).
    pub fn with_named_style<F>(&mut self, name: &str, f: F)
    where
        F: FnOnce(&mut Painter<'_>),
    {
        let style = self.theme.style(name);
        self.with_style(style, f);
    }

    /// Run `f` with a painter whose local origin is shifted by `(dx, dy)`.
    ///
    /// Draw coordinates and mask rectangles passed to the child compose
    /// through the offset; the clip itself stays absolute.
    pub fn with_offset<F>(&mut self, dx: i32, dy: i32, f: F)
    where
        F: FnOnce(&mut Painter<'_>),
    {
        f(&mut Painter {
            surface: &mut *self.surface,
            theme: self.theme,
            style: self.style,
            clip: self.clip,
            dx: self.dx + dx,
            dy: self.dy + dy,
        });
    }

    /// Draw a single glyph at the given cell.
    ///
    /// Zero-width characters are a no-op. Otherwise exactly one cell is
    /// written, iff it lies inside the active clip and the surface bounds;
    /// anything else is silently dropped. A glyph of display width > 1
    /// occupies the following `width - 1` columns visually, but only the
    /// leading cell is written: advancing past the reserved columns is the
    /// caller's responsibility (as [`Painter::draw_text`] does), and a wide
    /// glyph whose leading cell is clipped is dropped entirely.
    pub fn draw_char(&mut self, x: i32, y: i32, ch: char) {
        if char_width(ch) == 0 {
            return;
        }
        self.put(x + self.dx, y + self.dy, ch);
    }

    /// Clipped, bounds-checked write at absolute coordinates.
    fn put(&mut self, x: i32, y: i32, ch: char) {
        if !self.clip.contains(x, y) {
            return;
        }
        let size = self.surface.size();
        if x >= size.width || y >= size.height {
            return;
        }
        self.surface.set_cell(x, y, ch, self.style);
    }

    /// Draw a run of text starting at the given cell.
    ///
    /// Advances one column per glyph, two for wide glyphs; zero-width
    /// characters are skipped without advancing. `'\n'` continues on the
    /// next row at the starting column. Clipping applies per cell.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let mut cx = x;
        let mut cy = y;
        for ch in text.chars() {
            if ch == '\n' {
                cx = x;
                cy += 1;
                continue;
            }
            let width = char_width(ch);
            if width == 0 {
                continue;
            }
            self.draw_char(cx, cy, ch);
            cx += width as i32;
        }
    }

    /// Draw a horizontal line from `x1` (inclusive) to `x2` (exclusive).
    pub fn draw_horizontal_line(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1..x2 {
            self.draw_char(x, y, '─');
        }
    }

    /// Draw a vertical line from `y1` (inclusive) to `y2` (exclusive).
    pub fn draw_vertical_line(&mut self, x: i32, y1: i32, y2: i32) {
        for y in y1..y2 {
            self.draw_char(x, y, '│');
        }
    }

    /// Draw a rectangle outline with the given border characters.
    ///
    /// A single-row or single-column rectangle is drawn with edge
    /// characters; corners overwrite edges.
    pub fn draw_border(&mut self, rect: Rect, chars: BorderChars) {
        if rect.is_empty() {
            return;
        }

        // Top edge
        for x in rect.left()..rect.right() {
            self.draw_char(x, rect.top(), chars.horizontal);
        }

        // Bottom edge
        if rect.height > 1 {
            for x in rect.left()..rect.right() {
                self.draw_char(x, rect.bottom() - 1, chars.horizontal);
            }
        }

        // Side edges (excluding corners)
        if rect.height > 2 {
            for y in (rect.top() + 1)..(rect.bottom() - 1) {
                self.draw_char(rect.left(), y, chars.vertical);
                if rect.width > 1 {
                    self.draw_char(rect.right() - 1, y, chars.vertical);
                }
            }
        }

        // Corners (drawn last to overwrite edge chars at corners)
        self.draw_char(rect.left(), rect.top(), chars.top_left);
        if rect.width > 1 {
            self.draw_char(rect.right() - 1, rect.top(), chars.top_right);
        }
        if rect.height > 1 {
            self.draw_char(rect.left(), rect.bottom() - 1, chars.bottom_left);
        }
        if rect.width > 1 && rect.height > 1 {
            self.draw_char(rect.right() - 1, rect.bottom() - 1, chars.bottom_right);
        }
    }

    /// Fill every cell of `rect` with the given glyph.
    ///
    /// Zero-width characters are a no-op; wide glyphs advance by their
    /// width. Only the part of `rect` inside the active clip is touched.
    pub fn fill(&mut self, rect: Rect, ch: char) {
        let width = char_width(ch);
        if width == 0 {
            return;
        }

        let clipped = self
            .clip
            .intersection(&rect.translated(self.dx, self.dy));
        if clipped.is_empty() {
            return;
        }

        let step = width as i32;
        for y in clipped.top()..clipped.bottom() {
            let mut x = clipped.left();
            while x < clipped.right() {
                self.put(x, y, ch);
                x += step;
            }
        }
    }

    /// Place the hardware cursor.
    ///
    /// The offset applies, but the active clip does not: cursor placement is
    /// a side channel, and clipping it is the calling code's policy.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.surface.set_cursor(x + self.dx, y + self.dy);
    }

    /// Hide the hardware cursor.
    pub fn hide_cursor(&mut self) {
        self.surface.hide_cursor();
    }
}
