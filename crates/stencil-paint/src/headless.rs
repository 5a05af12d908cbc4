#![forbid(unsafe_code)]

//! In-memory surface for tests and headless runs.

use crate::surface::Surface;
use stencil_core::geometry::Size;
use stencil_style::Style;

/// One written cell of a [`HeadlessSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessCell {
    /// The glyph written to the cell.
    pub ch: char,
    /// The style it was written with.
    pub style: Style,
}

/// A [`Surface`] backed by a plain in-memory grid.
///
/// Cells start untouched and become [`HeadlessCell`]s as they are written;
/// [`begin`](Surface::begin) resets every cell to untouched. The `render*`
/// accessors serialize the grid for golden-string assertions: untouched
/// cells print as `'.'`, and a wide glyph consumes its trailing columns.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: Size,
    cells: Vec<Option<HeadlessCell>>,
    cursor: Option<(i32, i32)>,
    empty_ch: char,
}

impl HeadlessSurface {
    /// Create a surface with the given extent.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "surface width must be > 0");
        assert!(height > 0, "surface height must be > 0");

        Self {
            size: Size::new(width, height),
            cells: vec![None; width as usize * height as usize],
            cursor: None,
            empty_ch: '.',
        }
    }

    /// Convert (x, y) to a linear index, `None` if out of bounds.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.size.width && y >= 0 && y < self.size.height {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }

    /// The written cell at (x, y), `None` if untouched or out of bounds.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<&HeadlessCell> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    /// The current cursor position, `None` when hidden.
    #[must_use]
    pub fn cursor(&self) -> Option<(i32, i32)> {
        self.cursor
    }

    /// Serialize the grid as one row per line.
    ///
    /// Untouched cells print as `'.'`; a wide glyph is printed once and its
    /// trailing columns are skipped.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(|cell| cell.ch)
    }

    /// Serialize the effective foreground palette index of each written cell
    /// as a hex digit (reverse video applied); `'-'` for colors without an
    /// index.
    #[must_use]
    pub fn render_fg(&self) -> String {
        self.render_with(|cell| index_digit(cell.style.effective_fg().index()))
    }

    /// Serialize the effective background palette index of each written cell
    /// as a hex digit (reverse video applied); `'-'` for colors without an
    /// index.
    #[must_use]
    pub fn render_bg(&self) -> String {
        self.render_with(|cell| index_digit(cell.style.effective_bg().index()))
    }

    fn render_with(&self, mut draw: impl FnMut(&HeadlessCell) -> char) -> String {
        let mut out = String::new();
        for y in 0..self.size.height {
            let mut x = 0;
            while x < self.size.width {
                match self.cell(x, y) {
                    Some(cell) => {
                        out.push(draw(cell));
                        x += stencil_core::glyph::char_width(cell.ch).max(1) as i32;
                    }
                    None => {
                        out.push(self.empty_ch);
                        x += 1;
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

fn index_digit(index: Option<u8>) -> char {
    index
        .and_then(|i| char::from_digit(i as u32, 16))
        .unwrap_or('-')
}

impl Surface for HeadlessSurface {
    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(HeadlessCell { ch, style });
        }
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn begin(&mut self) {
        self.cells.fill(None);
    }

    fn end(&mut self) {
        // NOP: nothing to flush
    }

    fn size(&self) -> Size {
        self.size
    }
}
