#![forbid(unsafe_code)]

//! The capability set the painter requires of a drawing backend.

use stencil_core::geometry::Size;
use stencil_style::Style;

/// A mutable character grid of fixed size, addressed by absolute cell
/// coordinates in `[0, width) × [0, height)`.
///
/// The surface is the single owner of cell storage; painters never hold or
/// cache cell state. Implementations are the real terminal backend or an
/// in-memory double such as [`HeadlessSurface`](crate::HeadlessSurface).
///
/// # Contract
///
/// - [`set_cell`](Surface::set_cell) replaces prior content at that cell for
///   the current frame. Implementations may no-op on out-of-bounds input,
///   but the painter guarantees it will not call this outside the bounds
///   reported by [`size`](Surface::size).
/// - Cursor placement is a side channel independent of cell content; the
///   painter forwards it without clipping.
/// - [`begin`](Surface::begin) / [`end`](Surface::end) bracket a frame.
///   They are driven by the external renderer, one frame at a time, never
///   re-entrant, and never called by the painter itself.
/// - [`size`](Surface::size) reports the grid extent at the time of the
///   call. Callers re-read it rather than caching, since the extent may
///   change between frames (terminal resize).
pub trait Surface {
    /// Write a styled glyph at the given cell.
    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style);

    /// Place the hardware cursor.
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Hide the hardware cursor.
    fn hide_cursor(&mut self);

    /// Reset/prepare the backing store for a new frame.
    fn begin(&mut self);

    /// Finalize/flush the current frame.
    fn end(&mut self);

    /// Current grid extent.
    fn size(&self) -> Size;
}
