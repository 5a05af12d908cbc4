#![forbid(unsafe_code)]

//! Stencil public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use stencil::prelude::*;
//!
//! let mut surface = HeadlessSurface::new(10, 4);
//! let theme = Theme::new();
//! let mut painter = Painter::new(&mut surface, &theme);
//!
//! painter.draw_border(Rect::new(0, 0, 10, 4), BorderChars::ROUNDED);
//! painter.with_mask(Rect::new(1, 1, 8, 2), |p| {
//!     p.draw_text(1, 1, "hi");
//! });
//!
//! assert_eq!(surface.cell(1, 1).unwrap().ch, 'h');
//! ```

// --- Core re-exports -------------------------------------------------------

pub use stencil_core::geometry::{Rect, Sides, Size};
pub use stencil_core::glyph::{char_width, display_width};

// --- Style re-exports ------------------------------------------------------

pub use stencil_style::{Ansi16, Color, Rgb, Style, StyleFlags, Theme};

// --- Paint re-exports ------------------------------------------------------

pub use stencil_paint::{BorderChars, HeadlessSurface, Painter, Surface};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BorderChars, Color, HeadlessSurface, Painter, Rect, Size, Style, Surface, Theme,
    };

    pub use crate::{core, paint, style};
}

pub use stencil_core as core;
pub use stencil_paint as paint;
pub use stencil_style as style;
