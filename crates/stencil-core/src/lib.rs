#![forbid(unsafe_code)]

//! Core: geometry and glyph-width primitives for the stencil painter.

pub mod geometry;
pub mod glyph;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
