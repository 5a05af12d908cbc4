#![forbid(unsafe_code)]

//! Paint kernel: the clipping painter and the surface it draws through.
//!
//! A [`Painter`] is bound to a [`Surface`] and a theme, and draws styled
//! glyphs into the surface's cell grid. Nested clip masks are composed with
//! [`Painter::with_mask`]; drawing outside the active mask is silently
//! discarded.

pub mod border;
pub mod headless;
pub mod painter;
pub mod surface;

pub use border::BorderChars;
pub use headless::HeadlessSurface;
pub use painter::Painter;
pub use surface::Surface;
