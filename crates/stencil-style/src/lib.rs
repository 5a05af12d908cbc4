#![forbid(unsafe_code)]

//! Style: the minimal color/attribute records shared by all painters.

pub mod color;
pub mod style;
pub mod theme;

pub use color::{Ansi16, Color, Rgb};
pub use style::{Style, StyleFlags};
pub use theme::Theme;
