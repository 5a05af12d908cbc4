#![forbid(unsafe_code)]

//! Theme: an immutable bundle of named styles.
//!
//! A theme is built once with the consuming builder methods, then shared by
//! reference across every painter derived from a root. The render pass is
//! single-threaded and the theme is never mutated after construction, so it
//! is plain data with no interior locking.

use crate::style::Style;
use std::collections::HashMap;

/// Named default styles for drawing code.
///
/// # Example
/// ```
/// use stencil_style::{Ansi16, Color, Style, Theme};
///
/// let theme = Theme::new()
///     .with_base(Style::new().fg(Color::Ansi(Ansi16::White)))
///     .with_style("list.item.selected", Style::new().reverse());
///
/// let selected = theme.style("list.item.selected");
/// assert!(selected != theme.base());
/// // Unknown names fall back to the base style
/// assert_eq!(theme.style("no.such.name"), theme.base());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    base: Style,
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Create a theme whose base style is the plain default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the base text style.
    #[must_use]
    pub fn with_base(mut self, style: Style) -> Self {
        self.base = style;
        self
    }

    /// Register a named style.
    ///
    /// Later registrations of the same name win.
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        let _ = self.styles.insert(name.into(), style);
        self
    }

    /// The base text style.
    #[inline]
    #[must_use]
    pub fn base(&self) -> Style {
        self.base
    }

    /// Look up a named style, falling back to the base style.
    #[must_use]
    pub fn style(&self, name: &str) -> Style {
        self.styles.get(name).copied().unwrap_or(self.base)
    }

    /// Check whether a name was registered.
    #[must_use]
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}
