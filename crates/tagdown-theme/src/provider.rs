//! Theme providers.
//!
//! The conversion pipeline fetches one theme snapshot per `convert` call
//! through the [`ThemeProvider`] trait, so the theme source (static config,
//! per-request selection, ...) stays outside the rendering core.

use crate::Theme;

/// Source of the current theme.
///
/// Implementations must be safe to call concurrently; the returned
/// [`Theme`] is treated as an immutable snapshot for the duration of one
/// conversion.
pub trait ThemeProvider: Send + Sync {
    /// Return a snapshot of the current theme.
    fn current_theme(&self) -> Theme;
}

/// Provider that always returns the same fixed theme.
///
/// # Example
///
/// ```
/// use tagdown_theme::{StaticThemeProvider, Theme, ThemeProvider};
///
/// let provider = StaticThemeProvider::new(Theme::new().with_class("error", "text-red-500"));
/// assert_eq!(provider.current_theme().class("error"), Some("text-red-500"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticThemeProvider {
    theme: Theme,
}

impl StaticThemeProvider {
    /// Create a provider wrapping a fixed theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl ThemeProvider for StaticThemeProvider {
    fn current_theme(&self) -> Theme {
        self.theme.clone()
    }
}
