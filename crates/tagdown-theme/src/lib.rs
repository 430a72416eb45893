//! Theme configuration for tagdown component rendering.
//!
//! A [`Theme`] maps semantic style keys (`"error"`, `"code"`,
//! `"button_primary"`, ...) to utility-class strings. Component handlers
//! look up the keys they care about and fall back to their own defaults
//! when a key is unset, so a partially populated theme is always valid.
//!
//! Themes can be built in code or loaded from a TOML file where every
//! top-level entry is `key = "class list"`:
//!
//! ```toml
//! error = "text-red-500"
//! code = "bg-gray-800 text-gray-200"
//! button_primary = "bg-blue-600 text-white"
//! ```

mod provider;

pub use provider::{StaticThemeProvider, ThemeProvider};

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error loading a theme from disk.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Theme file could not be read.
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    /// Theme file is not valid TOML or contains non-string values.
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable mapping from semantic style keys to utility-class strings.
///
/// Cloning a `Theme` produces the per-conversion snapshot required by the
/// pipeline; the map itself is never mutated during rendering.
///
/// # Example
///
/// ```
/// use tagdown_theme::Theme;
///
/// let theme = Theme::new()
///     .with_class("error", "text-red-500")
///     .with_class("button", "bg-gray-800 text-gray-200");
///
/// assert_eq!(theme.class("error"), Some("text-red-500"));
/// assert_eq!(theme.class_or("missing", "fallback"), "fallback");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    classes: BTreeMap<String, String>,
}

impl Theme {
    /// Create an empty theme. Every lookup falls back to handler defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class mapping, builder style.
    #[must_use]
    pub fn with_class(mut self, key: impl Into<String>, classes: impl Into<String>) -> Self {
        self.classes.insert(key.into(), classes.into());
        self
    }

    /// Look up the class string for a semantic key.
    #[must_use]
    pub fn class(&self, key: &str) -> Option<&str> {
        self.classes.get(key).map(String::as_str)
    }

    /// Look up the class string for a semantic key, falling back to a
    /// handler-supplied default when the key is unset.
    #[must_use]
    pub fn class_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.class(key).unwrap_or(default)
    }

    /// Number of keys set in this theme.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether this theme has no keys set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Parse a theme from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the input is not a flat TOML table
    /// of string values.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(input)?)
    }

    /// Load a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file cannot be read, or
    /// [`ThemeError::Parse`] if its contents are not a valid theme table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

impl<K, V> FromIterator<(K, V)> for Theme
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            classes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
