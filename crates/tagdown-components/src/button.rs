//! Link button component.
//!
//! ```markdown
//! [BUTTON]
//! { "text": "Click me", "link": "/test", "type": "primary", "display": "center" }
//! [/BUTTON]
//! ```
//!
//! Renders an anchor styled from the theme's button classes inside a flex
//! wrapper controlling horizontal alignment.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tagdown_theme::Theme;

use crate::align::Alignment;
use crate::handler::{ComponentHandler, RenderOutput, block_pattern};
use crate::util::escape_html;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| block_pattern("BUTTON"));

/// Visual variant of a button.
///
/// - `default`: theme's `button` classes
/// - `primary`: theme's `button_primary` classes
/// - `big`: theme's `button_big` classes added atop the base `button` classes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    /// Base button styling.
    #[default]
    Default,
    /// Emphasized call-to-action styling.
    Primary,
    /// Enlarged button, base styling plus size classes.
    Big,
}

#[derive(Debug, Deserialize)]
struct ButtonConfig {
    text: String,
    link: String,
    #[serde(rename = "type", default)]
    kind: ButtonKind,
    #[serde(default)]
    display: Alignment,
}

impl ButtonConfig {
    fn classes(&self, theme: &Theme) -> String {
        match self.kind {
            ButtonKind::Default => theme.class_or("button", "").to_owned(),
            ButtonKind::Primary => theme.class_or("button_primary", "").to_owned(),
            ButtonKind::Big => format!(
                "{} {}",
                theme.class_or("button", ""),
                theme.class_or("button_big", "")
            ),
        }
    }
}

/// Handler for `[BUTTON]` blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonComponent;

impl ButtonComponent {
    /// Create a button handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ComponentHandler for ButtonComponent {
    fn name(&self) -> &str {
        "button"
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn process(&self, payload: &str, theme: &Theme) -> RenderOutput {
        let config: ButtonConfig = match serde_json::from_str(payload.trim()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid button configuration");
                return RenderOutput::invalid_config(theme, self.name());
            }
        };

        RenderOutput::html(format!(
            r#"<div class="flex {}"><a href="{}" class="{}">{}</a></div>"#,
            config.display.justify_class(),
            escape_html(&config.link),
            escape_html(&config.classes(theme)),
            escape_html(&config.text),
        ))
    }
}
