//! Standalone code block component.
//!
//! ```markdown
//! [CODE]
//! { "text": "console.log('Hello World');", "display": "center" }
//! [/CODE]
//! ```
//!
//! Unlike fenced markdown code, this block is positioned by the `display`
//! alignment and styled from the theme's `pre`/`code` classes. The text is
//! HTML-escaped on render.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tagdown_theme::Theme;

use crate::align::Alignment;
use crate::handler::{ComponentHandler, RenderOutput, block_pattern};
use crate::util::escape_html;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| block_pattern("CODE"));

#[derive(Debug, Deserialize)]
struct CodeConfig {
    text: String,
    #[serde(default)]
    display: Alignment,
}

/// Handler for `[CODE]` blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodeComponent;

impl CodeComponent {
    /// Create a code handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ComponentHandler for CodeComponent {
    fn name(&self) -> &str {
        "code"
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn process(&self, payload: &str, theme: &Theme) -> RenderOutput {
        let config: CodeConfig = match serde_json::from_str(payload.trim()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid code configuration");
                return RenderOutput::invalid_config(theme, self.name());
            }
        };

        RenderOutput::html(format!(
            r#"<div class="flex {}"><pre class="{}"><code class="{}">{}</code></pre></div>"#,
            config.display.justify_class(),
            escape_html(theme.class_or("pre", "")),
            escape_html(theme.class_or("code", "")),
            escape_html(&config.text),
        ))
    }
}
