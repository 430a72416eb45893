//! Markdown converter wiring substitution, conversion and script output.

use pulldown_cmark::{Options, Parser};
use tagdown_components::ComponentRegistry;
use tagdown_theme::ThemeProvider;

use crate::processor::ComponentProcessor;

/// Component-aware markdown to HTML converter.
///
/// Holds the component registry and theme provider wired at setup time.
/// [`convert`](Self::convert) is a pure function of its input, the current
/// theme snapshot and the registry contents; no state is retained between
/// calls, so one converter can serve concurrent conversions.
pub struct MarkdownConverter {
    registry: ComponentRegistry,
    theme_provider: Box<dyn ThemeProvider>,
    gfm: bool,
}

impl MarkdownConverter {
    /// Create a converter with GFM enabled by default.
    #[must_use]
    pub fn new<P: ThemeProvider + 'static>(registry: ComponentRegistry, theme_provider: P) -> Self {
        Self {
            registry,
            theme_provider: Box::new(theme_provider),
            gfm: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports
    /// tables, strikethrough (`~~text~~`) and task lists (`- [ ] item`).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Parser options based on GFM configuration.
    fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Convert markdown with embedded component blocks to HTML.
    ///
    /// Tagged blocks are substituted first (under a snapshot of the
    /// current theme), the remaining markdown is converted normally, and
    /// collected script fragments are appended after the body, each
    /// wrapped in its own `<script>` element in document order.
    ///
    /// Never fails: malformed component payloads degrade to inline error
    /// markup inside the document.
    #[must_use]
    pub fn convert(&self, markdown: &str) -> String {
        let theme = self.theme_provider.current_theme();

        let substituted = ComponentProcessor::new(&self.registry).process(markdown, &theme);

        let parser = Parser::new_ext(&substituted.markdown, self.parser_options());
        let mut html = String::with_capacity(substituted.markdown.len() * 2);
        pulldown_cmark::html::push_html(&mut html, parser);

        for script in &substituted.scripts {
            html.push_str("<script>\n");
            html.push_str(script);
            if !script.ends_with('\n') {
                html.push('\n');
            }
            html.push_str("</script>\n");
        }

        html
    }
}

impl std::fmt::Debug for MarkdownConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownConverter")
            .field("registry", &self.registry)
            .field("gfm", &self.gfm)
            .finish_non_exhaustive()
    }
}
