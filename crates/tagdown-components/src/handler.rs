//! Component handler trait and render output.

use regex::Regex;
use tagdown_theme::Theme;

use crate::util::escape_html;

/// Default error class when the theme leaves `error` unset.
const DEFAULT_ERROR_CLASS: &str = "text-red-500";

/// Output of processing one tagged block.
///
/// `html` replaces the matched block in the markdown source (it is always
/// non-empty — on failure it carries the error markup). `js` is companion
/// script text collected separately and appended once per document, in the
/// order the originating blocks appeared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Literal HTML substituted for the tagged block.
    pub html: String,
    /// Companion script text, empty for components without client-side
    /// behavior.
    pub js: String,
}

impl RenderOutput {
    /// Create an output with HTML only.
    #[must_use]
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            js: String::new(),
        }
    }

    /// Attach companion script text, builder style.
    #[must_use]
    pub fn with_js(mut self, js: impl Into<String>) -> Self {
        self.js = js.into();
        self
    }

    /// Error markup for an unparseable or invalid payload.
    ///
    /// Produces `<div class="...">Error: Invalid {name} configuration</div>`
    /// using the theme's `error` class (default `text-red-500`) and no
    /// script text.
    #[must_use]
    pub fn invalid_config(theme: &Theme, name: &str) -> Self {
        Self::html(format!(
            r#"<div class="{}">Error: Invalid {} configuration</div>"#,
            escape_html(theme.class_or("error", DEFAULT_ERROR_CLASS)),
            name
        ))
    }
}

/// Handler for one component kind.
///
/// A handler is constructed once at pipeline setup, holds no per-call
/// state, and is shared read-only across conversions (hence `Send + Sync`).
///
/// # Contract
///
/// - [`pattern`](Self::pattern) matches an entire tagged block, opening tag
///   through closing tag, with the raw payload as capture group 1.
/// - [`process`](Self::process) never panics and never returns empty HTML;
///   all failure is expressed as error markup in the returned output
///   (see [`RenderOutput::invalid_config`]).
/// - A handler's rendered HTML must not itself match any registered
///   pattern; see [`ComponentRegistry`](crate::ComponentRegistry).
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
/// use regex::Regex;
/// use tagdown_components::{ComponentHandler, RenderOutput};
/// use tagdown_theme::Theme;
///
/// static PATTERN: LazyLock<Regex> =
///     LazyLock::new(|| Regex::new(r"(?s)\[HR\]\s*\n(.*?)\n\[/HR\]").unwrap());
///
/// struct RuleComponent;
///
/// impl ComponentHandler for RuleComponent {
///     fn name(&self) -> &str { "rule" }
///     fn pattern(&self) -> &Regex { &PATTERN }
///     fn process(&self, _payload: &str, _theme: &Theme) -> RenderOutput {
///         RenderOutput::html("<hr>")
///     }
/// }
/// ```
pub trait ComponentHandler: Send + Sync {
    /// Unique, stable identifier used for registry lookup and error
    /// messages. Dispatch is pattern-driven, not name-driven.
    fn name(&self) -> &str;

    /// Regex locating an entire tagged block, payload as capture group 1.
    fn pattern(&self) -> &Regex;

    /// Render one tagged block's payload under the given theme.
    ///
    /// `payload` is the raw text between the tag delimiters; handlers trim
    /// it and decode it as JSON themselves.
    fn process(&self, payload: &str, theme: &Theme) -> RenderOutput;
}

/// Build the block pattern for a bracketed tag.
///
/// Matches `[TAG]` and `[/TAG]` on their own lines with a possibly
/// multi-line payload between them, non-greedy so adjacent blocks of the
/// same kind match separately.
pub(crate) fn block_pattern(tag: &str) -> Regex {
    Regex::new(&format!(
        r"(?s)\[{tag}\]\s*\n(.*?)\n\[/{tag}\]"
    ))
    .expect("tag names contain no regex metacharacters")
}
