//! Component substitution over raw markdown.

use tagdown_components::ComponentRegistry;
use tagdown_theme::Theme;

/// Result of one substitution pass over a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionResult {
    /// Markdown with every tagged block replaced by literal HTML.
    pub markdown: String,
    /// Script fragments collected from processed blocks, in the order the
    /// originating blocks appeared in the document.
    pub scripts: Vec<String>,
}

/// Substitution engine applying registered handlers to markdown source.
///
/// Handlers run sequentially in registration order. Each handler's pass
/// finds all non-overlapping matches of its pattern against the current
/// working text (after earlier handlers' substitutions) and replaces them
/// left to right in a single `replace_all`, so replaced spans are never
/// re-scanned within a pass and offsets need no manual bookkeeping.
///
/// When two handlers' patterns could match overlapping text, the handler
/// registered earlier wins for that span: its pass runs first and removes
/// the literal tag text the later pattern depends on.
///
/// Tag openers without a matching closer simply fail to match and are left
/// in the output as literal text.
pub struct ComponentProcessor<'a> {
    registry: &'a ComponentRegistry,
}

impl<'a> ComponentProcessor<'a> {
    /// Create a processor over the given registry.
    #[must_use]
    pub fn new(registry: &'a ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Replace every tagged block in `markdown` with its rendered HTML,
    /// collecting script fragments in document order.
    #[must_use]
    pub fn process(&self, markdown: &str, theme: &Theme) -> SubstitutionResult {
        let mut working = markdown.to_owned();
        let mut scripts = Vec::new();

        for handler in self.registry.handlers() {
            let mut replaced = 0usize;
            working = handler
                .pattern()
                .replace_all(&working, |caps: &regex::Captures<'_>| {
                    let payload = caps.get(1).map_or("", |m| m.as_str());
                    let output = handler.process(payload, theme);
                    if !output.js.is_empty() {
                        scripts.push(output.js);
                    }
                    replaced += 1;
                    output.html
                })
                .into_owned();

            if replaced > 0 {
                tracing::debug!(
                    component = handler.name(),
                    count = replaced,
                    "Substituted component blocks"
                );
            }
        }

        SubstitutionResult {
            markdown: working,
            scripts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use std::sync::LazyLock;
    use tagdown_components::{ComponentHandler, RenderOutput};

    static NOTE_PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)\[NOTE\]\s*\n(.*?)\n\[/NOTE\]").unwrap());

    struct NoteComponent;

    impl ComponentHandler for NoteComponent {
        fn name(&self) -> &str {
            "note"
        }

        fn pattern(&self) -> &Regex {
            &NOTE_PATTERN
        }

        fn process(&self, payload: &str, _theme: &Theme) -> RenderOutput {
            RenderOutput::html(format!("<aside>{}</aside>", payload.trim()))
                .with_js(format!("note('{}');", payload.trim()))
        }
    }

    struct ShoutingNoteComponent;

    impl ComponentHandler for ShoutingNoteComponent {
        fn name(&self) -> &str {
            "shouting-note"
        }

        fn pattern(&self) -> &Regex {
            &NOTE_PATTERN
        }

        fn process(&self, payload: &str, _theme: &Theme) -> RenderOutput {
            RenderOutput::html(format!("<aside>{}</aside>", payload.to_uppercase()))
        }
    }

    #[test]
    fn test_empty_registry_passes_text_through() {
        let registry = ComponentRegistry::new();
        let result = ComponentProcessor::new(&registry).process("# Hi\n", &Theme::new());

        assert_eq!(result.markdown, "# Hi\n");
        assert!(result.scripts.is_empty());
    }

    #[test]
    fn test_replaces_block_and_collects_script() {
        let registry = ComponentRegistry::new().with_component(NoteComponent);
        let result = ComponentProcessor::new(&registry)
            .process("before\n\n[NOTE]\nhello\n[/NOTE]\n\nafter", &Theme::new());

        assert_eq!(result.markdown, "before\n\n<aside>hello</aside>\n\nafter");
        assert_eq!(result.scripts, vec!["note('hello');"]);
    }

    #[test]
    fn test_scripts_collected_in_document_order() {
        let registry = ComponentRegistry::new().with_component(NoteComponent);
        let input = "[NOTE]\nfirst\n[/NOTE]\n\n[NOTE]\nsecond\n[/NOTE]";
        let result = ComponentProcessor::new(&registry).process(input, &Theme::new());

        assert_eq!(result.scripts, vec!["note('first');", "note('second');"]);
    }

    #[test]
    fn test_unclosed_tag_left_as_literal_text() {
        let registry = ComponentRegistry::new().with_component(NoteComponent);
        let input = "[NOTE]\nno closing tag here";
        let result = ComponentProcessor::new(&registry).process(input, &Theme::new());

        assert_eq!(result.markdown, input);
        assert!(result.scripts.is_empty());
    }

    #[test]
    fn test_earlier_handler_wins_overlap() {
        // Both handlers match [NOTE] blocks; the first registered consumes
        // the tag text, so the second finds nothing.
        let registry = ComponentRegistry::new()
            .with_component(NoteComponent)
            .with_component(ShoutingNoteComponent);
        let result = ComponentProcessor::new(&registry)
            .process("[NOTE]\nquiet\n[/NOTE]", &Theme::new());

        assert_eq!(result.markdown, "<aside>quiet</aside>");
    }

    #[test]
    fn test_registration_order_swap_flips_winner() {
        let registry = ComponentRegistry::new()
            .with_component(ShoutingNoteComponent)
            .with_component(NoteComponent);
        let result = ComponentProcessor::new(&registry)
            .process("[NOTE]\nquiet\n[/NOTE]", &Theme::new());

        assert_eq!(result.markdown, "<aside>QUIET</aside>");
    }

    #[test]
    fn test_default_registry_replaces_all_tag_kinds() {
        let registry = ComponentRegistry::with_defaults();
        let input = concat!(
            "[MAP]\n{\"center\": {\"lat\": 1.0, \"lng\": 2.0}, \"zoom\": 3}\n[/MAP]\n\n",
            "[BUTTON]\n{\"text\": \"Go\", \"link\": \"/go\"}\n[/BUTTON]\n\n",
            "[CODE]\n{\"text\": \"ls\"}\n[/CODE]\n",
        );
        let result = ComponentProcessor::new(&registry).process(input, &Theme::new());

        assert!(!result.markdown.contains("[MAP]"));
        assert!(!result.markdown.contains("[BUTTON]"));
        assert!(!result.markdown.contains("[CODE]"));
        // Only the map contributes a script fragment.
        assert_eq!(result.scripts.len(), 1);
    }
}
