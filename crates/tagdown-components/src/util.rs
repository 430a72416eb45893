//! Escaping helpers shared by component handlers.

use std::borrow::Cow;

/// Escape text for interpolation into HTML content or attribute values.
///
/// Escapes `&`, `<`, `>`, `"` and `'` (single quote as `&#039;`).
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape text for interpolation into a single-quoted JavaScript string
/// literal.
#[must_use]
pub fn escape_js(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\'', '\n', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html_plain_text_borrowed() {
        let result = escape_html("plain text");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "plain text");
    }

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;"
        );
    }

    #[test]
    fn test_escape_html_single_quote_entity() {
        assert_eq!(
            escape_html("console.log('Hello World');"),
            "console.log(&#039;Hello World&#039;);"
        );
    }

    #[test]
    fn test_escape_js_quotes_and_backslashes() {
        assert_eq!(escape_js(r"it's a \ test"), r"it\'s a \\ test");
    }

    #[test]
    fn test_escape_js_newlines() {
        assert_eq!(escape_js("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn test_escape_js_plain_text_borrowed() {
        let result = escape_js("Tour Eiffel");
        assert!(matches!(result, Cow::Borrowed(_)));
    }
}
