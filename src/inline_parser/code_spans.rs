//! Parsing for double-backtick inline code spans.

/// Try to parse a ``-delimited code span at the start of `text`.
/// Returns the consumed length and the raw content when a closing pair
/// exists; a lone opener is not a code span.
pub(crate) fn try_parse_code_span(text: &str) -> Option<(usize, &str)> {
    let rest = text.strip_prefix("``")?;
    let close = rest.find("``")?;
    Some((2 + close + 2, &rest[..close]))
}

/// Render a code span: content HTML-escaped, never decorated.
pub(crate) fn render_code_span(out: &mut String, content: &str) {
    out.push_str("<span class=\"inline-code\">");
    out.push_str(&html_escape::encode_text(content));
    out.push_str("</span>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_code_span() {
        assert_eq!(try_parse_code_span("``code``"), Some((8, "code")));
    }

    #[test]
    fn test_parse_code_span_with_trailing_text() {
        assert_eq!(try_parse_code_span("``a`` rest"), Some((5, "a")));
    }

    #[test]
    fn test_parse_code_span_no_close() {
        assert_eq!(try_parse_code_span("``no close"), None);
    }

    #[test]
    fn test_not_a_code_span() {
        assert_eq!(try_parse_code_span("`single`"), None);
    }

    #[test]
    fn test_empty_code_span() {
        assert_eq!(try_parse_code_span("````"), Some((4, "")));
    }

    #[test]
    fn test_render_escapes_reserved_characters() {
        let mut out = String::new();
        render_code_span(&mut out, "a < b & c");
        assert_eq!(out, "<span class=\"inline-code\">a &lt; b &amp; c</span>");
    }
}
