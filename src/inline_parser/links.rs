//! Parsing for `[display](href)` links.

use super::format_text;

/// Try to parse a link at the start of `text`.
/// Returns the consumed length, display text, and href. The display text may
/// itself carry decorations; the href is taken literally.
pub(crate) fn try_parse_link(text: &str) -> Option<(usize, &str, &str)> {
    if !text.starts_with('[') {
        return None;
    }
    let sep = text.find("](")?;
    let close = sep + 2 + text[sep + 2..].find(')')?;
    Some((close + 1, &text[1..sep], &text[sep + 2..close]))
}

/// Render a link: the display text runs back through the formatter, the href
/// is emitted as-is.
pub(crate) fn render_link(out: &mut String, display: &str, href: &str) {
    out.push_str("<a target=\"_blank\" href=\"");
    out.push_str(href);
    out.push_str("\">");
    out.push_str(&format_text(display));
    out.push_str("</a>");
}
