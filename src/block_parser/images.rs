use crate::html::HtmlDoc;

/// A standalone `![alt](src)` line, optionally prefixed with `!l`/`!r`.
pub(crate) fn try_parse_image(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    emit_image(lines[i], doc);
    Some(i + 1)
}

/// Emits the `img` element for an image marker. Also used by the paragraph
/// handler for a `{!l`/`{!r` opening line.
pub(crate) fn emit_image(line: &str, doc: &mut HtmlDoc) {
    let line = line.strip_prefix('{').unwrap_or(line);
    let trimmed = line.trim_start();

    let class = if trimmed.starts_with("!l") {
        Some("img-half-left")
    } else if trimmed.starts_with("!r") {
        Some("img-half-right")
    } else {
        None
    };

    let alt = bracketed(line, '[', ']').unwrap_or("");
    let src = bracketed(line, '(', ')').unwrap_or("");
    match class {
        Some(class) => doc.void_element("img", &[("alt", alt), ("src", src), ("class", class)]),
        None => doc.void_element("img", &[("alt", alt), ("src", src)]),
    }
}

fn bracketed(line: &str, open: char, close: char) -> Option<&str> {
    let start = line.find(open)? + open.len_utf8();
    let end = start + line[start..].find(close)?;
    Some(&line[start..end])
}
