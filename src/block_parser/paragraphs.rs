use super::images::emit_image;
use crate::html::HtmlDoc;
use crate::inline_parser::format_text;

/// A `{` ... `}` paragraph, optionally opening with an inline image marker.
///
/// Body lines are left-trimmed and joined with `<br>`; a blank body line
/// becomes a double break. Text after `{` on the opening line is not part of
/// the body.
pub(crate) fn try_parse_paragraph(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    doc.open_with_class("div", "paragraph");

    let trimmed = lines[i].trim_start();
    if trimmed[1..].starts_with('!') {
        emit_image(lines[i], doc);
    }

    let mut i = i + 1;
    let mut body = Vec::new();
    while i < lines.len() {
        if lines[i].trim() == "}" {
            break;
        }
        body.push(lines[i].trim_start());
        i += 1;
    }

    doc.open("p");
    doc.raw(&format_text(&body.join("<br>")));
    doc.close();
    doc.close();
    Some(i + 1)
}
