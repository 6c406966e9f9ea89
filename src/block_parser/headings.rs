use crate::html::HtmlDoc;
use crate::inline_parser::format_text;

const TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// One `hN` element per line. The marker is 1 to 6 hashes followed by a
/// space; anything else is not a heading.
pub(crate) fn try_parse_heading(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    let trimmed = lines[i].trim();
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) || !trimmed[level..].starts_with(' ') {
        return None;
    }

    doc.open(TAGS[level - 1]);
    doc.raw(&format_text(&trimmed[level + 1..]));
    doc.close();
    Some(i + 1)
}
