use crate::html::HtmlDoc;

/// Verbatim passthrough between a lone `<` line and a lone `>` line.
///
/// The delimiters are consumed without being emitted; blank interior lines
/// are dropped and the rest are concatenated unescaped.
pub(crate) fn try_parse_raw_html(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    let mut i = i + 1;
    while i < lines.len() {
        if lines[i].trim() == ">" {
            i += 1;
            break;
        }
        if !lines[i].trim().is_empty() {
            doc.raw(lines[i]);
        }
        i += 1;
    }
    Some(i)
}
