use super::dispatch;
use super::utils::leading_spaces;
use crate::html::HtmlDoc;

/// An outer collapsible box holding one `details` per `>` header at column
/// zero with the same position marker.
///
/// The box stops at a blank line, a non-header line, or a header carrying a
/// different position marker.
pub(crate) fn try_parse_collapsible_box(
    lines: &[&str],
    i: usize,
    doc: &mut HtmlDoc,
) -> Option<usize> {
    let position = lines[i].trim_start().chars().nth(1)?;
    let class = match position {
        'l' => "collapsible-box-half-left",
        'r' => "collapsible-box-half-right",
        'f' => "collapsible-box-full",
        _ => return None,
    };

    doc.open_with_class("div", class);
    let mut i = i;
    while i < lines.len() {
        let trimmed = lines[i].trim_start();
        if trimmed.is_empty()
            || !trimmed.starts_with('>')
            || trimmed.chars().nth(1) != Some(position)
        {
            break;
        }
        i = parse_details(lines, i, doc);
    }
    doc.close();
    Some(i)
}

/// One `details`/`summary` pair for the header at `i`, followed by its
/// indented entry region.
fn parse_details(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> usize {
    log::debug!("collapsible header at {}: {:?}", i + 1, lines[i]);
    doc.open("details");
    emit_summary(lines[i].trim_start(), doc);
    let i = parse_entries(lines, i + 1, doc);
    doc.close();
    i
}

/// The character after the position marker is the icon unless it is a
/// space; the header text is whatever follows it, right-trimmed.
fn emit_summary(header: &str, doc: &mut HtmlDoc) {
    doc.open_with_class("summary", "header");
    let mut tail = header.char_indices().skip(2);
    if let Some((start, icon)) = tail.next() {
        let text = &header[start + icon.len_utf8()..];
        if icon != ' ' {
            doc.open_with_class("span", "icon");
            doc.text(icon.encode_utf8(&mut [0u8; 4]));
            doc.close();
        }
        doc.text(text.trim_end());
    }
    doc.close();
}

/// Consumes the indented region under a header. Blank lines are skipped; a
/// non-blank line back at column zero ends the region. A nested `>` header
/// becomes a bare `details` inside the current one; anything else is one
/// dispatched block wrapped in an entry container.
fn parse_entries(lines: &[&str], mut i: usize, doc: &mut HtmlDoc) -> usize {
    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }
        if leading_spaces(lines[i]) == 0 {
            break;
        }

        if lines[i].trim_start().starts_with('>') {
            i = parse_details(lines, i, doc);
        } else {
            doc.open_with_class("div", "entry");
            i = dispatch(lines, i, doc);
            doc.close();
        }
    }
    i
}
