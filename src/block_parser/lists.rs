use super::utils::leading_spaces;
use crate::html::HtmlDoc;
use crate::inline_parser::format_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }

    fn matches(self, marker: u8) -> bool {
        match self {
            Self::Unordered => marker == b'-',
            Self::Ordered => marker.is_ascii_digit(),
        }
    }

    fn of_marker(marker: u8) -> Option<Self> {
        if marker == b'-' {
            Some(Self::Unordered)
        } else if marker.is_ascii_digit() {
            Some(Self::Ordered)
        } else {
            None
        }
    }
}

pub(crate) fn try_parse_unordered_list(
    lines: &[&str],
    i: usize,
    doc: &mut HtmlDoc,
    offset: Option<usize>,
) -> Option<usize> {
    parse_list(lines, i, doc, offset, ListKind::Unordered)
}

pub(crate) fn try_parse_ordered_list(
    lines: &[&str],
    i: usize,
    doc: &mut HtmlDoc,
    offset: Option<usize>,
) -> Option<usize> {
    parse_list(lines, i, doc, offset, ListKind::Ordered)
}

/// Indentation-driven list loop, recursing for deeper levels and for the
/// other list kind at the same level.
///
/// A nested list is emitted as a sibling element right after the item it
/// sits under, inside the same `ul`/`ol`. The offset defaults to the current
/// line's indentation so lists work inside collapsible entries.
fn parse_list(
    lines: &[&str],
    mut i: usize,
    doc: &mut HtmlDoc,
    offset: Option<usize>,
    kind: ListKind,
) -> Option<usize> {
    let offset = offset.unwrap_or_else(|| leading_spaces(lines[i]));
    log::debug!("{} at line {}, offset {offset}", kind.tag(), i + 1);

    doc.open(kind.tag());
    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            break;
        }
        let trimmed = line.trim_start();
        let Some(line_kind) = ListKind::of_marker(trimmed.as_bytes()[0]) else {
            break;
        };

        let spaces = leading_spaces(line);
        if offset > 0 && spaces < offset {
            // back out to the ancestor that owns this depth
            break;
        }

        match line.as_bytes().get(offset).copied() {
            Some(marker) if kind.matches(marker) => {
                doc.open("li");
                doc.raw(&format_text(item_text(trimmed, kind)));
                doc.close();
                i += 1;
            }
            Some(marker) if ListKind::of_marker(marker).is_some() => {
                // the other kind at this level: adjacent sibling list
                i = parse_list(lines, i, doc, Some(offset), line_kind)?;
            }
            _ => {
                // deeper marker opens a nested list
                i = parse_list(lines, i, doc, Some(spaces), line_kind)?;
            }
        }
    }
    doc.close();
    Some(i)
}

/// Item text with the marker stripped: `- ` for unordered items, leading
/// digits plus an optional `.` and space for ordered ones.
fn item_text(trimmed: &str, kind: ListKind) -> &str {
    let rest = match kind {
        ListKind::Unordered => trimmed.strip_prefix('-').unwrap_or(trimmed),
        ListKind::Ordered => {
            let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
            rest.strip_prefix('.').unwrap_or(rest)
        }
    };
    rest.strip_prefix(' ').unwrap_or(rest)
}
