//! Bold, italics, and strikethrough rewriting.
//!
//! Markers pair with the rightmost later occurrence of the same marker, so
//! `**a**b**` bolds `a**b` rather than `a`. Scanning resumes just past the
//! inserted opening tag, which lets a later marker close inside an earlier
//! pair and produce interleaved tags. Masked byte ranges cover fragments
//! that are already rendered markup; markers never open, close, or match
//! inside them, but a pair may surround one.

use std::ops::Range;

const MARKERS: [(&str, &str, &str); 3] = [
    ("**", "<b>", "</b>"),
    ("__", "<i>", "</i>"),
    ("~~", "<s>", "</s>"),
];

/// Rewrites decoration markers into HTML tags, leaving `masked` ranges
/// untouched.
///
/// A marker with no later partner is left literal.
pub(crate) fn decorate_masked(text: &str, masked: &[Range<usize>]) -> String {
    let mut result = text.to_string();
    let mut masked = masked.to_vec();
    let mut pos = 0;

    while pos < result.len() {
        if let Some(range) = masked.iter().find(|range| range.contains(&pos)) {
            pos = range.end;
            continue;
        }
        let Some((marker, open, close)) = marker_at(&result, pos) else {
            pos += result[pos..].chars().next().map_or(1, char::len_utf8);
            continue;
        };
        match partner(&result, pos + marker.len(), marker, &masked) {
            Some(end) => {
                let mut rewritten = String::with_capacity(result.len() + open.len() + close.len());
                rewritten.push_str(&result[..pos]);
                rewritten.push_str(open);
                rewritten.push_str(&result[pos + marker.len()..end]);
                rewritten.push_str(close);
                rewritten.push_str(&result[end + marker.len()..]);
                result = rewritten;

                // ranges sit strictly between or after the marker pair
                let grow_open = open.len() - marker.len();
                let grow_both = grow_open + close.len() - marker.len();
                for range in &mut masked {
                    if range.start >= end {
                        range.start += grow_both;
                        range.end += grow_both;
                    } else if range.start >= pos {
                        range.start += grow_open;
                        range.end += grow_open;
                    }
                }
                pos += open.len();
            }
            None => pos += marker.len(),
        }
    }
    result
}

/// Rightmost occurrence of `marker` at or after `from` that does not touch a
/// masked range.
fn partner(text: &str, from: usize, marker: &str, masked: &[Range<usize>]) -> Option<usize> {
    let mut search_end = text.len();
    while let Some(rel) = text[from..search_end].rfind(marker) {
        let start = from + rel;
        let in_mask = masked
            .iter()
            .any(|range| start < range.end && start + marker.len() > range.start);
        if in_mask {
            search_end = start + 1;
            continue;
        }
        return Some(start);
    }
    None
}

fn marker_at(text: &str, pos: usize) -> Option<(&'static str, &'static str, &'static str)> {
    MARKERS
        .iter()
        .copied()
        .find(|(marker, _, _)| text[pos..].starts_with(marker))
}
