//! Shared helpers for the block handlers.

use crate::html::HtmlDoc;
use crate::inline_parser::format_text;

/// Count of leading space characters.
pub(crate) fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Byte offset of the first comment delimiter of either form.
pub(crate) fn comment_start(line: &str) -> Option<usize> {
    line.find("/*")
}

/// Content of a `/* ... */` comment, if present.
///
/// A `/**` opener belongs to the small-comment form and must not be taken
/// for a bare `/*`.
pub(crate) fn plain_comment(line: &str) -> Option<&str> {
    let mut search = 0;
    while let Some(rel) = line[search..].find("/*") {
        let start = search + rel;
        if line[start + 2..].starts_with('*') {
            search = start + 3;
            continue;
        }
        let body = start + 2;
        let end = body + line[body..].find("*/")?;
        return Some(&line[body..end]);
    }
    None
}

/// Content of a `/** ... **/` comment, if present.
pub(crate) fn small_comment(line: &str) -> Option<&str> {
    let start = line.find("/**")? + 3;
    let end = start + line[start..].find("**/")?;
    Some(&line[start..end])
}

/// Emits the comment divs a code fence line may carry, plain form first.
pub(crate) fn emit_fence_comments(
    line: &str,
    comment_class: &str,
    small_comment_class: &str,
    doc: &mut HtmlDoc,
) {
    if let Some(comment) = plain_comment(line) {
        doc.open_with_class("div", comment_class);
        doc.raw(&format_text(comment));
        doc.close();
    }
    if let Some(comment) = small_comment(line) {
        doc.open_with_class("div", small_comment_class);
        doc.raw(&format_text(comment));
        doc.close();
    }
}
