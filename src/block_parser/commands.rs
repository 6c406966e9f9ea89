use super::utils::{comment_start, plain_comment, small_comment};
use crate::html::HtmlDoc;
use crate::inline_parser::format_text;

/// A one-line `/command`, optionally annotated with a `/* same-line */`
/// comment and a `/** small **/` comment.
pub(crate) fn try_parse_command(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    let trimmed = lines[i].trim_start();
    // command text runs up to the first comment delimiter of either form
    let command_end = comment_start(trimmed).unwrap_or(trimmed.len()).max(1);

    doc.open_with_class("div", "command-box");
    doc.open_with_class("span", "command");
    doc.raw(&format_text(&trimmed[1..command_end]));
    doc.close();

    if let Some(comment) = plain_comment(trimmed) {
        doc.open_with_class("span", "same-line-comment");
        doc.raw(&format_text(comment));
        doc.close();
    }
    if let Some(comment) = small_comment(trimmed) {
        doc.open_with_class("div", "small-comment");
        doc.raw(&format_text(comment));
        doc.close();
    }
    doc.close();
    Some(i + 1)
}
