use super::utils::emit_fence_comments;
use crate::html::HtmlDoc;

/// Dispatches a fence line to the one-line or multi-line shape.
///
/// If the line two ahead ends with a closing fence the region is a single
/// code line; otherwise it is a block that runs until a line whose trimmed
/// content is exactly the fence.
pub(crate) fn try_parse_code(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    let one_liner = lines
        .get(i + 2)
        .is_some_and(|line| line.trim_end().ends_with("```"));
    if one_liner {
        parse_code_line(lines, i, doc)
    } else {
        parse_code_block(lines, i, doc)
    }
}

fn parse_code_line(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    log::debug!("code line at {}", i + 1);
    doc.open_with_class("div", "line-code-box");
    emit_fence_comments(lines[i], "line-code-comment", "line-code-small-comment", doc);
    doc.open_with_class("code", "line-code");
    doc.text(lines[i + 1].trim_start());
    doc.close();
    doc.close();
    Some(i + 3)
}

fn parse_code_block(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    log::debug!("code block at {}", i + 1);
    doc.open_with_class("div", "block-code-box");
    emit_fence_comments(
        lines[i],
        "block-code-comment",
        "block-code-small-comment",
        doc,
    );

    let mut i = i + 1;
    let mut code = Vec::new();
    while i < lines.len() {
        if lines[i].trim() == "```" {
            i += 1;
            break;
        }
        code.push(lines[i]);
        i += 1;
    }

    // an unterminated block still emits what was buffered
    doc.open_with_class("code", "block-code");
    doc.open("pre");
    doc.text(&code.join("\n"));
    doc.close();
    doc.close();
    doc.close();
    Some(i)
}
