//! Block-level parser.
//!
//! Walks the line buffer once, classifies the construct starting at the
//! cursor, and hands it to the matching handler. Handlers return the next
//! unconsumed index, or `None` when the line turned out to be malformed, in
//! which case the dispatcher skips one line and keeps going. Conversion
//! never fails on bad markup.

use crate::html::HtmlDoc;

mod code;
mod collapsibles;
mod commands;
mod headings;
mod images;
mod lists;
mod paragraphs;
mod raw_html;
mod tables;
mod utils;

use code::try_parse_code;
use collapsibles::try_parse_collapsible_box;
use commands::try_parse_command;
use headings::try_parse_heading;
use images::try_parse_image;
use lists::{try_parse_ordered_list, try_parse_unordered_list};
use paragraphs::try_parse_paragraph;
use raw_html::try_parse_raw_html;
use tables::try_parse_table;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Block constructs, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Blank,
    Heading,
    Collapsible,
    Command,
    Code,
    Image,
    Paragraph,
    UnorderedList,
    OrderedList,
    Table,
    RawHtml,
}

impl BlockKind {
    /// Classifies a line by its first non-space characters.
    fn classify(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            Some(Self::Blank)
        } else if trimmed.starts_with('#') {
            Some(Self::Heading)
        } else if trimmed.starts_with('>') {
            Some(Self::Collapsible)
        } else if trimmed.starts_with('/') {
            Some(Self::Command)
        } else if trimmed.starts_with("```") {
            Some(Self::Code)
        } else if trimmed.starts_with("![") {
            Some(Self::Image)
        } else if trimmed.starts_with('{') {
            Some(Self::Paragraph)
        } else if trimmed.starts_with('-') {
            Some(Self::UnorderedList)
        } else if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            Some(Self::OrderedList)
        } else if trimmed.starts_with('|') {
            Some(Self::Table)
        } else if trimmed.starts_with('<') {
            Some(Self::RawHtml)
        } else {
            None
        }
    }
}

/// Routes the line at `i` to its handler and returns the next cursor.
///
/// Collapsible entries recurse back into this function, so it lives outside
/// `BlockParser` and takes the sink explicitly.
pub(crate) fn dispatch(lines: &[&str], i: usize, doc: &mut HtmlDoc) -> usize {
    let line = lines[i];
    log::debug!("dispatching line {}: {line:?}", i + 1);

    let parsed = match BlockKind::classify(line) {
        Some(BlockKind::Blank) => return i + 1,
        Some(BlockKind::Heading) => try_parse_heading(lines, i, doc),
        Some(BlockKind::Collapsible) => try_parse_collapsible_box(lines, i, doc),
        Some(BlockKind::Command) => try_parse_command(lines, i, doc),
        Some(BlockKind::Code) => try_parse_code(lines, i, doc),
        Some(BlockKind::Image) => try_parse_image(lines, i, doc),
        Some(BlockKind::Paragraph) => try_parse_paragraph(lines, i, doc),
        Some(BlockKind::UnorderedList) => try_parse_unordered_list(lines, i, doc, None),
        Some(BlockKind::OrderedList) => try_parse_ordered_list(lines, i, doc, None),
        Some(BlockKind::Table) => try_parse_table(lines, i, doc),
        Some(BlockKind::RawHtml) => try_parse_raw_html(lines, i, doc),
        None => None,
    };

    match parsed {
        Some(next) => next,
        None => {
            log::warn!("unsupported line, skipping: {line:?}");
            i + 1
        }
    }
}

pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    doc: HtmlDoc,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lines: Vec<&str> = input.lines().collect();
        if !lines.is_empty() {
            // sentinel so two-line lookahead never runs off the end
            lines.push("");
        }
        Self {
            lines,
            pos: 0,
            doc: HtmlDoc::new(),
        }
    }

    pub fn parse(mut self) -> HtmlDoc {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        log::debug!("starting parse of {} lines", self.lines.len());

        while self.pos < self.lines.len() {
            self.pos = dispatch(&self.lines, self.pos, &mut self.doc);
        }

        self.doc
    }
}

#[cfg(test)]
mod tests {
    mod code;
    mod collapsibles;
    mod commands;
    mod headings;
    mod helpers;
    mod images;
    mod lists;
    mod paragraphs;
    mod raw_html;
    mod tables;
}
