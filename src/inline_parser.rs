//! Inline text formatter.
//!
//! Takes one logical line (or a `<br>`-joined paragraph body) and rewrites
//! it into HTML: double-backtick code spans, `[display](href)` links, and
//! bold/italic/strikethrough decoration over the whole line, with the
//! rendered spans and links masked off so their content is never decorated
//! while markers still pair around them. The output is raw markup for the
//! sink's `raw()` channel; escaping happens only inside code spans.

mod code_spans;
mod decorations;
mod links;

use code_spans::{render_code_span, try_parse_code_span};
use decorations::decorate_masked;
use links::{render_link, try_parse_link};

/// A segment of a line, produced by the left-to-right tokenizer.
///
/// `Plain` runs pass through verbatim until the decoration pass.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InlineToken<'a> {
    CodeSpan(&'a str),
    Link { display: &'a str, href: &'a str },
    Plain(&'a str),
}

/// Formats a piece of inline text into an HTML fragment.
///
/// The input is trimmed first; markers without a matching partner are left
/// literal rather than decorated. Decoration markers may enclose a link, as
/// in `**[text](href)**`.
pub fn format_text(text: &str) -> String {
    let text = text.trim();
    let mut out = String::new();
    let mut rendered = Vec::new();
    for token in tokenize(text) {
        let start = out.len();
        match token {
            InlineToken::CodeSpan(code) => {
                render_code_span(&mut out, code);
                rendered.push(start..out.len());
            }
            InlineToken::Link { display, href } => {
                render_link(&mut out, display, href);
                rendered.push(start..out.len());
            }
            InlineToken::Plain(run) => out.push_str(run),
        }
    }
    decorate_masked(&out, &rendered)
}

/// Single-pass left-to-right segmentation into code spans, links, and plain
/// runs.
pub(crate) fn tokenize(text: &str) -> Vec<InlineToken<'_>> {
    let mut tokens = Vec::new();
    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut run_start = 0;

    while pos < text.len() {
        if bytes[pos] == b'`'
            && let Some((len, content)) = try_parse_code_span(&text[pos..])
        {
            log::trace!("code span at {pos}: {content:?}");
            if run_start < pos {
                tokens.push(InlineToken::Plain(&text[run_start..pos]));
            }
            tokens.push(InlineToken::CodeSpan(content));
            pos += len;
            run_start = pos;
            continue;
        }

        if bytes[pos] == b'['
            && let Some((len, display, href)) = try_parse_link(&text[pos..])
        {
            log::trace!("link at {pos}: {display:?} -> {href:?}");
            if run_start < pos {
                tokens.push(InlineToken::Plain(&text[run_start..pos]));
            }
            tokens.push(InlineToken::Link { display, href });
            pos += len;
            run_start = pos;
            continue;
        }

        pos += text[pos..].chars().next().map_or(1, char::len_utf8);
    }

    if run_start < text.len() {
        tokens.push(InlineToken::Plain(&text[run_start..]));
    }
    tokens
}
