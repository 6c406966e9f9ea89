pub mod block_parser;
pub mod html;
pub mod inline_parser;

pub use block_parser::BlockParser;
pub use html::HtmlDoc;
pub use inline_parser::format_text;

use std::fs;
use std::io;
use std::path::Path;

/// Converts PAML text into an HTML fragment.
///
/// Empty input gives an empty string; malformed lines are skipped, never an
/// error.
///
/// # Examples
///
/// ```no_run
/// let html = paml2html::convert("# Header 1\n");
/// assert_eq!(html, "<h1>Header 1</h1>");
/// ```
pub fn convert(input: &str) -> String {
    BlockParser::new(input).parse().finish()
}

/// Converts PAML text, pretty-printing the fragment with `width` spaces per
/// nesting level.
pub fn convert_indented(input: &str, width: usize) -> String {
    BlockParser::new(input).parse().finish_indented(width)
}

/// Reads a PAML file and converts it.
pub fn convert_file(path: impl AsRef<Path>) -> io::Result<String> {
    Ok(convert(&fs::read_to_string(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_heading_end_to_end() {
        assert_eq!(convert("# Header 1\n"), "<h1>Header 1</h1>");
    }

    #[test]
    fn test_list_end_to_end() {
        assert_eq!(convert("- a\n- b\n"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_paragraph_with_image_end_to_end() {
        assert_eq!(
            convert("{!l[alt](img.png)\ntext\n}\n"),
            "<div class=\"paragraph\"><img alt=\"alt\" src=\"img.png\" \
             class=\"img-half-left\" /><p>text</p></div>"
        );
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        assert_eq!(convert("???\n# ok\n"), "<h1>ok</h1>");
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.paml");
        fs::write(&path, "# Header 1\n").unwrap();
        assert_eq!(convert_file(&path).unwrap(), "<h1>Header 1</h1>");
    }

    #[test]
    fn test_convert_file_missing() {
        assert!(convert_file("does-not-exist.paml").is_err());
    }

    #[test]
    fn test_indented_output_keeps_text_inline() {
        let html = convert_indented("- a\n- b\n", 2);
        assert_eq!(html, "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>");
    }
}
