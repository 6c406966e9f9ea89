use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paml2html")]
#[command(author, version)]
#[command(about = "Convert PAML markup into HTML fragments")]
#[command(
    long_about = "paml2html converts PAML, a line-oriented plain-text markup format, into an \
    HTML fragment. It supports headings, collapsible boxes, commands, code lines and blocks \
    with comments, images, paragraphs, nested lists, tables, raw HTML passthrough, and inline \
    formatting (bold, italics, strikethrough, links, code spans)."
)]
#[command(after_help = "\
EXAMPLES:

    # Convert a file, appending to the destination
    paml2html notes.paml notes.html

    # Convert with 4-space output indentation
    paml2html --indent 4 notes.paml notes.html")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// The .paml file used for conversion
    pub source_file: PathBuf,

    /// The .html destination file. It will be appended if it exists and
    /// created if it doesn't
    pub destination_file: PathBuf,

    /// Amount of spaces used for indentation. Indentation is disabled by
    /// default
    #[arg(long)]
    pub indent: Option<usize>,
}
