use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Write};

use clap::Parser;

use paml2html::{convert, convert_indented};

mod cli;
use cli::Cli;

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let input = fs::read_to_string(&cli.source_file)?;
    let output = match cli.indent {
        Some(width) => convert_indented(&input, width),
        None => convert(&input),
    };

    let mut destination = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.destination_file)?;
    destination.write_all(output.as_bytes())?;

    Ok(())
}
