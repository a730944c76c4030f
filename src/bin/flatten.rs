//! Flattens an XML document into one line per element.
//!
//! Each line holds the element's ancestor path joined by ` > `, followed by a
//! tab and the line of its opening tag.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use xmlstructdiff::{flatten, parse_file, ParseError};

/// Print every element of an XML file as a `root > child > ...` path
#[derive(Parser)]
#[command(name = "flatten")]
#[command(version)]
#[command(about = "Flatten an XML document into one path per element", long_about = None)]
struct Cli {
    /// XML file to flatten (may be gzip-compressed)
    #[arg(value_name = "XML_FILE")]
    file: PathBuf,

    /// Omit the line number after each path
    #[arg(long)]
    no_lines: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                process::exit(1);
            }
        },
    };

    let forest = match parse_file(&cli.file) {
        Ok(forest) => forest,
        Err(err) => {
            eprintln!("Error: {}", describe(&err));
            process::exit(1);
        }
    };

    if let Err(err) = print_listing(&forest, !cli.no_lines) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn print_listing(forest: &[xmlstructdiff::XmlNode], with_lines: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for root in forest {
        for entry in flatten(root) {
            writeln!(out, "{}", entry.render(with_lines))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Message printed after `Error: ` when the input cannot be loaded.
///
/// Printed to stderr; stdout carries only the listing.
fn describe(err: &ParseError) -> String {
    if let ParseError::FileNotFound { path } = err {
        return format!("File '{}' not found", path);
    }
    if err.is_malformed() {
        let cause = err
            .source()
            .map(|e| e.to_string())
            .unwrap_or_else(|| err.to_string());
        return format!("Could not parse XML file '{}': {}", err.path(), cause);
    }
    format!("Unexpected error processing '{}': {}", err.path(), err)
}
