//! XMLSTRUCTDIFF command-line interface.
//!
//! Compares the element structure of two XML files and prints a grouped
//! report of where they diverge. It uses clap for argument parsing and wires
//! together the library modules.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use xmlstructdiff::loader::ensure_exists;
use xmlstructdiff::{
    compare_forests, format_diff, parse_file, OutputFormat, OutputOptions, XmlNode,
};

/// XMLSTRUCTDIFF - Structural diff tool for XML documents
///
/// Compares tag structure and child-element sets of two XML files (optionally
/// gzip-compressed), reporting each divergence with its source lines.
#[derive(Parser)]
#[command(name = "xmlstructdiff")]
#[command(version)]
#[command(about = "Structural diff tool for XML documents", long_about = None)]
struct Cli {
    /// First file to compare
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second file to compare
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "plain")]
    format: OutputFormatArg,

    /// Append a summary line with counts per kind of difference
    #[arg(short, long)]
    summary: bool,

    /// Verbose output (show progress on stderr)
    #[arg(short, long)]
    verbose: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Plain text (no colors)
    Plain,
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
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

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Both inputs must exist before either one is parsed.
    ensure_exists(&cli.file1)?;
    ensure_exists(&cli.file2)?;

    if cli.verbose {
        eprintln!("Loading {}...", cli.file1.display());
    }
    let first = parse_file(&cli.file1)?;
    if cli.verbose {
        eprintln!("  {}", describe_forest(&first));
    }

    if cli.verbose {
        eprintln!("Loading {}...", cli.file2.display());
    }
    let second = parse_file(&cli.file2)?;
    if cli.verbose {
        eprintln!("  {}", describe_forest(&second));
    }

    if cli.verbose {
        eprintln!("Comparing structures...");
    }
    let diff = compare_forests(&first, &second);

    if cli.verbose {
        eprintln!("Formatting output...");
    }
    let options = OutputOptions {
        summary: cli.summary,
    };
    let output = format_diff(&diff, &cli.format.into(), &options)
        .context("Failed to format diff output")?;

    println!("{}", output);
    Ok(())
}

/// One-line size report for a parsed document, e.g. `5 elements, depth 3`.
fn describe_forest(forest: &[XmlNode]) -> String {
    let elements: usize = forest.iter().map(XmlNode::element_count).sum();
    let depth = forest.iter().map(XmlNode::depth).max().unwrap_or(0);
    format!("{} elements, depth {}", elements, depth)
}
