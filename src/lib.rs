//! XMLSTRUCTDIFF - Structural diff tool for XML documents.
//!
//! This library compares the element structure of two XML documents, ignoring
//! attributes and text, and reports where tags or child sets diverge together
//! with the source line of each affected element. It also flattens a single
//! document into one `path > to > element` line per element.
//!
//! # Example
//!
//! ```no_run
//! use xmlstructdiff::{parse_file, compare_forests, format_diff, OutputFormat, OutputOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse two files (either may be gzip-compressed)
//! let old = parse_file(Path::new("old.xml"))?;
//! let new = parse_file(Path::new("new.xml.gz"))?;
//!
//! // Compare their structure
//! let diff = compare_forests(&old, &new);
//!
//! // Format the report
//! let output = format_diff(&diff, &OutputFormat::Plain, &OutputOptions::default())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod output;
pub mod parser;
pub mod tree;

// Re-export commonly used types for convenience
pub use diff::{compare_forests, Diff, DiffRecord, DiffStats, Discrepancy, DiscrepancyKind};
pub use error::{OutputError, ParseError, StructDiffError};
pub use flatten::{flatten, FlatEntry, Flatten};
pub use loader::read_source;
pub use output::{format_diff, OutputFormat, OutputOptions};
pub use parser::{parse_bytes, parse_file, parse_str};
pub use tree::{Forest, LineContext, XmlNode};
