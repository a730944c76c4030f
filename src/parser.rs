//! Building line-annotated element trees from XML source.
//!
//! Tokenizing is delegated to `roxmltree`. Line spans are computed from the
//! byte range of every element with a precomputed index of newline offsets,
//! and the opening tag is recovered from the source text for display.
//!
//! # Examples
//!
//! ```
//! use xmlstructdiff::parser::parse_str;
//!
//! let forest = parse_str("<root>\n  <child/>\n</root>").unwrap();
//! assert_eq!(forest.len(), 1);
//! assert_eq!(forest[0].tag, "root");
//! assert_eq!(forest[0].end_line, 3);
//! assert_eq!(forest[0].children[0].start_line, 2);
//! ```

use crate::error::ParseError;
use crate::loader::{display_path, read_source};
use crate::tree::{Forest, XmlNode};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

/// Parses a file into a forest holding the document's root element.
///
/// Files whose name ends in `.gz` are decompressed first.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read or decompressed
/// - The content is not UTF-8 (`ParseError::EncodingError`)
/// - The content is not well-formed XML (`ParseError::XmlError`)
///
/// # Examples
///
/// ```no_run
/// use xmlstructdiff::parser::parse_file;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let forest = parse_file(Path::new("catalog.xml.gz"))?;
/// println!("root element: {}", forest[0].tag);
/// # Ok(())
/// # }
/// ```
pub fn parse_file(path: &Path) -> Result<Forest, ParseError> {
    let content = read_source(path)?;
    parse_bytes(&content, &display_path(path))
}

/// Parses raw document bytes. `path` is only used to label errors.
pub fn parse_bytes(content: &[u8], path: &str) -> Result<Forest, ParseError> {
    let text = std::str::from_utf8(content).map_err(|e| ParseError::encoding_error(path, e))?;
    parse_str(text).map_err(|e| ParseError::xml_error(path, e))
}

/// Parses an XML string into a forest.
///
/// Only elements become nodes; text, comments and processing instructions are
/// skipped. Documents with a DOCTYPE are accepted.
pub fn parse_str(text: &str) -> Result<Forest, roxmltree::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;
    let lines = LineIndex::new(text);

    Ok(doc
        .root()
        .children()
        .filter(|n| n.is_element())
        .map(|n| build_node(n, text, &lines))
        .collect())
}

fn build_node(element: Node<'_, '_>, text: &str, lines: &LineIndex) -> XmlNode {
    let range = element.range();
    let start_line = lines.line_of(range.start);
    let end_line = start_line + count_newlines(text, range.start, range.end);

    let tag_name = element.tag_name();
    let tag = match tag_name.namespace() {
        Some(ns) => format!("{{{}}}{}", ns, tag_name.name()),
        None => tag_name.name().to_string(),
    };
    let written = written_name(text, range.start).unwrap_or(tag_name.name());
    let opening_tag = opening_tag(text, range.start, written);

    let children = element
        .children()
        .filter(|n| n.is_element())
        .map(|child| build_node(child, text, lines))
        .collect();

    XmlNode {
        tag,
        children,
        start_line,
        end_line,
        opening_tag,
    }
}

/// Maps byte offsets to 1-based line numbers.
struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let newlines = text
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { newlines }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }
}

fn count_newlines(text: &str, start: usize, end: usize) -> usize {
    text.as_bytes()
        .get(start..end)
        .map(|span| span.iter().filter(|b| **b == b'\n').count())
        .unwrap_or(0)
}

/// The element name exactly as written after `<`, including any prefix.
fn written_name(text: &str, start: usize) -> Option<&str> {
    let rest = text.get(start..)?.strip_prefix('<')?;
    let len = rest
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(rest.len());
    if len == 0 {
        None
    } else {
        Some(&rest[..len])
    }
}

/// Source text from `<name` through the next `>`, or a synthetic `<name>`.
fn opening_tag(text: &str, start: usize, name: &str) -> String {
    let needle = format!("<{}", name);
    text.get(start..)
        .and_then(|rest| {
            let open = rest.find(&needle)?;
            let close = rest[open..].find('>')?;
            Some(rest[open..=open + close].to_string())
        })
        .unwrap_or_else(|| format!("<{}>", name))
}
