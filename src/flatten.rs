//! Flattening a tree into one path-per-element listing.
//!
//! # Examples
//!
//! ```
//! use xmlstructdiff::{flatten, parse_str};
//!
//! let forest = parse_str("<root><item><name>x</name></item></root>").unwrap();
//! let lines: Vec<String> = flatten(&forest[0]).map(|e| e.render(false)).collect();
//! assert_eq!(lines, vec!["root", "root > item", "root > item > name"]);
//! ```

use crate::tree::XmlNode;

/// One element of a flattened listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    /// Ancestor chain joined by ` > `, ending with the element's own tag.
    pub path: String,
    /// 1-based line of the element's opening tag.
    pub line: usize,
}

impl FlatEntry {
    /// Renders the entry as `path` or `path<TAB>line`.
    pub fn render(&self, with_lines: bool) -> String {
        if with_lines {
            format!("{}\t{}", self.path, self.line)
        } else {
            self.path.clone()
        }
    }
}

/// Lazy pre-order walk over a tree.
///
/// Children are pushed in reverse so that they pop in document order. The
/// iterator only borrows the tree; call [`flatten`] again to restart.
pub struct Flatten<'a> {
    stack: Vec<(&'a XmlNode, String)>,
}

/// Walks `root` parent-first, children in document order.
pub fn flatten(root: &XmlNode) -> Flatten<'_> {
    Flatten {
        stack: vec![(root, root.tag.clone())],
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry;

    fn next(&mut self) -> Option<FlatEntry> {
        let (node, path) = self.stack.pop()?;

        for child in node.children.iter().rev() {
            self.stack
                .push((child, format!("{} > {}", path, child.tag)));
        }

        Some(FlatEntry {
            path,
            line: node.start_line,
        })
    }
}
