//! Line-annotated element tree for structural comparison.

use std::collections::BTreeSet;

/// A single XML element together with its descendants.
///
/// Only element structure is kept: text, comments, and attributes are not part
/// of the tree. The opening tag text is carried for display purposes only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    /// Element name, `{namespace}local` for namespaced elements.
    pub tag: String,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// 1-based line of the element's opening `<`.
    pub start_line: usize,
    /// 1-based line on which the element's closing construct ends.
    pub end_line: usize,
    /// Literal source text of the start tag.
    pub opening_tag: String,
}

/// An ordered sequence of root-level nodes. A parsed document yields exactly one.
pub type Forest = Vec<XmlNode>;

/// Line number and opening tag of a node, shown next to a discrepancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    pub line: usize,
    pub opening_tag: String,
}

impl XmlNode {
    /// Creates a childless node whose opening tag is the synthetic `<tag>`.
    pub fn new(tag: impl Into<String>, start_line: usize) -> Self {
        let tag = tag.into();
        let opening_tag = format!("<{}>", tag);
        Self {
            tag,
            children: Vec::new(),
            start_line,
            end_line: start_line,
            opening_tag,
        }
    }

    /// Appends a child, returning the node for chaining.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// The set of distinct child tags. Repeated siblings collapse to one entry.
    pub fn child_tags(&self) -> BTreeSet<&str> {
        self.children.iter().map(|c| c.tag.as_str()).collect()
    }

    pub fn context(&self) -> LineContext {
        LineContext {
            line: self.start_line,
            opening_tag: self.opening_tag.clone(),
        }
    }

    /// Number of elements in this subtree, including the node itself.
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| c.element_count())
            .sum::<usize>()
    }

    /// Depth of the deepest element below this node; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }
}
