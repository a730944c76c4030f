//! Core structural diff algorithm.
//!
//! Two forests are walked in lockstep. Nodes are aligned purely by position:
//! the i-th child on one side is compared with the i-th child on the other.
//! For every aligned pair the comparator checks the tag, the number of
//! children and the set of child tags, then descends into the children unless
//! the tags disagree.
//!
//! Findings for the same node pair are grouped into one [`DiffRecord`]. That
//! record is emitted before any records found deeper in the pair's subtree.
//!
//! # Examples
//!
//! ```
//! use xmlstructdiff::{compare_forests, parse_str};
//!
//! let old = parse_str("<root><a/><b/></root>").unwrap();
//! let new = parse_str("<root><a/><c/></root>").unwrap();
//! let diff = compare_forests(&old, &new);
//!
//! // One record for the root pair, one for the <b>/<c> tag mismatch.
//! assert_eq!(diff.records.len(), 2);
//! assert_eq!(diff.stats.missing_in_first, 1);
//! assert_eq!(diff.stats.missing_in_second, 1);
//! ```

use crate::tree::{LineContext, XmlNode};
use serde::Serialize;

/// The kind of structural discrepancy found at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscrepancyKind {
    /// The two forests hold a different number of nodes
    RootCountMismatch { first: usize, second: usize },
    /// Aligned nodes carry different tags
    TagMismatch { first: String, second: String },
    /// Aligned nodes have a different number of children
    ChildCountMismatch { first: usize, second: usize },
    /// Child tags present in the second document only, sorted
    MissingInFirst(Vec<String>),
    /// Child tags present in the first document only, sorted
    MissingInSecond(Vec<String>),
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    /// Tags from the root to the divergence point. Empty at the top level.
    pub path: Vec<String>,
    pub kind: DiscrepancyKind,
    /// Line and opening tag of the node on each side, when a node pair exists.
    pub context: Option<(LineContext, LineContext)>,
}

/// All findings for one aligned node pair, reported as one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord {
    pub discrepancies: Vec<Discrepancy>,
}

/// Counts of each discrepancy kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub root_count_mismatches: usize,
    pub tag_mismatches: usize,
    pub child_count_mismatches: usize,
    pub missing_in_first: usize,
    pub missing_in_second: usize,
}

impl DiffStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies every discrepancy in the given records.
    pub fn from_records(records: &[DiffRecord]) -> Self {
        let mut stats = Self::new();
        for discrepancy in records.iter().flat_map(|r| r.discrepancies.iter()) {
            stats.record(&discrepancy.kind);
        }
        stats
    }

    fn record(&mut self, kind: &DiscrepancyKind) {
        match kind {
            DiscrepancyKind::RootCountMismatch { .. } => self.root_count_mismatches += 1,
            DiscrepancyKind::TagMismatch { .. } => self.tag_mismatches += 1,
            DiscrepancyKind::ChildCountMismatch { .. } => self.child_count_mismatches += 1,
            DiscrepancyKind::MissingInFirst(_) => self.missing_in_first += 1,
            DiscrepancyKind::MissingInSecond(_) => self.missing_in_second += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.root_count_mismatches
            + self.tag_mismatches
            + self.child_count_mismatches
            + self.missing_in_first
            + self.missing_in_second
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The complete comparison result, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct Diff {
    pub records: Vec<DiffRecord>,
    pub stats: DiffStats,
}

impl Diff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a diff from records, computing the statistics.
    pub fn from_records(records: Vec<DiffRecord>) -> Self {
        let stats = DiffStats::from_records(&records);
        Self { records, stats }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over every discrepancy across all records.
    pub fn discrepancies(&self) -> impl Iterator<Item = &Discrepancy> {
        self.records.iter().flat_map(|r| r.discrepancies.iter())
    }
}

/// Compares two forests and returns every structural discrepancy.
///
/// Comparing a forest with itself always yields an empty diff.
pub fn compare_forests(first: &[XmlNode], second: &[XmlNode]) -> Diff {
    let mut records = Vec::new();
    compare_level(first, second, &[], &mut records);
    Diff::from_records(records)
}

/// Compares two sibling sequences below `path`, appending records.
fn compare_level(
    first: &[XmlNode],
    second: &[XmlNode],
    path: &[String],
    records: &mut Vec<DiffRecord>,
) {
    if first.len() != second.len() {
        records.push(DiffRecord {
            discrepancies: vec![Discrepancy {
                path: path.to_vec(),
                kind: DiscrepancyKind::RootCountMismatch {
                    first: first.len(),
                    second: second.len(),
                },
                context: None,
            }],
        });
        return;
    }

    for (node1, node2) in first.iter().zip(second.iter()) {
        let mut current_path = path.to_vec();
        current_path.push(node1.tag.clone());

        let discrepancies = compare_pair(node1, node2, &current_path);
        if !discrepancies.is_empty() {
            records.push(DiffRecord { discrepancies });
        }

        // Once tags disagree the children can no longer be aligned.
        if node1.tag == node2.tag {
            compare_level(&node1.children, &node2.children, &current_path, records);
        }
    }
}

/// Findings for a single aligned pair, without descending.
fn compare_pair(node1: &XmlNode, node2: &XmlNode, path: &[String]) -> Vec<Discrepancy> {
    let context = Some((node1.context(), node2.context()));
    let finding = |kind: DiscrepancyKind| Discrepancy {
        path: path.to_vec(),
        kind,
        context: context.clone(),
    };

    if node1.tag != node2.tag {
        return vec![finding(DiscrepancyKind::TagMismatch {
            first: node1.tag.clone(),
            second: node2.tag.clone(),
        })];
    }

    let mut found = Vec::new();

    if node1.children.len() != node2.children.len() {
        found.push(finding(DiscrepancyKind::ChildCountMismatch {
            first: node1.children.len(),
            second: node2.children.len(),
        }));
    }

    let tags1 = node1.child_tags();
    let tags2 = node2.child_tags();
    if tags1 != tags2 {
        let missing_in_first: Vec<String> =
            tags2.difference(&tags1).map(|t| t.to_string()).collect();
        let missing_in_second: Vec<String> =
            tags1.difference(&tags2).map(|t| t.to_string()).collect();

        if !missing_in_first.is_empty() {
            found.push(finding(DiscrepancyKind::MissingInFirst(missing_in_first)));
        }
        if !missing_in_second.is_empty() {
            found.push(finding(DiscrepancyKind::MissingInSecond(missing_in_second)));
        }
    }

    found
}
