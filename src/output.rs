//! Output formatting for diff results.
//!
//! A report is either the sentinel `No structural differences found.` or the
//! header `Structural differences:` followed by one block per [`DiffRecord`],
//! blocks separated by a blank line. Records are rendered in traversal order.
//!
//! # Examples
//!
//! ```
//! use xmlstructdiff::{compare_forests, format_diff, parse_str, OutputFormat, OutputOptions};
//!
//! let old = parse_str("<root><a/></root>").unwrap();
//! let new = parse_str("<root><b/></root>").unwrap();
//! let diff = compare_forests(&old, &new);
//!
//! let output = format_diff(&diff, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
//! assert!(output.starts_with("Structural differences:"));
//! assert!(output.contains("Missing elements in File 1 at root: b"));
//! ```

use crate::diff::{Diff, DiffRecord, DiffStats, Discrepancy, DiscrepancyKind};
use crate::error::OutputError;
use crate::tree::LineContext;
use colored::*;

/// Report returned when the two documents have the same structure.
pub const NO_DIFFERENCES: &str = "No structural differences found.";

/// First line of a non-empty report.
pub const REPORT_HEADER: &str = "Structural differences:";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, no colors (suitable for piping)
    Plain,
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the diff
    Json,
}

/// Options for controlling output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Append a summary line with counts per discrepancy kind
    pub summary: bool,
}

/// Formats a diff according to the specified format and options.
///
/// # Errors
///
/// Returns `OutputError::JsonSerializationError` if the JSON report cannot be
/// serialized. Text formats never fail.
pub fn format_diff(
    diff: &Diff,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Plain => Ok(format_text(diff, options, false)),
        OutputFormat::Terminal => Ok(format_text(diff, options, true)),
        OutputFormat::Json => format_json(diff),
    }
}

fn format_text(diff: &Diff, options: &OutputOptions, colored: bool) -> String {
    if diff.is_empty() {
        return if colored {
            NO_DIFFERENCES.dimmed().to_string()
        } else {
            NO_DIFFERENCES.to_string()
        };
    }

    let blocks: Vec<String> = diff
        .records
        .iter()
        .map(|record| format_record(record, colored))
        .collect();

    let mut output = String::new();
    if colored {
        output.push_str(&REPORT_HEADER.bold().to_string());
    } else {
        output.push_str(REPORT_HEADER);
    }
    output.push('\n');
    output.push_str(&blocks.join("\n\n"));

    if options.summary {
        output.push_str("\n\n");
        output.push_str(&format_summary(&diff.stats));
    }

    output
}

/// Renders one record as a contiguous multi-line block.
fn format_record(record: &DiffRecord, colored: bool) -> String {
    record
        .discrepancies
        .iter()
        .map(|d| format_discrepancy(d, colored))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_discrepancy(discrepancy: &Discrepancy, colored: bool) -> String {
    let headline = headline(discrepancy);
    let mut lines = vec![if colored {
        colorize_headline(&headline, &discrepancy.kind)
    } else {
        headline
    }];

    if let Some((first, second)) = &discrepancy.context {
        for (label, ctx) in [("File 1", first), ("File 2", second)] {
            let line = context_line(label, ctx);
            lines.push(if colored {
                line.dimmed().to_string()
            } else {
                line
            });
        }
    }

    lines.join("\n")
}

fn headline(discrepancy: &Discrepancy) -> String {
    let path = format_path(&discrepancy.path);
    match &discrepancy.kind {
        DiscrepancyKind::RootCountMismatch { .. } => {
            format!("Different number of root elements at {}", path)
        }
        DiscrepancyKind::TagMismatch { first, second } => {
            format!("Different tags at {}: {} vs {}", path, first, second)
        }
        DiscrepancyKind::ChildCountMismatch { first, second } => {
            format!(
                "Different number of children at {}: {} vs {}",
                path, first, second
            )
        }
        DiscrepancyKind::MissingInFirst(tags) => {
            format!("Missing elements in File 1 at {}: {}", path, tags.join(", "))
        }
        DiscrepancyKind::MissingInSecond(tags) => {
            format!("Missing elements in File 2 at {}: {}", path, tags.join(", "))
        }
    }
}

fn colorize_headline(headline: &str, kind: &DiscrepancyKind) -> String {
    match kind {
        DiscrepancyKind::RootCountMismatch { .. } => headline.bright_magenta().to_string(),
        DiscrepancyKind::TagMismatch { .. } => headline.bright_red().to_string(),
        DiscrepancyKind::ChildCountMismatch { .. } => headline.yellow().to_string(),
        DiscrepancyKind::MissingInFirst(_) => headline.green().to_string(),
        DiscrepancyKind::MissingInSecond(_) => headline.red().to_string(),
    }
}

fn context_line(label: &str, ctx: &LineContext) -> String {
    format!("  {} (line {}): {}", label, ctx.line, ctx.opening_tag)
}

/// Joins path segments with ` > `.
///
/// - `["root", "item"]` → `"root > item"`
/// - `[]` → `"(document)"`
pub fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        return "(document)".to_string();
    }
    path.join(" > ")
}

fn format_summary(stats: &DiffStats) -> String {
    if stats.is_empty() {
        return "Summary: No differences".to_string();
    }

    let counts = [
        (stats.root_count_mismatches, "root count mismatch"),
        (stats.tag_mismatches, "tag mismatch"),
        (stats.child_count_mismatches, "child count mismatch"),
        (stats.missing_in_first, "missing in file 1"),
        (stats.missing_in_second, "missing in file 2"),
    ];
    let parts: Vec<String> = counts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, label)| format!("{} {}", n, label))
        .collect();

    format!("Summary: {}", parts.join(", "))
}

/// Formats a diff as JSON with its records and statistics.
fn format_json(diff: &Diff) -> Result<String, OutputError> {
    use serde_json::json;

    let records: Vec<serde_json::Value> = diff
        .records
        .iter()
        .map(|record| {
            let discrepancies: Vec<serde_json::Value> =
                record.discrepancies.iter().map(discrepancy_to_json).collect();
            json!({ "discrepancies": discrepancies })
        })
        .collect();

    let stats =
        serde_json::to_value(&diff.stats).map_err(|e| OutputError::JsonSerializationError {
            source: e,
        })?;

    let output = json!({
        "identical": diff.is_empty(),
        "records": records,
        "stats": stats,
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn discrepancy_to_json(discrepancy: &Discrepancy) -> serde_json::Value {
    use serde_json::json;

    let (kind, detail) = match &discrepancy.kind {
        DiscrepancyKind::RootCountMismatch { first, second } => {
            ("root_count_mismatch", json!({ "first": first, "second": second }))
        }
        DiscrepancyKind::TagMismatch { first, second } => {
            ("tag_mismatch", json!({ "first": first, "second": second }))
        }
        DiscrepancyKind::ChildCountMismatch { first, second } => (
            "child_count_mismatch",
            json!({ "first": first, "second": second }),
        ),
        DiscrepancyKind::MissingInFirst(tags) => ("missing_in_first", json!({ "tags": tags })),
        DiscrepancyKind::MissingInSecond(tags) => ("missing_in_second", json!({ "tags": tags })),
    };

    let context = discrepancy.context.as_ref().map(|(first, second)| {
        json!({
            "first": { "line": first.line, "opening_tag": first.opening_tag },
            "second": { "line": second.line, "opening_tag": second.opening_tag },
        })
    });

    json!({
        "path": discrepancy.path,
        "kind": kind,
        "detail": detail,
        "context": context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::XmlNode;

    fn missing_record() -> DiffRecord {
        let ctx = XmlNode::new("person", 2).context();
        DiffRecord {
            discrepancies: vec![
                Discrepancy {
                    path: vec!["root".to_string(), "person".to_string()],
                    kind: DiscrepancyKind::MissingInFirst(vec!["detail".to_string()]),
                    context: Some((ctx.clone(), ctx.clone())),
                },
                Discrepancy {
                    path: vec!["root".to_string(), "person".to_string()],
                    kind: DiscrepancyKind::MissingInSecond(vec!["sex".to_string()]),
                    context: Some((ctx.clone(), ctx)),
                },
            ],
        }
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "(document)");
        assert_eq!(format_path(&["root".to_string()]), "root");
        assert_eq!(
            format_path(&["root".to_string(), "item".to_string()]),
            "root > item"
        );
    }

    #[test]
    fn test_plain_no_differences() {
        let output = format_text(&Diff::new(), &OutputOptions::default(), false);
        assert_eq!(output, NO_DIFFERENCES);
    }

    #[test]
    fn test_record_is_contiguous_block() {
        let block = format_record(&missing_record(), false);
        assert_eq!(
            block,
            "Missing elements in File 1 at root > person: detail\n  \
             File 1 (line 2): <person>\n  \
             File 2 (line 2): <person>\n\
             Missing elements in File 2 at root > person: sex\n  \
             File 1 (line 2): <person>\n  \
             File 2 (line 2): <person>"
        );
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let root_count = DiffRecord {
            discrepancies: vec![Discrepancy {
                path: vec![],
                kind: DiscrepancyKind::RootCountMismatch {
                    first: 1,
                    second: 2,
                },
                context: None,
            }],
        };
        let diff = Diff::from_records(vec![missing_record(), root_count]);
        let output = format_text(&diff, &OutputOptions::default(), false);

        assert!(output.starts_with("Structural differences:\nMissing elements in File 1"));
        assert!(output.ends_with(
            "File 2 (line 2): <person>\n\nDifferent number of root elements at (document)"
        ));
    }

    #[test]
    fn test_summary_line() {
        let diff = Diff::from_records(vec![missing_record()]);
        let output = format_text(&diff, &OutputOptions { summary: true }, false);
        assert!(output.ends_with("Summary: 1 missing in file 1, 1 missing in file 2"));
        assert_eq!(format_summary(&DiffStats::new()), "Summary: No differences");
    }

    #[test]
    fn test_headlines() {
        let tag = Discrepancy {
            path: vec!["root".to_string()],
            kind: DiscrepancyKind::TagMismatch {
                first: "root".to_string(),
                second: "base".to_string(),
            },
            context: None,
        };
        assert_eq!(headline(&tag), "Different tags at root: root vs base");

        let count = Discrepancy {
            path: vec!["root".to_string()],
            kind: DiscrepancyKind::ChildCountMismatch {
                first: 3,
                second: 4,
            },
            context: None,
        };
        assert_eq!(
            headline(&count),
            "Different number of children at root: 3 vs 4"
        );
    }

    #[test]
    fn test_format_json() {
        let diff = Diff::from_records(vec![missing_record()]);
        let output = format_json(&diff).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["identical"], false);
        assert_eq!(value["stats"]["missing_in_first"], 1);
        let first = &value["records"][0]["discrepancies"][0];
        assert_eq!(first["kind"], "missing_in_first");
        assert_eq!(first["detail"]["tags"][0], "detail");
        assert_eq!(first["context"]["first"]["line"], 2);
        assert_eq!(first["path"][1], "person");
    }

    #[test]
    fn test_terminal_keeps_text() {
        let diff = Diff::from_records(vec![missing_record()]);
        let output = format_text(&diff, &OutputOptions::default(), true);
        assert!(output.contains("Missing elements in File 2 at root > person: sex"));
    }
}
