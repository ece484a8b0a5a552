//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: every sidebar entry
//! leads with its positional index and label, with the link shown inline and
//! nested entries indented beneath their group. The display mirrors what the
//! rendered sidebar will look like, so a `check` run reads as a preview.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Sidebar (public mode)
//! 001 Guide
//!     001 Guide → /guide/
//!     002 Start → /guide/start
//! 002 About → /about
//!
//! 1 group, 3 links
//! ```

use crate::config::Mode;
use crate::rows::{Record, RecordKind};
use crate::types::SidebarNode;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Singular/plural helper for the summary lines.
fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

// ============================================================================
// Build / check output
// ============================================================================

/// Format the built sidebar forest as an indented preview plus a summary.
pub fn format_build_output(forest: &[SidebarNode], mode: Mode) -> Vec<String> {
    let mut lines = vec![format!("Sidebar ({mode} mode)")];
    let mut groups = 0;
    let mut links = 0;
    walk_forest(forest, 0, &mut lines, &mut groups, &mut links);

    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        count_noun(groups, "group", "groups"),
        count_noun(links, "link", "links")
    ));
    lines
}

fn walk_forest(
    nodes: &[SidebarNode],
    depth: usize,
    lines: &mut Vec<String>,
    groups: &mut usize,
    links: &mut usize,
) {
    for (i, node) in nodes.iter().enumerate() {
        let prefix = format!("{}{} ", indent(depth), format_index(i + 1));
        match node {
            SidebarNode::Group(group) => {
                *groups += 1;
                lines.push(format!("{}{}", prefix, group.text));
                walk_forest(&group.items, depth + 1, lines, groups, links);
            }
            SidebarNode::Item(item) => {
                *links += 1;
                lines.push(format!("{}{} → {}", prefix, item.text, item.link));
            }
        }
    }
}

/// Print build output to stdout.
pub fn print_build_output(forest: &[SidebarNode], mode: Mode) {
    for line in format_build_output(forest, mode) {
        println!("{}", line);
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan results: record counts and the table they were written to.
pub fn format_scan_output(records: &[Record], mode: Mode, table_path: &Path) -> Vec<String> {
    let dirs = records.iter().filter(|r| r.kind == RecordKind::Dir).count();
    let docs = records.iter().filter(|r| r.kind == RecordKind::File).count();
    vec![
        format!("Structure ({mode} mode)"),
        format!(
            "    {}, {}",
            count_noun(dirs, "directory", "directories"),
            count_noun(docs, "document", "documents")
        ),
        format!("    Table: {}", table_path.display()),
    ]
}

/// Print scan output to stdout.
pub fn print_scan_output(records: &[Record], mode: Mode, table_path: &Path) {
    for line in format_scan_output(records, mode, table_path) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::tree::build_sidebar;

    #[test]
    fn build_output_previews_the_tree() {
        let table = public_table(&[
            "dir,guide",
            "file,guide/index.md",
            "file,guide/start.md",
            "file,about.md",
        ]);
        let forest = build_sidebar(&table, &public_config()).unwrap();
        let lines = format_build_output(&forest, Mode::Public);

        assert_eq!(lines[0], "Sidebar (public mode)");
        assert_eq!(lines[1], "001 Guide");
        assert_eq!(lines[2], "    001 Guide → /guide/");
        assert_eq!(lines[3], "    002 Start → /guide/start");
        assert_eq!(lines[4], "002 About → /about");
        assert_eq!(lines.last().unwrap(), "1 group, 3 links");
    }

    #[test]
    fn deep_nesting_indents_per_level() {
        let table = public_table(&["dir,a", "dir,a/b", "file,a/b/doc.md"]);
        let forest = build_sidebar(&table, &public_config()).unwrap();
        let lines = format_build_output(&forest, Mode::Public);

        assert_eq!(lines[1], "001 A");
        assert_eq!(lines[2], "    001 B");
        assert_eq!(lines[3], "        001 Doc → /a/b/doc");
    }

    #[test]
    fn scan_output_counts_records() {
        let table = public_table(&["dir,guide", "file,guide/start.md", "file,about.md"]);
        let records = crate::rows::parse_table(&table, Mode::Public).unwrap();
        let lines = format_scan_output(&records, Mode::Public, Path::new("t.csv"));

        assert_eq!(lines[0], "Structure (public mode)");
        assert_eq!(lines[1], "    1 directory, 2 documents");
        assert_eq!(lines[2], "    Table: t.csv");
    }
}
