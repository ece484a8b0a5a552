//! Shared test utilities for the sidegen test suite.
//!
//! Provides structure-table literals, stock configs for both modes, and
//! forest lookup/assertion helpers used by the builder and output tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let table = public_table(&["dir,guide", "file,guide/start.md"]);
//! let forest = crate::tree::build_sidebar(&table, &public_config()).unwrap();
//!
//! assert_forest_labels(&forest, &["Guide"]);
//! let guide = find_group(&forest, "Guide");
//! assert_eq!(item_links(&guide.items), vec!["/guide/start"]);
//! ```

use crate::config::{Mode, SidebarConfig};
use crate::types::{SidebarGroup, SidebarItem, SidebarNode};

// =========================================================================
// Configs and table literals
// =========================================================================

/// Stock public-mode config.
pub fn public_config() -> SidebarConfig {
    SidebarConfig::default()
}

/// Stock private-mode config.
pub fn private_config() -> SidebarConfig {
    SidebarConfig {
        mode: Mode::Private,
        ..SidebarConfig::default()
    }
}

/// Assemble a 2-column structure table from data rows.
pub fn public_table(rows: &[&str]) -> String {
    table_with_header(Mode::Public.table_header(), rows)
}

/// Assemble a 3-column structure table from data rows.
pub fn private_table(rows: &[&str]) -> String {
    table_with_header(Mode::Private.table_header(), rows)
}

fn table_with_header(header: &str, rows: &[&str]) -> String {
    let mut table = String::from(header);
    for row in rows {
        table.push('\n');
        table.push_str(row);
    }
    table.push('\n');
    table
}

// =========================================================================
// Forest lookups — panics with a clear message on miss
// =========================================================================

/// Find a group by label among sibling nodes. Panics if not found.
pub fn find_group<'a>(nodes: &'a [SidebarNode], text: &str) -> &'a SidebarGroup {
    nodes
        .iter()
        .find_map(|node| match node {
            SidebarNode::Group(g) if g.text == text => Some(g),
            _ => None,
        })
        .unwrap_or_else(|| {
            let available = labels(nodes);
            panic!("group '{text}' not found. Available: {available:?}")
        })
}

/// Find an item by label among sibling nodes. Panics if not found.
pub fn find_item<'a>(nodes: &'a [SidebarNode], text: &str) -> &'a SidebarItem {
    nodes
        .iter()
        .find_map(|node| match node {
            SidebarNode::Item(i) if i.text == text => Some(i),
            _ => None,
        })
        .unwrap_or_else(|| {
            let available = labels(nodes);
            panic!("item '{text}' not found. Available: {available:?}")
        })
}

// =========================================================================
// Bulk extractors and assertions
// =========================================================================

/// Labels of sibling nodes in order, groups and items alike.
pub fn labels(nodes: &[SidebarNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.text()).collect()
}

/// Links of the item nodes among siblings, in order. Groups are skipped.
pub fn item_links(nodes: &[SidebarNode]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|node| match node {
            SidebarNode::Item(i) => Some(i.link.as_str()),
            SidebarNode::Group(_) => None,
        })
        .collect()
}

/// Assert the top-level labels of the forest, in order.
pub fn assert_forest_labels(forest: &[SidebarNode], expected: &[&str]) {
    assert_eq!(labels(forest), expected, "forest top-level labels mismatch");
}
