//! Public sidebar node types.
//!
//! These are the types serialized into `sidebar.gen.json` and consumed by the
//! VitePress theme. They are deliberately separate from the builder's working
//! representation in [`crate::tree`]: construction-time bookkeeping (directory
//! address, index-item flag) lives only on the internal nodes, so it cannot
//! leak into the serialized output — the public types simply have no such
//! fields.

use serde::{Deserialize, Serialize};

/// One entry of the sidebar forest: either a collapsible directory group or a
/// plain document link.
///
/// Serialized untagged — the theme distinguishes the two shapes by their
/// fields (`items` vs. `link`), matching VitePress's own sidebar schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    Group(SidebarGroup),
    Item(SidebarItem),
}

/// A directory in the sidebar: a label plus its ordered children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Display label, derived from the directory name.
    pub text: String,
    /// Groups start collapsed; the theme expands them on click.
    pub collapsed: bool,
    /// Ordered children — nested groups and document items.
    pub items: Vec<SidebarNode>,
}

/// A single navigable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display label, derived from the file name (or the owning group's
    /// label for a directory's index document).
    pub text: String,
    /// Absolute site path. Directory index documents link to the directory
    /// address (`/guide/`); everything else links to the extension-stripped
    /// document path (`/guide/start`).
    pub link: String,
}

impl SidebarNode {
    /// The display label of this node, whichever shape it is.
    pub fn text(&self) -> &str {
        match self {
            SidebarNode::Group(g) => &g.text,
            SidebarNode::Item(i) => &i.text,
        }
    }
}
