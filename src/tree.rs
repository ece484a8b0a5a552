//! Sidebar tree construction.
//!
//! A single forward pass over the structure table's records materializes a
//! forest of groups (directories) and items (documents). Row order is the
//! law: siblings appear in the sidebar in the order their rows appear in the
//! table, and a `dir` row is expected to announce its group before the rows
//! of the documents inside it.
//!
//! ## Working Representation
//!
//! Groups live in an arena (`Vec<GroupNode>`) owned by the builder. Parents
//! reference children by arena index, and a prefix → index map gives O(1)
//! re-lookup when later rows address an existing group. Each group is owned
//! exactly once — by its parent's child list or by the forest — while the
//! map holds only indices, so there is no shared or cyclic ownership.
//!
//! Construction-time bookkeeping (the group's address, the
//! one-index-item-per-group flag) exists only on the arena nodes.
//! [`finish`](SidebarBuilder::finish) converts the arena into the public
//! [`SidebarNode`] shape, which has no such fields to leak.
//!
//! ## Tolerated Malformations
//!
//! A document row can reference a directory that never had a `dir` row, or
//! whose ancestors appear out of order. The builder synthesizes and mounts
//! the missing groups on demand with labels derived from the path, so the
//! tree stays well-formed. Duplicate index documents for one directory are
//! collapsed to the first occurrence. None of these are errors.

use crate::address;
use crate::config::{Mode, SidebarConfig};
use crate::rows::{self, Record, RecordKind, RowError};
use crate::types::{SidebarGroup, SidebarItem, SidebarNode};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to read structure table {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Structure table error: {0}")]
    Table(#[from] RowError),
    #[error("Directory depth exceeds {max}: {prefix} (depth {depth})")]
    DepthExceeded {
        prefix: String,
        depth: usize,
        max: usize,
    },
}

/// A group in the builder's arena. `children` holds arena indices for nested
/// groups and finished items for documents.
struct GroupNode {
    text: String,
    children: Vec<Node>,
    has_index_item: bool,
}

enum Node {
    Group(usize),
    Item(SidebarItem),
}

/// Incremental sidebar builder. Feed records in table order, then
/// [`finish`](Self::finish).
pub struct SidebarBuilder<'a> {
    config: &'a SidebarConfig,
    groups: Vec<GroupNode>,
    by_prefix: HashMap<String, usize>,
    forest: Vec<Node>,
    homepage: Option<SidebarItem>,
}

impl<'a> SidebarBuilder<'a> {
    pub fn new(config: &'a SidebarConfig) -> Self {
        Self {
            config,
            groups: Vec::new(),
            by_prefix: HashMap::new(),
            forest: Vec::new(),
            homepage: None,
        }
    }

    /// Process one record. Only `dir` rows can fail (depth limit); document
    /// rows mount whatever they need defensively.
    pub fn push_record(&mut self, record: &Record) -> Result<(), BuildError> {
        match record.kind {
            RecordKind::Dir => self.push_dir(&record.path),
            RecordKind::File => {
                self.push_file(&record.path);
                Ok(())
            }
        }
    }

    fn push_dir(&mut self, path: &str) -> Result<(), BuildError> {
        let prefix = address::normalize(path);
        let depth = address::depth_of(&prefix);
        if depth > self.config.max_depth {
            return Err(BuildError::DepthExceeded {
                prefix,
                depth,
                max: self.config.max_depth,
            });
        }
        // The root is not a group; a `dir` row for it is a no-op.
        if prefix != "/" {
            self.ensure_mounted(&prefix);
        }
        Ok(())
    }

    fn push_file(&mut self, path: &str) {
        if address::is_index_doc(path) {
            let prefix = address::containing_prefix(path);
            if prefix == "/" {
                // Root index: in public mode it becomes the trailing
                // homepage entry (first occurrence wins); in private mode it
                // never reaches the sidebar.
                if self.config.mode == Mode::Public && self.homepage.is_none() {
                    self.homepage = Some(SidebarItem {
                        text: self.config.homepage_text.clone(),
                        link: address::link_for(path),
                    });
                }
            } else {
                let id = self.ensure_mounted(&prefix);
                let group = &mut self.groups[id];
                if !group.has_index_item {
                    // The index document's label is the group's own label.
                    let item = SidebarItem {
                        text: group.text.clone(),
                        link: address::link_for(path),
                    };
                    group.children.push(Node::Item(item));
                    group.has_index_item = true;
                }
            }
        } else {
            let prefix = address::containing_prefix(path);
            let filename = path
                .replace('\\', "/")
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string();
            let item = SidebarItem {
                text: address::label_from_segment(address::strip_doc_ext(&filename)),
                link: address::link_for(path),
            };
            if prefix == "/" {
                self.forest.push(Node::Item(item));
            } else {
                let id = self.ensure_mounted(&prefix);
                self.groups[id].children.push(Node::Item(item));
            }
        }
    }

    /// Return the arena index of the group at `prefix`, creating it — and
    /// recursively any missing ancestors — and attaching each new group to
    /// its parent's child list or the forest. A group is attached exactly
    /// once, at creation.
    fn ensure_mounted(&mut self, prefix: &str) -> usize {
        if let Some(&id) = self.by_prefix.get(prefix) {
            return id;
        }
        let id = self.groups.len();
        self.groups.push(GroupNode {
            text: address::label_from_segment(address::last_segment(prefix)),
            children: Vec::new(),
            has_index_item: false,
        });
        self.by_prefix.insert(prefix.to_string(), id);
        match address::parent_of(prefix) {
            Some(parent) => {
                let parent_id = self.ensure_mounted(&parent);
                self.groups[parent_id].children.push(Node::Group(id));
            }
            None => self.forest.push(Node::Group(id)),
        }
        id
    }

    /// Finish the pass: append the pending homepage entry (always last) and
    /// convert the arena into the public node shape.
    pub fn finish(mut self) -> Vec<SidebarNode> {
        if let Some(homepage) = self.homepage.take() {
            self.forest.push(Node::Item(homepage));
        }
        let forest = std::mem::take(&mut self.forest);
        forest.into_iter().map(|node| self.resolve(node)).collect()
    }

    fn resolve(&mut self, node: Node) -> SidebarNode {
        match node {
            Node::Item(item) => SidebarNode::Item(item),
            Node::Group(id) => {
                let children = std::mem::take(&mut self.groups[id].children);
                let items = children.into_iter().map(|c| self.resolve(c)).collect();
                SidebarNode::Group(SidebarGroup {
                    text: self.groups[id].text.clone(),
                    collapsed: true,
                    items,
                })
            }
        }
    }
}

/// Parse a structure table and build the sidebar forest in one pass.
pub fn build_sidebar(text: &str, config: &SidebarConfig) -> Result<Vec<SidebarNode>, BuildError> {
    let records = rows::parse_table(text, config.mode)?;
    let mut builder = SidebarBuilder::new(config);
    for record in &records {
        builder.push_record(record)?;
    }
    Ok(builder.finish())
}

/// Read a structure table from disk and build the sidebar forest.
///
/// A read failure names the attempted path so a bad `--docs` root or a
/// missing table is immediately diagnosable.
pub fn build_from_path(path: &Path, config: &SidebarConfig) -> Result<Vec<SidebarNode>, BuildError> {
    let text = std::fs::read_to_string(path).map_err(|source| BuildError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    build_sidebar(&text, config)
}
