//! # sidegen
//!
//! Sidebar tree generator for VitePress documentation sites. A hand-maintained
//! structure table is the data source: `dir` rows announce directories in
//! display order, `file` rows list the documents inside them, and the tool
//! turns that flat sequence into the nested `sidebar.gen.json` the theme
//! renders.
//!
//! # Architecture: Two-Phase Pipeline
//!
//! ```text
//! 1. Parse   structure.csv  →  ordered records   (text → typed rows)
//! 2. Build   records        →  sidebar forest    (rows → nested tree)
//! ```
//!
//! One forward pass, no feedback loop. Row order in the table is the only
//! ordering signal: siblings land in the sidebar in the order their rows
//! first appear. The separate `scan` command regenerates the table from a
//! docs directory, but the build never touches the filesystem beyond the one
//! table read and the one JSON write.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`rows`] | Structure table parsing — delimited text to ordered typed records |
//! | [`address`] | Directory addresses, labels, and links — pure string helpers |
//! | [`tree`] | The builder — records to a forest of groups and items |
//! | [`types`] | Public node shape serialized into `sidebar.gen.json` |
//! | [`config`] | `config.toml` loading, merging, validation |
//! | [`scan`] | Docs-directory walk that regenerates the structure table |
//! | [`output`] | CLI output formatting — indented tree preview of results |
//!
//! # Design Decisions
//!
//! ## Two Node Representations
//!
//! The builder works on arena-allocated groups that carry construction state
//! (directory address, an index-item flag); the serialized output uses the
//! separate [`types::SidebarNode`] shape that has no such fields. Finishing
//! the build converts one into the other, so internal bookkeeping can never
//! leak into the JSON — there is no field-stripping step to forget.
//!
//! ## Two Operating Modes
//!
//! Public sites use a 2-column table and surface the root `index.md` as a
//! trailing homepage entry; private sites use a 3-column table whose scope
//! annotations are carried through untouched for the access-control layer,
//! and never surface the root index. The mode is an explicit value on
//! [`config::SidebarConfig`], passed into the build — both modes run side by
//! side in one process.
//!
//! ## Strict on Structure, Lenient on Rows
//!
//! A header with the wrong column count, an unreadable table, or a directory
//! nested past the depth limit aborts the build with nothing written — a
//! broken table must not ship a half-built sidebar. Individual malformed
//! rows, duplicate index documents, and out-of-order directory
//! announcements are absorbed silently instead: the table is maintained by
//! hand, and a one-row typo should cost one sidebar entry, not the build.

pub mod address;
pub mod config;
pub mod output;
pub mod rows;
pub mod scan;
pub mod tree;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
