//! Docs directory scanning.
//!
//! Regenerates the structure table the sidebar builder consumes. The walk
//! visits entries sorted by file name with every directory announced before
//! its contents — exactly the ordering contract the builder relies on — and
//! records:
//!
//! - a `dir` row for every directory,
//! - a `file` row for every Markdown document.
//!
//! Hidden entries (dotfiles, including `.vitepress/` itself) are skipped, as
//! is everything that is not a Markdown file. In private mode the emitted
//! `_scopes` column is left empty: scope values are authored by hand in the
//! table afterwards, and a re-scan is expected to be reconciled rather than
//! blindly overwrite a scoped table.

use crate::config::Mode;
use crate::rows::{Record, RecordKind};
use std::path::Path;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_markdown(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Walk the docs root and produce structure records in builder order.
pub fn scan(root: &Path) -> Result<Vec<Record>, ScanError> {
    let mut records = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("walked entries live under the root");
        let path = rel.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            records.push(Record {
                kind: RecordKind::Dir,
                path,
                scope: None,
            });
        } else if entry.file_type().is_file() && is_markdown(&entry) {
            records.push(Record {
                kind: RecordKind::File,
                path,
                scope: None,
            });
        }
    }
    Ok(records)
}

/// Serialize records into structure-table text for the given mode.
pub fn to_table(records: &[Record], mode: Mode) -> String {
    let mut table = String::from(mode.table_header());
    table.push('\n');
    for record in records {
        let kind = match record.kind {
            RecordKind::Dir => "dir",
            RecordKind::File => "file",
        };
        table.push_str(kind);
        table.push(',');
        table.push_str(&table_field(&record.path));
        if mode == Mode::Private {
            table.push(',');
            if let Some(scope) = &record.scope {
                table.push_str(&table_field(scope));
            }
        }
        table.push('\n');
    }
    table
}

/// Quote a field when it would otherwise split. The table format has no
/// escaped-quote syntax, so embedded quotes are dropped.
fn table_field(value: &str) -> String {
    let clean: String = value.chars().filter(|&c| c != '"').collect();
    if clean.contains(',') {
        format!("\"{clean}\"")
    } else {
        clean
    }
}
