//! Structure table parsing.
//!
//! Turns the raw delimited text of a structure table into an ordered sequence
//! of typed [`Record`]s. The format is deliberately minimal: comma-separated
//! fields, a field may be wrapped in double quotes to protect embedded
//! commas, no escaped-quote syntax, no multi-line fields. A leading BOM is
//! stripped and blank lines are ignored.
//!
//! The header row is validated for column count only — 2 columns in public
//! mode, 3 in private — its names are not checked. Data rows that are too
//! short or whose first field is neither `dir` nor `file` are skipped
//! silently; the table is hand-maintained and a stray half-filled row must
//! not take the whole build down.
//!
//! Row order is preserved exactly. It is the only ordering signal the tree
//! builder has: a directory row announces its group before the rows of the
//! documents inside it.

use crate::config::Mode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowError {
    #[error("Structure table has no lines")]
    Empty,
    #[error("{mode} mode expects {expected} header columns, found {actual}")]
    SchemaMismatch {
        mode: Mode,
        expected: usize,
        actual: usize,
    },
}

/// Whether a record describes a directory or a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Dir,
    File,
}

/// One parsed row of the structure table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub kind: RecordKind,
    /// Relative path as written in the table; slash style is normalized
    /// later by the address helpers.
    pub path: String,
    /// Opaque scope annotation from the third column (private mode).
    /// Carried through untouched for the access-control layer; never
    /// interpreted here.
    pub scope: Option<String>,
}

/// Parse a structure table into records, validating the header against the
/// active mode.
pub fn parse_table(text: &str, mode: Mode) -> Result<Vec<Record>, RowError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = split_row(lines.next().ok_or(RowError::Empty)?);
    let expected = mode.column_count();
    if header.len() != expected {
        return Err(RowError::SchemaMismatch {
            mode,
            expected,
            actual: header.len(),
        });
    }

    Ok(lines
        .map(split_row)
        .filter_map(record_from_fields)
        .collect())
}

/// Split one line on commas, honoring double quotes as a toggle.
///
/// `a,"b,c",d` → `["a", "b,c", "d"]`. Fields are trimmed of surrounding
/// whitespace after splitting.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields.iter().map(|f| f.trim().to_string()).collect()
}

/// Build a record from split fields, or `None` for rows to skip.
fn record_from_fields(fields: Vec<String>) -> Option<Record> {
    if fields.len() < 2 {
        return None;
    }
    let kind = match fields[0].as_str() {
        "dir" => RecordKind::Dir,
        "file" => RecordKind::File,
        _ => return None,
    };
    Some(Record {
        kind,
        path: fields[1].clone(),
        scope: fields.get(2).filter(|s| !s.is_empty()).cloned(),
    })
}
