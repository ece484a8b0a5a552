//! Directory address and label helpers.
//!
//! Every directory in the sidebar is identified by an *address*: an absolute
//! prefix with exactly one leading and one trailing slash (`/guide/deploy/`).
//! The root address is `/`. All functions here are stateless string
//! transformations; the tree builder composes them but never re-implements
//! them.
//!
//! Backslashes are tolerated everywhere (structure tables authored on
//! Windows) and normalized to forward slashes on entry.

/// Reserved file name marking a directory's index document.
pub const INDEX_FILE: &str = "index.md";

/// Document extension stripped when deriving links and labels.
const DOC_EXT: &str = ".md";

/// Label used for an empty path segment.
const ROOT_LABEL: &str = "Root";

/// Normalize a relative or absolute path into a canonical directory address.
///
/// - `"guide"` → `"/guide/"`
/// - `"//guide///deploy/"` → `"/guide/deploy/"`
/// - `"a\\b"` → `"/a/b/"`
/// - `""` → `"/"`
pub fn normalize(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let segments: Vec<&str> = slashed.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// The address of the group that owns `prefix`, or `None` when there is no
/// owning group — for the root itself and for top-level addresses like
/// `/guide/`, whose nodes attach directly to the forest.
pub fn parent_of(prefix: &str) -> Option<String> {
    let segments: Vec<&str> = prefix.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() <= 1 {
        None
    } else {
        Some(format!("/{}/", segments[..segments.len() - 1].join("/")))
    }
}

/// Nesting depth of an address: the number of non-empty segments.
/// `/` is depth 0, `/guide/deploy/` is depth 2.
pub fn depth_of(prefix: &str) -> usize {
    prefix.split('/').filter(|s| !s.is_empty()).count()
}

/// Whether a document path names a directory index (`index.md`, any case).
pub fn is_index_doc(path: &str) -> bool {
    let slashed = path.replace('\\', "/");
    slashed
        .rsplit('/')
        .next()
        .is_some_and(|name| name.eq_ignore_ascii_case(INDEX_FILE))
}

/// Address of the directory containing a document path.
///
/// `"guide/start.md"` → `"/guide/"`; a bare file name maps to `"/"`.
pub fn containing_prefix(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    match slashed.rfind('/') {
        Some(idx) => normalize(&slashed[..idx]),
        None => "/".to_string(),
    }
}

/// Turn a path segment into a display label: hyphens and underscores become
/// spaces, and the first letter of every word is uppercased. An empty
/// segment labels the root.
///
/// - `"getting-started"` → `"Getting Started"`
/// - `"release_notes"` → `"Release Notes"`
/// - `""` → `"Root"`
pub fn label_from_segment(segment: &str) -> String {
    if segment.is_empty() {
        return ROOT_LABEL.to_string();
    }
    let spaced = segment.replace(['-', '_'], " ");
    let mut label = String::with_capacity(spaced.len());
    let mut at_boundary = true;
    for ch in spaced.chars() {
        if ch.is_alphanumeric() {
            if at_boundary {
                label.extend(ch.to_uppercase());
            } else {
                label.push(ch);
            }
            at_boundary = false;
        } else {
            label.push(ch);
            at_boundary = true;
        }
    }
    label
}

/// The site link for a document path.
///
/// Index documents link to their containing directory's address, so the root
/// `index.md` links to `/`. Every other document links to its
/// extension-stripped absolute path.
pub fn link_for(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    if is_index_doc(&slashed) {
        return containing_prefix(&slashed);
    }
    let segments: Vec<&str> = slashed.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", strip_doc_ext(&segments.join("/")))
}

/// Strip a trailing `.md` (any case). Other extensions are left alone.
pub(crate) fn strip_doc_ext(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= DOC_EXT.len()
        && bytes[bytes.len() - DOC_EXT.len()..].eq_ignore_ascii_case(DOC_EXT.as_bytes())
    {
        &name[..name.len() - DOC_EXT.len()]
    } else {
        name
    }
}

/// The last segment of an address — `"/guide/deploy/"` → `"deploy"`, `"/"` → `""`.
pub fn last_segment(prefix: &str) -> &str {
    prefix.split('/').filter(|s| !s.is_empty()).next_back().unwrap_or("")
}
