//! Forward-slash path handling for cross-platform consistency.
//!
//! All paths in this workspace use forward slashes internally and are
//! converted to the platform-native form only at I/O boundaries. Paths
//! relative to a folder root never start with a slash; the root itself is
//! the empty string.

use std::path::PathBuf;

/// Normalize a path to forward slashes.
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Convert a normalized path to a platform-native [`PathBuf`] for I/O.
pub fn to_native(path: &str) -> PathBuf {
    PathBuf::from(path)
}

/// Join a base path with a segment, avoiding duplicate separators.
///
/// An empty base yields the segment unchanged, so joining onto a folder
/// root ("" relative) works without a leading slash.
pub fn join(base: &str, segment: &str) -> String {
    let segment = normalize(segment);
    if base.is_empty() {
        return segment;
    }
    if segment.is_empty() {
        return base.to_string();
    }
    if base.ends_with('/') {
        format!("{base}{segment}")
    } else {
        format!("{base}/{segment}")
    }
}

/// Get the parent of a path, or `None` at the top.
///
/// `"a/b" -> Some("a")`, `"/a" -> Some("/")`, `"a" -> None`.
pub fn parent_of(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(trimmed[..idx].to_string()),
        None => None,
    }
}

/// Get the final segment of a path.
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Append a trailing slash if the path does not already end with one.
pub fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Strip trailing slashes, keeping a lone `/` intact.
pub fn without_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

/// Express `path` relative to `root`, or `None` if it is not within it.
///
/// The root itself maps to the empty string. Comparison is textual, so
/// both arguments must already be normalized the same way.
pub fn relative_to<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root = without_trailing_slash(root);
    if root.is_empty() {
        return Some(path);
    }
    if path == root {
        return Some("");
    }
    path.strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
}
