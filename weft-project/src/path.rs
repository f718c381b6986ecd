//! Logical path utilities for the virtual project path space.
//!
//! Template items are addressed by slash-normalized paths rooted at `/`,
//! independent of the host platform's separators. These helpers normalize,
//! validate, and walk that path space; mapping logical paths onto real disk
//! locations is the physical file system's job.

use crate::error::{ProjectError, Result};

/// Normalize a path into the logical path space.
///
/// Backslashes become forward slashes, repeated separators collapse, and
/// the result always starts with `/`.
pub fn normalize(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in path.split(['/', '\\']).filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Validate a logical path for use as a lookup target.
///
/// The path must be non-empty, rooted at `/`, and free of `.`/`..`
/// traversal segments. A violation is a caller contract bug, not a runtime
/// condition: fail fast.
pub fn validate(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ProjectError::invalid_logical_path(path, "path is empty"));
    }
    if !path.starts_with('/') {
        return Err(ProjectError::invalid_logical_path(
            path,
            "path is not rooted at '/'",
        ));
    }
    if path.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(ProjectError::invalid_logical_path(
            path,
            "path contains traversal segments",
        ));
    }
    Ok(())
}

/// The parent directory of a logical path.
///
/// `/a/b/Page.weft` yields `/a/b`; paths directly under the root yield `/`.
pub fn parent_directory(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

/// The final segment of a logical path.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Join a logical directory and a file name.
pub fn join(dir: &str, file_name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{file_name}")
    } else {
        format!("{dir}/{file_name}")
    }
}

/// Every ancestor directory of a logical file path, closest first.
///
/// `/a/b/c/Page.weft` yields `["/a/b/c", "/a/b", "/a", "/"]`; a file
/// directly under the root yields `["/"]`.
pub fn ancestor_directories(path: &str) -> Vec<&str> {
    let mut dirs = Vec::new();
    let mut dir = parent_directory(path);
    loop {
        dirs.push(dir);
        if dir == "/" {
            break;
        }
        dir = parent_directory(dir);
    }
    dirs
}
