//! Hierarchical discovery of override directive files.

use crate::error::{ImportError, Result};
use std::sync::Arc;
use weft_project::{path, ProjectFileSystem, TemplateItem};

/// Well-known file name probed at every ancestor directory level.
pub const DIRECTIVES_FILE_NAME: &str = "_directives.weft";

/// Find override files named `file_name` in the directory ancestry of
/// `logical_path`, ordered root first.
///
/// The file system yields candidates ascending (closest to the target
/// first); existing ones are collected and the sequence reversed, so the
/// project-root-level override comes first and the override closest to the
/// target comes last. The downstream merge treats later entries as higher
/// priority for overridable directive kinds.
///
/// A missing override file at a given level is silently skipped, not an
/// error. A malformed target path is a caller contract violation and fails
/// fast; file-system probe failures propagate unmodified.
pub fn find_override_items(
    file_system: &dyn ProjectFileSystem,
    logical_path: &str,
    file_name: &str,
) -> Result<Vec<Arc<dyn TemplateItem>>> {
    path::validate(logical_path)
        .map_err(|source| ImportError::invalid_target(source.to_string()))?;

    let candidates = file_system.find_ancestor_items(logical_path, file_name)?;
    let mut found: Vec<Arc<dyn TemplateItem>> = candidates
        .into_iter()
        .filter(|item| item.exists())
        .collect();
    // Candidates arrive ascending; the merge contract wants descending.
    found.reverse();

    tracing::debug!(
        "found {} override file(s) for '{}'",
        found.len(),
        logical_path
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_project::InMemoryProjectFileSystem;

    fn paths(items: &[Arc<dyn TemplateItem>]) -> Vec<String> {
        items
            .iter()
            .map(|i| i.logical_path().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_overrides_ordered_root_first() {
        let mut project = InMemoryProjectFileSystem::new();
        project.add("/a/_directives.weft", "{% use a %}");
        project.add("/a/b/_directives.weft", "{% use b %}");
        project.add("/a/b/c/Page.weft", "<p/>");

        let found =
            find_override_items(&project, "/a/b/c/Page.weft", DIRECTIVES_FILE_NAME).unwrap();
        assert_eq!(
            paths(&found),
            vec!["/a/_directives.weft", "/a/b/_directives.weft"]
        );
    }

    #[test]
    fn test_missing_levels_are_skipped() {
        let mut project = InMemoryProjectFileSystem::new();
        project.add("/a/_directives.weft", "{% use a %}");

        let found =
            find_override_items(&project, "/a/b/c/Page.weft", DIRECTIVES_FILE_NAME).unwrap();
        assert_eq!(paths(&found), vec!["/a/_directives.weft"]);
    }

    #[test]
    fn test_no_overrides_is_empty_not_error() {
        let project = InMemoryProjectFileSystem::new();
        let found =
            find_override_items(&project, "/a/b/Page.weft", DIRECTIVES_FILE_NAME).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_root_level_target_probes_root() {
        let mut project = InMemoryProjectFileSystem::new();
        project.add("/_directives.weft", "{% use root %}");

        let found = find_override_items(&project, "/Page.weft", DIRECTIVES_FILE_NAME).unwrap();
        assert_eq!(paths(&found), vec!["/_directives.weft"]);
    }

    #[test]
    fn test_malformed_path_fails_fast() {
        let project = InMemoryProjectFileSystem::new();

        let err = find_override_items(&project, "", DIRECTIVES_FILE_NAME).unwrap_err();
        assert!(matches!(err, ImportError::InvalidTarget { .. }));

        let err =
            find_override_items(&project, "a/Page.weft", DIRECTIVES_FILE_NAME).unwrap_err();
        assert!(matches!(err, ImportError::InvalidTarget { .. }));
    }

    #[test]
    fn test_custom_override_file_name() {
        let mut project = InMemoryProjectFileSystem::new();
        project.add("/a/_layout.weft", "{% use layout %}");
        project.add("/a/_directives.weft", "{% use a %}");

        let found = find_override_items(&project, "/a/Page.weft", "_layout.weft").unwrap();
        assert_eq!(paths(&found), vec!["/a/_layout.weft"]);
    }
}
