//! Physical project file system rooted at an on-disk directory.

use crate::error::{ProjectError, Result};
use crate::file_system::ProjectFileSystem;
use crate::item::TemplateItem;
use crate::kind::{TemplateKind, COMPONENT_EXTENSION, TEMPLATE_EXTENSION};
use crate::path;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// A project file system mapping the logical root `/` onto a directory on
/// disk.
#[derive(Debug, Clone)]
pub struct PhysicalProjectFileSystem {
    root: PathBuf,
}

impl PhysicalProjectFileSystem {
    /// Create a file system rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The on-disk project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical path to its on-disk location.
    ///
    /// The resolved path must stay under the project root.
    fn to_physical(&self, logical_path: &str) -> Result<PathBuf> {
        path::validate(logical_path)?;
        let relative = logical_path.trim_start_matches('/');
        let resolved = self.root.join(relative);
        if !self.contains(&resolved) {
            return Err(ProjectError::PathEscapesRoot {
                path: logical_path.to_string(),
            });
        }
        Ok(resolved)
    }

    /// Containment check under the root, canonicalized when possible
    /// (handles symlinks; non-existent paths fall back to a prefix check).
    fn contains(&self, candidate: &Path) -> bool {
        match (candidate.canonicalize(), self.root.canonicalize()) {
            (Ok(candidate), Ok(root)) => candidate.starts_with(root),
            _ => candidate.starts_with(&self.root),
        }
    }

    /// Map an on-disk path back into the logical path space.
    fn to_logical(&self, physical: &Path) -> Option<String> {
        let relative = physical.strip_prefix(&self.root).ok()?;
        let mut logical = String::new();
        for component in relative.components() {
            logical.push('/');
            logical.push_str(component.as_os_str().to_str()?);
        }
        if logical.is_empty() {
            logical.push('/');
        }
        Some(logical)
    }
}

impl ProjectFileSystem for PhysicalProjectFileSystem {
    fn item(&self, logical_path: &str) -> Result<Arc<dyn TemplateItem>> {
        let normalized = path::normalize(logical_path);
        let physical = self.to_physical(&normalized)?;
        Ok(Arc::new(PhysicalTemplateItem::new(normalized, physical)))
    }

    fn enumerate_items(&self, base: &str) -> Result<Vec<Arc<dyn TemplateItem>>> {
        let normalized = path::normalize(base);
        let dir = self.to_physical(&normalized)?;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut items: Vec<Arc<dyn TemplateItem>> = Vec::new();
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|e| ProjectError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !name.ends_with(TEMPLATE_EXTENSION) && !name.ends_with(COMPONENT_EXTENSION) {
                continue;
            }

            if let Some(logical) = self.to_logical(entry.path()) {
                items.push(Arc::new(PhysicalTemplateItem::new(
                    logical,
                    entry.path().to_path_buf(),
                )));
            } else {
                tracing::warn!(
                    "skipping non-unicode path '{}'",
                    entry.path().display()
                );
            }
        }
        Ok(items)
    }
}

/// A template item backed by a file under the project root.
#[derive(Debug, Clone)]
pub struct PhysicalTemplateItem {
    logical_path: String,
    physical_path: PathBuf,
    kind: TemplateKind,
}

impl PhysicalTemplateItem {
    fn new(logical_path: String, physical_path: PathBuf) -> Self {
        let kind = TemplateKind::from_logical_path(&logical_path);
        Self {
            logical_path,
            physical_path,
            kind,
        }
    }
}

impl TemplateItem for PhysicalTemplateItem {
    fn logical_path(&self) -> Option<&str> {
        Some(&self.logical_path)
    }

    fn physical_path(&self) -> Option<&Path> {
        Some(&self.physical_path)
    }

    fn kind(&self) -> TemplateKind {
        self.kind
    }

    fn exists(&self) -> bool {
        self.physical_path.is_file()
    }

    fn read(&self) -> Result<Box<dyn Read + Send>> {
        let file = File::open(&self.physical_path)
            .map_err(|e| ProjectError::file_read(&self.physical_path, e))?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_project() -> (TempDir, PhysicalProjectFileSystem) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("pages")).unwrap();
        fs::write(root.join("pages/Index.weft"), "<h1>Index</h1>").unwrap();
        fs::write(root.join("pages/_directives.weft"), "{% use app::pages %}").unwrap();
        fs::write(root.join("_directives.weft"), "{% use app::models %}").unwrap();
        fs::write(root.join("Card.weftc"), "<card/>").unwrap();
        fs::write(root.join("notes.txt"), "not a template").unwrap();

        let file_system = PhysicalProjectFileSystem::new(root);
        (temp, file_system)
    }

    #[test]
    fn test_item_reads_file_content() {
        let (_temp, project) = sample_project();
        let item = project.item("/pages/Index.weft").unwrap();

        assert!(item.exists());
        assert_eq!(item.logical_path(), Some("/pages/Index.weft"));
        assert_eq!(item.base_path(), Some("/pages"));
        assert!(item.physical_path().is_some());
        assert_eq!(item.read_to_string().unwrap(), "<h1>Index</h1>");
    }

    #[test]
    fn test_missing_item_reports_not_existing() {
        let (_temp, project) = sample_project();
        let item = project.item("/pages/Missing.weft").unwrap();

        assert!(!item.exists());
        assert!(matches!(
            item.read().err().unwrap(),
            ProjectError::FileRead { .. }
        ));
    }

    #[test]
    fn test_traversal_lookup_is_rejected() {
        let (_temp, project) = sample_project();
        assert!(matches!(
            project.item("/../outside.weft"),
            Err(ProjectError::InvalidLogicalPath { .. })
        ));
    }

    #[test]
    fn test_kind_inferred_from_file_name() {
        let (_temp, project) = sample_project();
        assert_eq!(
            project.item("/Card.weftc").unwrap().kind(),
            TemplateKind::Component
        );
        assert_eq!(
            project.item("/pages/Index.weft").unwrap().kind(),
            TemplateKind::Standard
        );
    }

    #[test]
    fn test_enumerate_items_filters_and_orders() {
        let (_temp, project) = sample_project();
        let items = project.enumerate_items("/").unwrap();

        let paths: Vec<_> = items
            .iter()
            .map(|i| i.logical_path().unwrap().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/Card.weftc",
                "/_directives.weft",
                "/pages/Index.weft",
                "/pages/_directives.weft",
            ]
        );
    }

    #[test]
    fn test_enumerate_missing_directory_is_empty() {
        let (_temp, project) = sample_project();
        assert!(project.enumerate_items("/nope").unwrap().is_empty());
    }

    #[test]
    fn test_find_ancestor_items_through_trait() {
        let (_temp, project) = sample_project();
        let candidates = project
            .find_ancestor_items("/pages/Index.weft", "_directives.weft")
            .unwrap();

        let paths: Vec<_> = candidates
            .iter()
            .map(|i| i.logical_path().unwrap().to_string())
            .collect();
        assert_eq!(paths, vec!["/pages/_directives.weft", "/_directives.weft"]);
        assert!(candidates.iter().all(|i| i.exists()));
    }
}
