//! Import resolution for template compilation.

use crate::default_directives::DefaultDirectivesItem;
use crate::error::{ImportError, Result};
use crate::walker::{find_override_items, DIRECTIVES_FILE_NAME};
use std::fmt;
use std::sync::Arc;
use weft_project::{ProjectFileSystem, TemplateItem};

/// Ordered sequence of import items.
///
/// The downstream merge applies entries in this order; duplicates are
/// permitted (the same file name at two ancestor levels is two distinct
/// entries).
pub type ImportList = Vec<Arc<dyn TemplateItem>>;

/// Resolves the imports merged into a target template's compilation.
pub trait ImportResolver: Send + Sync + fmt::Debug {
    /// Produce the ordered import list for `target`.
    ///
    /// Order matters to the downstream directive merge: the
    /// default-directives fragment first, then hierarchical override files
    /// root first, so closer-to-the-target declarations win for
    /// overridable directive kinds.
    fn resolve_imports(&self, target: &dyn TemplateItem) -> Result<ImportList>;
}

/// The standard resolver: default directives plus hierarchical override
/// files discovered through a project file system.
#[derive(Debug, Clone)]
pub struct StandardImportResolver {
    file_system: Arc<dyn ProjectFileSystem>,
}

impl StandardImportResolver {
    /// Create a resolver over the given project file system.
    pub fn new(file_system: Arc<dyn ProjectFileSystem>) -> Self {
        Self { file_system }
    }
}

impl ImportResolver for StandardImportResolver {
    fn resolve_imports(&self, target: &dyn TemplateItem) -> Result<ImportList> {
        // Components never receive injected imports.
        if target.kind().is_component() {
            tracing::debug!("component target, no imports injected");
            return Ok(ImportList::new());
        }

        let logical_path = target
            .logical_path()
            .ok_or_else(|| ImportError::invalid_target("target item has no logical path"))?;

        let mut imports = ImportList::new();
        imports.push(DefaultDirectivesItem::shared());

        // Hierarchical overrides come second so they can shadow default
        // directives in the downstream merge.
        let overrides =
            find_override_items(self.file_system.as_ref(), logical_path, DIRECTIVES_FILE_NAME)?;
        imports.extend(overrides);

        tracing::debug!(
            "resolved {} import(s) for '{}'",
            imports.len(),
            logical_path
        );
        Ok(imports)
    }
}
