//! The project file-system seam.

use crate::error::Result;
use crate::item::TemplateItem;
use crate::path;
use std::fmt;
use std::sync::Arc;

/// Read-only access to the template items of one project.
///
/// Lookups are never "null": a path with no backing file yields an item
/// whose `exists()` is false. Implementations must be shareable across
/// parallel compilations; all methods are read-only probes.
pub trait ProjectFileSystem: Send + Sync + fmt::Debug {
    /// Get the item at a logical path, existing or not.
    fn item(&self, logical_path: &str) -> Result<Arc<dyn TemplateItem>>;

    /// All template items under a logical directory, in a stable order.
    fn enumerate_items(&self, base: &str) -> Result<Vec<Arc<dyn TemplateItem>>>;

    /// Candidate items named `file_name` at every ancestor directory of
    /// `logical_path`, ascending (closest to the file first), existing or
    /// not. Callers filter on `exists()`.
    fn find_ancestor_items(
        &self,
        logical_path: &str,
        file_name: &str,
    ) -> Result<Vec<Arc<dyn TemplateItem>>> {
        path::validate(logical_path)?;

        let mut items = Vec::new();
        for dir in path::ancestor_directories(logical_path) {
            let candidate = path::join(dir, file_name);
            tracing::trace!("probing ancestor candidate '{}'", candidate);
            items.push(self.item(&candidate)?);
        }
        Ok(items)
    }
}
