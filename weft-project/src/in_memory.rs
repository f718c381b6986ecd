//! In-memory project file system for tests and compile-from-memory hosts.

use crate::error::Result;
use crate::file_system::ProjectFileSystem;
use crate::item::{InMemoryTemplateItem, NotFoundItem, TemplateItem};
use crate::path;
use std::collections::HashMap;
use std::sync::Arc;

/// A project whose items live entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryProjectFileSystem {
    items: HashMap<String, Arc<InMemoryTemplateItem>>,
}

impl InMemoryProjectFileSystem {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at `logical_path`, replacing any existing one there.
    pub fn add(&mut self, logical_path: &str, content: impl Into<Vec<u8>>) {
        let normalized = path::normalize(logical_path);
        let item = InMemoryTemplateItem::new(&normalized, content);
        self.items.insert(normalized, Arc::new(item));
    }

    /// The number of items in the project.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the project holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ProjectFileSystem for InMemoryProjectFileSystem {
    fn item(&self, logical_path: &str) -> Result<Arc<dyn TemplateItem>> {
        let normalized = path::normalize(logical_path);
        match self.items.get(&normalized) {
            Some(item) => {
                let item: Arc<dyn TemplateItem> = item.clone();
                Ok(item)
            }
            None => Ok(Arc::new(NotFoundItem::new(normalized))),
        }
    }

    fn enumerate_items(&self, base: &str) -> Result<Vec<Arc<dyn TemplateItem>>> {
        let base = path::normalize(base);
        let prefix = if base.ends_with('/') {
            base
        } else {
            format!("{base}/")
        };

        let mut found: Vec<(&str, &Arc<InMemoryTemplateItem>)> = self
            .items
            .iter()
            .filter(|(logical_path, _)| logical_path.starts_with(&prefix))
            .map(|(logical_path, item)| (logical_path.as_str(), item))
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));

        Ok(found
            .into_iter()
            .map(|(_, item)| {
                let item: Arc<dyn TemplateItem> = item.clone();
                item
            })
            .collect())
    }
}
