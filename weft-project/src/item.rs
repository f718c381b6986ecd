//! Template items: addressable units of template source.
//!
//! Items come from several producers: the physical file system, the
//! in-memory file system, and synthetic fragments that exist outside the
//! project tree. The [`TemplateItem`] trait is the seam between them;
//! consumers share items as `Arc<dyn TemplateItem>` so identity-stable
//! singletons survive into import lists unchanged.

use crate::error::{ProjectError, Result};
use crate::kind::TemplateKind;
use crate::path;
use std::fmt;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;

/// One addressable unit of template source, real or synthetic.
///
/// Every `read` call opens a fresh, independent reader over the item's
/// content: concurrent consumers never observe each other's cursor
/// position.
pub trait TemplateItem: Send + Sync + fmt::Debug {
    /// Slash-normalized virtual path rooted at `/`, used for hierarchy
    /// walking. `None` for synthetic items that exist outside the project
    /// tree.
    fn logical_path(&self) -> Option<&str>;

    /// Root-relative directory containing this item. `None` for synthetic
    /// items.
    fn base_path(&self) -> Option<&str> {
        self.logical_path().map(path::parent_directory)
    }

    /// On-disk location, if the item is backed by a real file.
    fn physical_path(&self) -> Option<&Path> {
        None
    }

    /// The final segment of the logical path, if any.
    fn file_name(&self) -> Option<&str> {
        self.logical_path().map(path::file_name)
    }

    /// The template kind of this item.
    fn kind(&self) -> TemplateKind;

    /// Whether this item has readable content.
    fn exists(&self) -> bool;

    /// Open a fresh reader over the item's content.
    fn read(&self) -> Result<Box<dyn Read + Send>>;

    /// Read the item's content into a string.
    fn read_to_string(&self) -> Result<String> {
        let mut reader = self.read()?;
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(content)
    }
}

/// A template item holding its content in memory.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateItem {
    logical_path: String,
    kind: TemplateKind,
    content: Arc<[u8]>,
}

impl InMemoryTemplateItem {
    /// Create an item at `logical_path` with the given content.
    ///
    /// The path is normalized and the kind inferred from its file name.
    pub fn new(logical_path: impl AsRef<str>, content: impl Into<Vec<u8>>) -> Self {
        let logical_path = path::normalize(logical_path.as_ref());
        let kind = TemplateKind::from_logical_path(&logical_path);
        Self {
            logical_path,
            kind,
            content: content.into().into(),
        }
    }

    /// Replace the inferred kind.
    pub fn with_kind(mut self, kind: TemplateKind) -> Self {
        self.kind = kind;
        self
    }
}

impl TemplateItem for InMemoryTemplateItem {
    fn logical_path(&self) -> Option<&str> {
        Some(&self.logical_path)
    }

    fn kind(&self) -> TemplateKind {
        self.kind
    }

    fn exists(&self) -> bool {
        true
    }

    fn read(&self) -> Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.content))))
    }
}

/// Stands in for a logical path with no backing item.
///
/// Lookups never return "nothing": absence is a value whose `exists()` is
/// false and whose `read()` fails.
#[derive(Debug, Clone)]
pub struct NotFoundItem {
    logical_path: String,
}

impl NotFoundItem {
    /// Create a not-found marker for `logical_path`.
    pub fn new(logical_path: impl Into<String>) -> Self {
        Self {
            logical_path: logical_path.into(),
        }
    }
}

impl TemplateItem for NotFoundItem {
    fn logical_path(&self) -> Option<&str> {
        Some(&self.logical_path)
    }

    fn kind(&self) -> TemplateKind {
        TemplateKind::from_logical_path(&self.logical_path)
    }

    fn exists(&self) -> bool {
        false
    }

    fn read(&self) -> Result<Box<dyn Read + Send>> {
        Err(ProjectError::not_found(self.logical_path.as_str()))
    }
}
