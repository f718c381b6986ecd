//! # Weft Project Model
//!
//! Project-side types for the weft template compiler: the logical path
//! space, template kinds, template items, and the project file-system seam
//! with physical and in-memory implementations.
//!
//! ## Overview
//!
//! A weft project addresses its template sources by *logical paths*:
//! slash-normalized virtual paths rooted at `/`, independent of where (or
//! whether) the sources live on disk. The crate provides:
//!
//! - [`TemplateItem`] - one addressable unit of template source, real or
//!   synthetic
//! - [`TemplateKind`] - classification of templates vs. components
//! - [`ProjectFileSystem`] - read-only lookup and enumeration of a
//!   project's items, including ancestor-directory candidate discovery
//! - [`PhysicalProjectFileSystem`] / [`InMemoryProjectFileSystem`] - the
//!   on-disk and in-memory implementations
//!
//! ## Example
//!
//! ```
//! use weft_project::{InMemoryProjectFileSystem, ProjectFileSystem};
//!
//! let mut project = InMemoryProjectFileSystem::new();
//! project.add("/pages/Index.weft", "<h1>Hello</h1>");
//!
//! let item = project.item("/pages/Index.weft")?;
//! assert!(item.exists());
//! assert_eq!(item.base_path(), Some("/pages"));
//! # Ok::<(), weft_project::ProjectError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod file_system;
mod in_memory;
mod item;
mod kind;
pub mod path;
mod physical;

pub use error::{ProjectError, Result};
pub use file_system::ProjectFileSystem;
pub use in_memory::InMemoryProjectFileSystem;
pub use item::{InMemoryTemplateItem, NotFoundItem, TemplateItem};
pub use kind::{
    TemplateKind, COMPONENT_EXTENSION, COMPONENT_IMPORTS_FILE_NAME, TEMPLATE_EXTENSION,
};
pub use physical::{PhysicalProjectFileSystem, PhysicalTemplateItem};
