//! # Weft Import Resolution
//!
//! Decides which template fragments contribute directives to a target
//! template's compilation, and in what order. The fragments themselves are
//! never rendered; the downstream compiler merges their directives
//! (namespace imports, injected helpers, tag registrations) into the
//! target's output as if textually prepended.
//!
//! ## Overview
//!
//! Resolution composes two sources:
//!
//! - [`DefaultDirectivesItem`] - a single, file-less fragment holding the
//!   baseline directives every standard template starts from
//! - [`find_override_items`] - override files named
//!   [`DIRECTIVES_FILE_NAME`] discovered in the target's directory
//!   ancestry, ordered root first
//!
//! [`StandardImportResolver`] concatenates them (defaults first), so the
//! downstream merge - where later entries win for overridable directive
//! kinds - lets project override files shadow the defaults, and override
//! files closer to the target shadow those further up the tree. Component
//! targets bypass the mechanism entirely and resolve to an empty list.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use weft_imports::{ImportResolver, StandardImportResolver};
//! use weft_project::{InMemoryProjectFileSystem, ProjectFileSystem};
//!
//! let mut project = InMemoryProjectFileSystem::new();
//! project.add("/pages/_directives.weft", "{% use app::pages %}");
//! project.add("/pages/Index.weft", "<h1>Hello</h1>");
//!
//! let target = project.item("/pages/Index.weft")?;
//! let resolver = StandardImportResolver::new(Arc::new(project));
//! let imports = resolver.resolve_imports(target.as_ref())?;
//!
//! // Default directives first, then overrides root first.
//! assert_eq!(imports.len(), 2);
//! assert!(imports[0].logical_path().is_none());
//! assert_eq!(imports[1].logical_path(), Some("/pages/_directives.weft"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod default_directives;
mod error;
mod resolver;
mod walker;

pub use default_directives::{DefaultDirectivesItem, DEFAULT_DIRECTIVES};
pub use error::{ImportError, Result};
pub use resolver::{ImportList, ImportResolver, StandardImportResolver};
pub use walker::{find_override_items, DIRECTIVES_FILE_NAME};
