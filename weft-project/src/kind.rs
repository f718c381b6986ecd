//! Template kind classification.
//!
//! Weft distinguishes ordinary templates, which receive injected imports at
//! compilation, from components, which are compiled in isolation and opt
//! out of import injection entirely. The kind of a real file is inferred
//! from its name.

use crate::path;
use serde::Serialize;
use std::fmt;

/// Extension for ordinary weft templates.
pub const TEMPLATE_EXTENSION: &str = ".weft";

/// Extension for weft components.
pub const COMPONENT_EXTENSION: &str = ".weftc";

/// Well-known file name carrying component-side imports.
pub const COMPONENT_IMPORTS_FILE_NAME: &str = "_imports.weftc";

/// The kind of a template item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemplateKind {
    /// An ordinary template, compiled with injected imports.
    Standard,
    /// A component template, compiled in isolation.
    Component,
    /// A component-side imports file.
    ComponentImport,
}

impl TemplateKind {
    /// Whether this kind is a component variant.
    ///
    /// Component variants never receive injected imports.
    pub fn is_component(self) -> bool {
        matches!(self, TemplateKind::Component | TemplateKind::ComponentImport)
    }

    /// Classify a logical path by file-name convention.
    ///
    /// A file named exactly `_imports.weftc` is a component imports file,
    /// any other `.weftc` file is a component, and everything else is a
    /// standard template.
    pub fn from_logical_path(logical_path: &str) -> Self {
        let name = path::file_name(logical_path);
        if name == COMPONENT_IMPORTS_FILE_NAME {
            TemplateKind::ComponentImport
        } else if name.ends_with(COMPONENT_EXTENSION) {
            TemplateKind::Component
        } else {
            TemplateKind::Standard
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Standard => write!(f, "standard"),
            TemplateKind::Component => write!(f, "component"),
            TemplateKind::ComponentImport => write!(f, "component-import"),
        }
    }
}
