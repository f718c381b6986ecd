//! The default-directives fragment injected into every standard template.

use once_cell::sync::Lazy;
use std::io::{Cursor, Read};
use std::sync::Arc;
use weft_project::{TemplateItem, TemplateKind};

/// Directive text contributed, by way of a synthetic import, to every
/// standard template compilation. Override files discovered in the target's
/// directory ancestry can shadow any of these declarations in the
/// downstream merge.
pub const DEFAULT_DIRECTIVES: &str = "\
{% use weft::prelude %}
{% use weft::collections %}
{% use weft::text %}
{% use weft::time %}
{% inject weft::render::HtmlHelper as html %}
{% inject weft::render::JsonHelper as json %}
{% inject weft::render::UrlHelper as url %}
{% inject weft::render::ComponentHelper as component %}
{% register weft::tags::AnchorTag from weft::tags %}
{% register weft::tags::HeadTag from weft::tags %}
{% register weft::tags::BodyTag from weft::tags %}
";

static INSTANCE: Lazy<Arc<DefaultDirectivesItem>> =
    Lazy::new(|| Arc::new(DefaultDirectivesItem { _private: () }));

/// The file-less template item carrying the default directives.
///
/// A single immutable instance exists for the process lifetime; obtain it
/// with [`DefaultDirectivesItem::shared`]. Every `read` opens an
/// independent view of the same fixed bytes, so concurrent compilations
/// never share a cursor. All path accessors report absent: the item is not
/// a real file and must not be hierarchy-walked or existence-checked.
#[derive(Debug)]
pub struct DefaultDirectivesItem {
    _private: (),
}

impl DefaultDirectivesItem {
    /// The process-wide shared instance.
    pub fn shared() -> Arc<dyn TemplateItem> {
        let item: Arc<dyn TemplateItem> = (*INSTANCE).clone();
        item
    }
}

impl TemplateItem for DefaultDirectivesItem {
    fn logical_path(&self) -> Option<&str> {
        None
    }

    fn kind(&self) -> TemplateKind {
        TemplateKind::Standard
    }

    fn exists(&self) -> bool {
        true
    }

    fn read(&self) -> weft_project::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(DEFAULT_DIRECTIVES.as_bytes())))
    }
}
