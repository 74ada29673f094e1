//! `.docx` parsing module.

mod docx;
mod options;
mod styles;
mod xml;

pub use docx::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use styles::parse_styles;
pub use xml::parse_element_tree;

use crate::error::Result;
use crate::model::{Document, Package, StyleMap};

/// Build a document directly from a main document part.
///
/// The resulting document has an empty package; saving it writes only the
/// main part.
pub fn parse_document_xml(document_xml: &[u8], styles_xml: Option<&[u8]>) -> Result<Document> {
    let root = parse_element_tree(document_xml)?;
    let styles = match styles_xml {
        Some(data) => parse_styles(data)?,
        None => StyleMap::new(),
    };
    Document::new(root, styles, Package::new())
}
