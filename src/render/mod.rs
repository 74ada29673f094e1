//! Output of processed documents and their reports.

mod docx;
mod json;
mod xml;

pub use docx::{save_docx, to_docx_bytes};
pub use json::{to_json, JsonFormat};
pub use xml::{write_document_xml, write_element_tree};
