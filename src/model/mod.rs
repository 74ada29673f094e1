//! Document model types for word-processing content.
//!
//! The model keeps the main document part as an owned XML tree so that
//! everything the engine does not touch survives a load/save round trip.
//! [`Paragraph`] and [`Table`] are read-only views over that tree;
//! [`BlockHandle`]s give stable references for mutation during traversal.

mod document;
mod package;
mod paragraph;
mod style;
mod table;
mod xml;

pub use document::{BlockHandle, BlockKind, Container, Document};
pub use package::{Compression, Package, PackageEntry, DOCUMENT_PART, STYLES_PART};
pub use paragraph::{Paragraph, CONTENT_MARKER};
pub use style::{StyleMap, DEFAULT_PARAGRAPH_STYLE};
pub use table::Table;
pub use xml::{local_part, Element, Node, NodeId};
