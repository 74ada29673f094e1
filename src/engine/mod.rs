//! Content removal engine.
//!
//! One pass walks the body in document order, classifies each non-empty
//! paragraph by its style, tracks ignored sections, and removes what the
//! [`Options`](crate::Options) select. The pass ends by removing content
//! markers left directly in the body.

mod classify;
mod policy;
mod remove;
mod report;
mod section;
mod visitor;
mod walker;

pub use classify::{heading_level, is_caption, is_heading, is_subtitle, is_title, StyleRole};
pub use policy::RemovalPolicy;
pub use remove::{ensure_cell_paragraph, remove_block, remove_body_markers, remove_nested_markers};
pub use report::{ProcessReport, RemovalReason};
pub use section::{IgnoredSection, SectionTracker};
pub use visitor::{BlockAction, BlockVisitor};
pub use walker::{process_document, DocumentWalker};
