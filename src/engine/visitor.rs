//! Visitor seam between traversal and removal decisions.
//!
//! The [`DocumentWalker`](super::DocumentWalker) owns traversal and
//! mutation; a [`BlockVisitor`] only decides what happens to each block.
//!
//! # Example
//!
//! ```
//! use abacus::engine::{BlockAction, BlockVisitor, RemovalReason};
//! use abacus::model::Paragraph;
//!
//! struct ShoutingRemover;
//!
//! impl BlockVisitor for ShoutingRemover {
//!     fn visit_paragraph(
//!         &mut self,
//!         _paragraph: &Paragraph<'_>,
//!         text: &str,
//!     ) -> abacus::Result<BlockAction> {
//!         if text.chars().all(|c| !c.is_lowercase()) {
//!             Ok(BlockAction::Remove(RemovalReason::Heading))
//!         } else {
//!             Ok(BlockAction::Keep)
//!         }
//!     }
//! }
//! ```

use super::RemovalReason;
use crate::error::Result;
use crate::model::{Paragraph, Table};

/// What to do with a visited block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockAction {
    /// Leave the block as it is.
    #[default]
    Keep,

    /// Detach the block and everything it contains.
    Remove(RemovalReason),

    /// Keep the paragraph but drop its nested content markers.
    StripMarkers,

    /// Walk the table's cells with the same visitor.
    Descend,
}

impl BlockAction {
    /// Check if this action removes the block.
    pub fn should_remove(&self) -> bool {
        matches!(self, BlockAction::Remove(_))
    }

    /// Removal reason, if this action removes the block.
    pub fn reason(&self) -> Option<RemovalReason> {
        match self {
            BlockAction::Remove(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Decides the fate of each block in document order.
///
/// All methods keep the block by default.
pub trait BlockVisitor {
    /// Called for every paragraph with non-empty text.
    ///
    /// # Arguments
    /// * `paragraph` - The paragraph being visited
    /// * `text` - Its run text, already computed by the walker
    fn visit_paragraph(&mut self, paragraph: &Paragraph<'_>, text: &str) -> Result<BlockAction> {
        let _ = (paragraph, text);
        Ok(BlockAction::Keep)
    }

    /// Called for every table.
    fn visit_table(&mut self, table: &Table<'_>) -> Result<BlockAction> {
        let _ = table;
        Ok(BlockAction::Keep)
    }

    /// Whether body-level content markers are removed after the pass.
    fn strip_body_markers(&self) -> bool {
        false
    }
}
