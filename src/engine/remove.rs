//! Structural removal of blocks and content markers.
//!
//! Removal detaches the element from its parent; everything it contains
//! goes with it and its siblings keep their relative order.

use crate::error::{Error, Result};
use crate::model::{
    BlockHandle, BlockKind, Container, Document, Element, Node, NodeId, CONTENT_MARKER,
};

/// Remove a paragraph or table from its container.
///
/// The handle no longer resolves afterwards.
pub fn remove_block(doc: &mut Document, handle: BlockHandle) -> Result<Element> {
    let element = doc.element(handle)?;
    if BlockKind::of(element) != Some(handle.kind) {
        return Err(Error::UnexpectedElement {
            expected: "paragraph or table",
            found: element.name.clone(),
        });
    }
    doc.detach(handle)
}

/// Remove every content marker nested directly inside a paragraph.
///
/// Returns the number of markers removed.
pub fn remove_nested_markers(paragraph: &mut Element) -> Result<usize> {
    if !paragraph.is("p") {
        return Err(Error::UnexpectedElement {
            expected: "paragraph",
            found: paragraph.name.clone(),
        });
    }
    Ok(paragraph.remove_children_named(CONTENT_MARKER))
}

/// Remove every content marker that is a direct child of the body.
///
/// Markers nested deeper (inside paragraphs or cells) are untouched.
pub fn remove_body_markers(doc: &mut Document) -> usize {
    doc.body_mut().remove_children_named(CONTENT_MARKER)
}

/// Give a table cell a trailing empty paragraph if it no longer ends in one.
///
/// A cell's last block must be a paragraph.
/// Returns whether a paragraph was added.
pub fn ensure_cell_paragraph(doc: &mut Document, cell: NodeId) -> Result<bool> {
    let cell = doc.container_mut(Container::Cell(cell))?;
    if cell.child_elements().last().is_some_and(|e| e.is("p")) {
        return Ok(false);
    }
    let name = match cell.name.split_once(':') {
        Some((prefix, _)) => format!("{}:p", prefix),
        None => "p".to_string(),
    };
    cell.children.push(Node::Element(Element::new(name)));
    Ok(true)
}
