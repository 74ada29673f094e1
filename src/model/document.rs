//! Document-level types.

use super::{Element, NodeId, Package, Paragraph, StyleMap, Table, CONTENT_MARKER};
use crate::error::{Error, Result};

/// Kind of a top-level structural block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A `w:p` paragraph
    Paragraph,
    /// A `w:tbl` table
    Table,
}

impl BlockKind {
    /// Classify an element, if it is a block.
    pub fn of(element: &Element) -> Option<Self> {
        match element.local_name() {
            "p" => Some(BlockKind::Paragraph),
            "tbl" => Some(BlockKind::Table),
            _ => None,
        }
    }
}

/// A collection that owns blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The document body
    Body,
    /// A table cell (`w:tc`)
    Cell(NodeId),
}

/// Stable reference to a block, captured before any mutation.
///
/// Removing one block never invalidates the handles of its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHandle {
    /// Element id
    pub id: NodeId,
    /// Block kind at capture time
    pub kind: BlockKind,
    /// Owning collection
    pub container: Container,
}

/// A parsed word-processing document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Root `w:document` element, without its body
    root: Element,

    /// The `w:body` element
    body: Element,

    /// Position of the body among the root's children
    body_index: usize,

    /// Paragraph style names
    styles: StyleMap,

    /// Remaining package entries
    package: Package,
}

impl Document {
    /// Build a document from its root element.
    pub fn new(mut root: Element, styles: StyleMap, package: Package) -> Result<Self> {
        let body_index = root
            .children
            .iter()
            .position(|n| n.as_element().is_some_and(|e| e.is("body")))
            .ok_or_else(|| Error::MissingPart("w:body".to_string()))?;
        let body = match root.children.remove(body_index) {
            super::Node::Element(e) => e,
            _ => return Err(Error::MissingPart("w:body".to_string())),
        };
        Ok(Self {
            root,
            body,
            body_index,
            styles,
            package,
        })
    }

    /// The root element (body detached).
    pub(crate) fn root(&self) -> &Element {
        &self.root
    }

    /// Position of the body within the root.
    pub(crate) fn body_index(&self) -> usize {
        self.body_index
    }

    /// The `w:body` element.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Mutable `w:body` element.
    pub(crate) fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// Paragraph style names.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// Package entries carried through to the output.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Snapshot of the body's blocks in document order.
    pub fn blocks(&self) -> Vec<BlockHandle> {
        snapshot(&self.body, Container::Body)
    }

    /// Snapshot of the blocks owned by a container.
    pub fn blocks_in(&self, container: Container) -> Result<Vec<BlockHandle>> {
        Ok(snapshot(self.container(container)?, container))
    }

    /// Resolve a container.
    pub fn container(&self, container: Container) -> Result<&Element> {
        match container {
            Container::Body => Ok(&self.body),
            Container::Cell(id) => {
                let cell = self
                    .body
                    .find_descendant(id)
                    .ok_or(Error::DetachedBlock(id))?;
                expect_cell(cell)?;
                Ok(cell)
            }
        }
    }

    /// Resolve a container mutably.
    pub(crate) fn container_mut(&mut self, container: Container) -> Result<&mut Element> {
        match container {
            Container::Body => Ok(&mut self.body),
            Container::Cell(id) => {
                let cell = self
                    .body
                    .find_descendant_mut(id)
                    .ok_or(Error::DetachedBlock(id))?;
                expect_cell(cell)?;
                Ok(cell)
            }
        }
    }

    /// Resolve a block handle to its element.
    pub fn element(&self, handle: BlockHandle) -> Result<&Element> {
        self.container(handle.container)?
            .child(handle.id)
            .ok_or(Error::DetachedBlock(handle.id))
    }

    /// Resolve a block handle to its element mutably.
    pub(crate) fn element_mut(&mut self, handle: BlockHandle) -> Result<&mut Element> {
        self.container_mut(handle.container)?
            .child_mut(handle.id)
            .ok_or(Error::DetachedBlock(handle.id))
    }

    /// Resolve a handle as a paragraph.
    pub fn paragraph(&self, handle: BlockHandle) -> Result<Paragraph<'_>> {
        Paragraph::new(self.element(handle)?, &self.styles)
    }

    /// Resolve a handle as a table.
    pub fn table(&self, handle: BlockHandle) -> Result<Table<'_>> {
        Table::new(self.element(handle)?)
    }

    /// Detach a block from its container.
    ///
    /// The element is returned by value; the handle is invalid afterwards.
    pub(crate) fn detach(&mut self, handle: BlockHandle) -> Result<Element> {
        self.container_mut(handle.container)?
            .remove_child(handle.id)
            .ok_or(Error::DetachedBlock(handle.id))
    }

    /// Body-level paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = Paragraph<'_>> {
        self.body
            .child_elements()
            .filter_map(|e| Paragraph::new(e, &self.styles).ok())
    }

    /// Body-level tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = Table<'_>> {
        self.body.child_elements().filter_map(|e| Table::new(e).ok())
    }

    /// Number of content markers that are direct children of the body.
    pub fn body_marker_count(&self) -> usize {
        self.body.count_children_named(CONTENT_MARKER)
    }

    /// Check if the body has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks().is_empty()
    }

    /// Visible text of body-level paragraphs, one per line.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .map(|p| p.visible_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn snapshot(container: &Element, owner: Container) -> Vec<BlockHandle> {
    container
        .child_elements()
        .filter_map(|e| {
            BlockKind::of(e).map(|kind| BlockHandle {
                id: e.id(),
                kind,
                container: owner,
            })
        })
        .collect()
}

fn expect_cell(element: &Element) -> Result<()> {
    if element.is("tc") {
        Ok(())
    } else {
        Err(Error::UnexpectedElement {
            expected: "table cell",
            found: element.name.clone(),
        })
    }
}
