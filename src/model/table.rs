//! Table view over a `w:tbl` element.

use super::{Element, NodeId, Paragraph, StyleMap};
use crate::error::{Error, Result};

/// Read-only view of a table.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    element: &'a Element,
}

impl<'a> Table<'a> {
    /// Wrap a `w:tbl` element.
    pub fn new(element: &'a Element) -> Result<Self> {
        if !element.is("tbl") {
            return Err(Error::UnexpectedElement {
                expected: "table",
                found: element.name.clone(),
            });
        }
        Ok(Self { element })
    }

    /// Id of the underlying element.
    pub fn id(&self) -> NodeId {
        self.element.id()
    }

    /// Rows in document order.
    pub fn rows(&self) -> impl Iterator<Item = &'a Element> {
        self.element.child_elements().filter(|e| e.is("tr"))
    }

    /// Cells of every row, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &'a Element> {
        self.rows()
            .flat_map(|row| row.child_elements().filter(|e| e.is("tc")))
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows().count()
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Every paragraph inside the table, including nested tables.
    pub fn paragraphs(&self, styles: &'a StyleMap) -> Vec<Paragraph<'a>> {
        let mut paragraphs = Vec::new();
        for cell in self.cells() {
            collect_cell_paragraphs(cell, styles, &mut paragraphs);
        }
        paragraphs
    }
}

fn collect_cell_paragraphs<'a>(
    container: &'a Element,
    styles: &'a StyleMap,
    out: &mut Vec<Paragraph<'a>>,
) {
    for child in container.child_elements() {
        if let Ok(para) = Paragraph::new(child, styles) {
            out.push(para);
        } else if let Ok(table) = Table::new(child) {
            out.extend(table.paragraphs(styles));
        }
    }
}
