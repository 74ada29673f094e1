//! Document traversal.

use super::remove::{ensure_cell_paragraph, remove_block, remove_body_markers, remove_nested_markers};
use super::{BlockAction, BlockVisitor, ProcessReport, RemovalPolicy};
use crate::error::Result;
use crate::model::{BlockHandle, BlockKind, Container, Document, NodeId};
use crate::options::Options;

/// Walks a document's blocks in order and applies a visitor's decisions.
///
/// Each container's blocks are snapshotted before any of them is visited,
/// so removing a block never shifts or skips its siblings.
#[derive(Debug)]
pub struct DocumentWalker<V> {
    visitor: V,
    report: ProcessReport,
}

impl<V: BlockVisitor> DocumentWalker<V> {
    /// Create a walker around a visitor.
    pub fn new(visitor: V) -> Self {
        Self {
            visitor,
            report: ProcessReport::new(),
        }
    }

    /// The visitor.
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// Walk the whole document once.
    ///
    /// A failure aborts the pass; blocks already removed stay removed.
    pub fn run(mut self, doc: &mut Document) -> Result<ProcessReport> {
        self.walk(doc, Container::Body)?;

        if self.visitor.strip_body_markers() {
            let removed = remove_body_markers(doc);
            log::debug!("Removed {} body-level content markers", removed);
            self.report.add_body_markers(removed);
        }

        log::info!("{}", self.report);
        Ok(self.report)
    }

    fn walk(&mut self, doc: &mut Document, container: Container) -> Result<()> {
        for handle in doc.blocks_in(container)? {
            match handle.kind {
                BlockKind::Paragraph => self.visit_paragraph(doc, handle)?,
                BlockKind::Table => self.visit_table(doc, handle)?,
            }
        }
        Ok(())
    }

    fn visit_paragraph(&mut self, doc: &mut Document, handle: BlockHandle) -> Result<()> {
        let action = {
            let paragraph = doc.paragraph(handle)?;
            let text = paragraph.text();
            if text.is_empty() {
                log::trace!("Skipping empty paragraph {}", handle.id);
                self.report.add_empty_paragraph();
                return Ok(());
            }
            self.report.add_paragraph();

            let action = self.visitor.visit_paragraph(&paragraph, &text)?;
            log::debug!("{} | {} | {:?}", paragraph.style_name(), text, action);
            action
        };

        match action {
            BlockAction::Remove(reason) => {
                remove_block(doc, handle)?;
                self.report.remove_paragraph(reason);
            }
            BlockAction::StripMarkers => {
                let removed = remove_nested_markers(doc.element_mut(handle)?)?;
                self.report.add_nested_markers(removed);
            }
            BlockAction::Keep | BlockAction::Descend => {}
        }
        Ok(())
    }

    fn visit_table(&mut self, doc: &mut Document, handle: BlockHandle) -> Result<()> {
        self.report.add_table();

        let (action, cells) = {
            let table = doc.table(handle)?;
            let action = self.visitor.visit_table(&table)?;
            let cells: Vec<NodeId> = match action {
                BlockAction::Descend => table.cells().map(|cell| cell.id()).collect(),
                _ => Vec::new(),
            };
            (action, cells)
        };

        match action {
            BlockAction::Remove(reason) => {
                log::debug!("Removing table {} ({})", handle.id, reason);
                remove_block(doc, handle)?;
                self.report.remove_table(reason);
            }
            BlockAction::Descend => {
                for cell in cells {
                    self.walk(doc, Container::Cell(cell))?;
                    ensure_cell_paragraph(doc, cell)?;
                }
            }
            BlockAction::Keep | BlockAction::StripMarkers => {}
        }
        Ok(())
    }
}

/// Run one removal pass over a document with the given options.
///
/// # Example
///
/// ```
/// use abacus::{engine::process_document, parser::parse_document_xml, Options};
///
/// let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:body>
///     <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>
///     <w:p><w:r><w:t>Body text</w:t></w:r></w:p>
///   </w:body>
/// </w:document>"#;
///
/// let mut doc = parse_document_xml(xml, None).unwrap();
/// let report = process_document(&mut doc, &Options::new().with_headings(true)).unwrap();
/// assert_eq!(report.paragraphs_removed, 1);
/// assert_eq!(doc.plain_text(), "Body text");
/// ```
pub fn process_document(doc: &mut Document, options: &Options) -> Result<ProcessReport> {
    DocumentWalker::new(RemovalPolicy::new(options)).run(doc)
}
