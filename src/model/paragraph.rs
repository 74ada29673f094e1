//! Paragraph view over a `w:p` element.

use super::{Element, NodeId, StyleMap};
use crate::error::{Error, Result};
use std::borrow::Cow;

/// Local name of content markers (structured document tags).
pub const CONTENT_MARKER: &str = "sdt";

/// Read-only view of a paragraph.
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    element: &'a Element,
    styles: &'a StyleMap,
}

impl<'a> Paragraph<'a> {
    /// Wrap a `w:p` element.
    pub fn new(element: &'a Element, styles: &'a StyleMap) -> Result<Self> {
        if !element.is("p") {
            return Err(Error::UnexpectedElement {
                expected: "paragraph",
                found: element.name.clone(),
            });
        }
        Ok(Self { element, styles })
    }

    /// Id of the underlying element.
    pub fn id(&self) -> NodeId {
        self.element.id()
    }

    /// The underlying element.
    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// Style id from `w:pPr/w:pStyle`, if any.
    pub fn style_id(&self) -> Option<&'a str> {
        self.element
            .find_child("pPr")?
            .find_child("pStyle")?
            .attribute("val")
    }

    /// Display name of the paragraph style (e.g. `Heading 1`).
    pub fn style_name(&self) -> Cow<'a, str> {
        self.styles.resolve(self.style_id())
    }

    /// Text of the paragraph's own runs and hyperlinks.
    ///
    /// Content nested in markers, fields or smart tags is not included.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in self.element.child_elements() {
            match child.local_name() {
                "r" => push_run_text(child, &mut text),
                "hyperlink" => {
                    for run in child.child_elements().filter(|e| e.is("r")) {
                        push_run_text(run, &mut text);
                    }
                }
                _ => {}
            }
        }
        text
    }

    /// All text a reader would see, including text inside content markers.
    pub fn visible_text(&self) -> String {
        let mut text = String::new();
        collect_visible_text(self.element, &mut text);
        text
    }

    /// Check if the paragraph has no run text.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Number of content markers nested directly in this paragraph.
    pub fn marker_count(&self) -> usize {
        self.element.count_children_named(CONTENT_MARKER)
    }
}

fn collect_visible_text(element: &Element, out: &mut String) {
    for child in element.child_elements() {
        match child.local_name() {
            "r" => push_run_text(child, out),
            "pPr" | "del" | "moveFrom" => {}
            _ => collect_visible_text(child, out),
        }
    }
}

fn push_run_text(run: &Element, out: &mut String) {
    for child in run.child_elements() {
        match child.local_name() {
            "t" => out.push_str(&child.text()),
            "tab" | "ptab" => out.push('\t'),
            "br" => match child.attribute("type") {
                None | Some("textWrapping") => out.push('\n'),
                _ => {}
            },
            "cr" => out.push('\n'),
            "noBreakHyphen" => out.push('-'),
            _ => {}
        }
    }
}
