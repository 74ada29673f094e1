//! Owned XML tree for package parts.
//!
//! Every element carries a [`NodeId`] that stays valid while the element is
//! attached, independent of sibling insertions or removals. Block handles are
//! built on top of these ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an element within a parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate a process-unique id.
    pub(crate) fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the XML tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// A child element
    Element(Element),
    /// Unescaped character data
    Text(String),
    /// A CDATA section (raw contents)
    CData(String),
    /// A comment (raw contents)
    Comment(String),
    /// A processing instruction (raw contents)
    ProcessingInstruction(String),
}

impl Node {
    /// Borrow the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Mutably borrow the element if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// An XML element with its qualified name, attributes and children.
#[derive(Debug, Clone)]
pub struct Element {
    id: NodeId,

    /// Qualified name as written in the source (e.g. `w:p`)
    pub name: String,

    /// Attributes in source order, values unescaped
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::fresh(),
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute (builder style).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a child element (builder style).
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Add a text node (builder style).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Stable id of this element.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Name without namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Check the local name.
    pub fn is(&self, local_name: &str) -> bool {
        self.local_name() == local_name
    }

    /// Look up an attribute by local name, ignoring its prefix.
    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| local_part(key) == local_name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Iterate mutably over child elements.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    /// First child element with the given local name.
    pub fn find_child(&self, local_name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.is(local_name))
    }

    /// Child element with the given id.
    pub fn child(&self, id: NodeId) -> Option<&Element> {
        self.child_elements().find(|e| e.id == id)
    }

    /// Mutable child element with the given id.
    pub fn child_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.child_elements_mut().find(|e| e.id == id)
    }

    /// Detach the child element with the given id.
    pub fn remove_child(&mut self, id: NodeId) -> Option<Element> {
        let index = self
            .children
            .iter()
            .position(|n| matches!(n, Node::Element(e) if e.id == id))?;
        match self.children.remove(index) {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Remove every child element with the given local name.
    ///
    /// Returns the number of elements removed.
    pub fn remove_children_named(&mut self, local_name: &str) -> usize {
        let before = self.children.len();
        self.children
            .retain(|n| !matches!(n, Node::Element(e) if e.is(local_name)));
        before - self.children.len()
    }

    /// Count child elements with the given local name.
    pub fn count_children_named(&self, local_name: &str) -> usize {
        self.child_elements().filter(|e| e.is(local_name)).count()
    }

    /// Depth-first search for a descendant (or self) with the given id.
    pub fn find_descendant(&self, id: NodeId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.child_elements().find_map(|e| e.find_descendant(id))
    }

    /// Mutable depth-first search for a descendant (or self) with the given id.
    pub fn find_descendant_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.child_elements_mut()
            .find_map(|e| e.find_descendant_mut(id))
    }

    /// Concatenated text and CDATA content of direct children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Strip a namespace prefix from a qualified name.
pub fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}
