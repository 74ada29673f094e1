//! XML part writer built on quick-xml.

use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::model::{Document, Element, Node};

/// Serialize an element tree as a standalone XML part.
pub fn write_element_tree(root: &Element) -> Result<Vec<u8>> {
    write_part(root, None)
}

/// Serialize a document's main part, body included.
pub fn write_document_xml(doc: &Document) -> Result<Vec<u8>> {
    write_part(doc.root(), Some((doc.body_index(), doc.body())))
}

fn write_part(root: &Element, splice: Option<(usize, &Element)>) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.get_mut().write_all(b"\r\n")?;
    write_element(&mut writer, root, splice)?;
    Ok(writer.into_inner())
}

/// Write one element; `splice` inserts an extra child at the given position.
fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
    splice: Option<(usize, &Element)>,
) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && splice.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for (index, child) in element.children.iter().enumerate() {
        if let Some((at, extra)) = splice {
            if at == index {
                write_element(writer, extra, None)?;
            }
        }
        write_node(writer, child)?;
    }
    if let Some((at, extra)) = splice {
        if at >= element.children.len() {
            write_element(writer, extra, None)?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<()> {
    match node {
        Node::Element(e) => write_element(writer, e, None)?,
        Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
        Node::CData(t) => writer.write_event(Event::CData(BytesCData::new(t.as_str())))?,
        Node::Comment(t) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(t.as_str())))?
        }
        Node::ProcessingInstruction(t) => writer.write_event(Event::PI(BytesPI::new(t.as_str())))?,
    }
    Ok(())
}
