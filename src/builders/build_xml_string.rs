//! Serialize a node tree back to XML markup.

use quick_xml::events::{BytesCData, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{XmlError, XmlResult};
use crate::types::{XmlElement, XmlNode};

/// Write a single event, folding writer failures into `DumpFailed`.
pub(crate) fn emit<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> XmlResult<()> {
    writer.write_event(event).map_err(XmlError::dump_failed)
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &XmlNode) -> XmlResult<()> {
    match node {
        XmlNode::Element(el) => write_element(writer, el),
        XmlNode::Text(t) => emit(writer, Event::Text(BytesText::new(t.as_str()))),
        XmlNode::CData(c) => emit(writer, Event::CData(BytesCData::new(c.as_str()))),
        XmlNode::Comment(c) => emit(writer, Event::Comment(BytesText::from_escaped(c.as_str()))),
        XmlNode::ProcessingInstruction { target, content } => {
            let raw = if content.is_empty() {
                target.clone()
            } else {
                format!("{} {}", target, content)
            };
            emit(writer, Event::PI(BytesPI::new(raw.as_str())))
        }
    }
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &XmlElement) -> XmlResult<()> {
    emit(writer, Event::Start(BytesStart::new(element.name.as_str())))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

/// Serialize one node as compact XML markup. Text content is escaped by the
/// writer; a node that somehow fails to serialize yields an empty string.
pub fn build_xml_string(node: &XmlNode) -> String {
    let mut writer = Writer::new(Vec::new());
    if write_node(&mut writer, node).is_err() {
        return String::new();
    }
    String::from_utf8(writer.into_inner()).unwrap_or_default()
}
