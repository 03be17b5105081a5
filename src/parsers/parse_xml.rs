//! Parse XML text into the owned node tree.
//! Uses quick-xml directly so every node kind keeps its document order.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{XmlError, XmlResult};
use crate::types::{XmlElement, XmlNode};

/// Parse a complete XML document and return its root element.
///
/// The document must have exactly one root element. The prolog (declaration,
/// DOCTYPE, and anything else outside the root) is consumed and discarded.
pub fn parse_xml_from_str(content: &str) -> XmlResult<XmlElement> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    let mut buf = Vec::new();
    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(XmlError::parse_failed)?
        {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::parse_failed(
                        "document has more than one root element",
                    ));
                }
                stack.push(XmlElement::new(name));
            }
            Event::End(_e) => {
                if let Some(done) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(done)),
                        None => root = Some(done),
                    }
                }
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let element = XmlElement::new(name);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(XmlNode::Element(element)),
                    None => {
                        if root.is_some() {
                            return Err(XmlError::parse_failed(
                                "document has more than one root element",
                            ));
                        }
                        root = Some(element);
                    }
                }
            }
            Event::Text(e) => {
                let text = e.decode().map_err(XmlError::parse_failed)?.to_string();
                match stack.last_mut() {
                    Some(parent) => push_text(parent, &text),
                    None => {
                        // Whitespace between the prolog, root and epilog is legal;
                        // any other text at document level is not.
                        if !text.trim().is_empty() {
                            return Err(XmlError::parse_failed(
                                "text content outside of the root element",
                            ));
                        }
                    }
                }
            }
            Event::CData(e) => {
                let content = String::from_utf8_lossy(e.as_ref()).to_string();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::CData(content));
                }
            }
            Event::Comment(e) => {
                let content = String::from_utf8_lossy(e.as_ref()).to_string();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::Comment(content));
                }
            }
            Event::PI(e) => {
                let raw = String::from_utf8_lossy(e.as_ref()).to_string();
                let (target, content) = split_pi(&raw);
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(XmlNode::ProcessingInstruction { target, content });
                }
            }
            Event::GeneralRef(e) => {
                let name = String::from_utf8_lossy(e.as_ref()).to_string();
                let resolved = resolve_general_ref(&name).ok_or_else(|| {
                    XmlError::parse_failed(format!("unmatched entity reference: &{};", name))
                })?;
                if let Some(parent) = stack.last_mut() {
                    push_text(parent, &resolved);
                }
            }
            Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(XmlError::parse_failed(
            "unexpected end of file inside an open element",
        ));
    }
    root.ok_or_else(|| XmlError::parse_failed("document has no root element"))
}

/// Append text to the parent, merging with a preceding text node so content
/// split around entity references comes back as one node.
fn push_text(parent: &mut XmlElement, text: &str) {
    if let Some(XmlNode::Text(last)) = parent.children.last_mut() {
        last.push_str(text);
    } else {
        parent.children.push(XmlNode::Text(text.to_string()));
    }
}

/// Split raw processing-instruction content into target and data.
fn split_pi(raw: &str) -> (String, String) {
    match raw.split_once(char::is_whitespace) {
        Some((target, content)) => (target.to_string(), content.trim_start().to_string()),
        None => (raw.to_string(), String::new()),
    }
}

/// Resolve a general entity reference to its replacement text. Covers the
/// five predefined entities and numeric character references.
fn resolve_general_ref(name: &str) -> Option<String> {
    match name {
        "lt" => Some("<".to_string()),
        "gt" => Some(">".to_string()),
        "amp" => Some("&".to_string()),
        "apos" => Some("'".to_string()),
        "quot" => Some("\"".to_string()),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = if let Some(hex) = code.strip_prefix('x').or_else(|| code.strip_prefix('X'))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                code.parse::<u32>().ok()?
            };
            char::from_u32(value).map(|c| c.to_string())
        }
    }
}
