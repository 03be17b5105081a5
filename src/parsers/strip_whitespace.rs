//! Strip whitespace-only text nodes left behind by pretty-printed markup.

use crate::types::{XmlElement, XmlNode};

/// Remove text nodes that contain only whitespace from the element and all
/// of its descendants. Text with any non-whitespace content is kept as-is,
/// as are CDATA sections, comments and processing instructions.
pub fn strip_whitespace_text_nodes(element: &mut XmlElement) {
    element.children.retain(|child| match child {
        XmlNode::Text(t) => !t.trim().is_empty(),
        _ => true,
    });
    for child in &mut element.children {
        if let XmlNode::Element(el) = child {
            strip_whitespace_text_nodes(el);
        }
    }
}
