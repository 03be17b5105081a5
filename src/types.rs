//! Type definitions for the XML node tree and the record projection surface.
//!
//! The tree is a minimal, library-independent view of a parsed document: an
//! element has a local name and an ordered list of children of any node kind.
//! Nodes are owned, so a node handed to a caller keeps its whole subtree
//! alive for as long as it is held.

use std::fmt;

use crate::builders::build_xml_string;

/// A single node of a parsed XML document.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction { target: String, content: String },
}

/// An element node: a local name plus its children in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub name: String,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Raw text content: the concatenation of the immediate text and CDATA
    /// children of this element.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                XmlNode::Text(t) | XmlNode::CData(t) => out.push_str(t),
                _ => {}
            }
        }
        out
    }

    /// First descendant element with the given local name, searching
    /// depth-first in document order. The element itself is not considered.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if let XmlNode::Element(el) = child {
                if el.name == name {
                    return Some(el);
                }
                if let Some(found) = el.find(name) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Immediate element children, skipping text, comments and processing
    /// instructions.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            _ => None,
        })
    }
}

impl XmlNode {
    /// Local name for element nodes, target for processing instructions.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Element(el) => Some(&el.name),
            Self::ProcessingInstruction { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Raw text content of the node. For elements this is the concatenation
    /// of their immediate text and CDATA children.
    pub fn text(&self) -> String {
        match self {
            Self::Element(el) => el.text(),
            Self::Text(t) | Self::CData(t) | Self::Comment(t) => t.clone(),
            Self::ProcessingInstruction { content, .. } => content.clone(),
        }
    }

    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// First descendant element with the given local name. Only element
    /// nodes have descendants; every other kind returns `None`.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.as_element().and_then(|el| el.find(name))
    }

    /// This node serialized as XML markup.
    pub fn as_xml(&self) -> String {
        build_xml_string(self)
    }
}

impl From<XmlElement> for XmlNode {
    fn from(el: XmlElement) -> Self {
        Self::Element(el)
    }
}

/// A property value read from a record, as it projects into XML text.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Absent value; renders as the literal token `null`.
    Null,
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

/// A value the dumper can project into an XML element.
///
/// Replaces the getter-name reflection of the source ecosystem with an
/// explicit projection: the record names its own type and resolves property
/// reads itself.
pub trait Record {
    /// Simple (unqualified) type name, e.g. `"Person"`. Element names derive
    /// from the first record of a sequence: the lower-cased name for each
    /// record element, with `s` appended for the root.
    fn type_name(&self) -> &str;

    /// Read the named property. `None` means the record has no accessor for
    /// that name, which fails the dump with `AccessorMissing`.
    fn property(&self, name: &str) -> Option<PropertyValue>;
}
