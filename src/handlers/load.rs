//! Load the root element's children from an XML file.

use std::fs;
use std::path::Path;

use crate::error::{XmlError, XmlResult};
use crate::parsers::{parse_xml_from_str, strip_whitespace_text_nodes};
use crate::types::XmlNode;

/// Parse the XML file at `file_path` and return the immediate children of
/// its root element, in document order. The root element itself is not
/// included.
///
/// A zero-length file yields an empty sequence without invoking the parser.
/// Whitespace-only text nodes (indentation between elements) are dropped;
/// meaningful text, CDATA, comments and processing instructions are all kept.
pub fn load_from_file(file_path: &str) -> XmlResult<Vec<XmlNode>> {
    let path = Path::new(file_path);
    let meta = fs::metadata(path).map_err(|_| XmlError::InputMissing {
        path: file_path.to_string(),
    })?;
    if !meta.is_file() {
        return Err(XmlError::InputMissing {
            path: file_path.to_string(),
        });
    }
    if meta.len() == 0 {
        return Ok(Vec::new());
    }

    log::debug!("Parsing file to load: {}", file_path);
    let content = fs::read_to_string(path).map_err(XmlError::parse_failed)?;

    let mut root = parse_xml_from_str(&content).map_err(|err| {
        log::error!(
            "{} was unable to be parsed. Confirm formatting and try again.",
            file_path
        );
        err
    })?;
    strip_whitespace_text_nodes(&mut root);
    Ok(root.children)
}
