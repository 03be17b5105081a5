mod parse_xml;
mod strip_whitespace;

pub use parse_xml::parse_xml_from_str;
pub use strip_whitespace::strip_whitespace_text_nodes;
