mod build_records_xml;
mod build_xml_string;

pub use build_records_xml::build_records_xml;
pub use build_xml_string::build_xml_string;
pub(crate) use build_xml_string::emit;
