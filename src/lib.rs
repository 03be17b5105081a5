//! XML Records - Load XML documents as navigable node trees and dump record
//! sequences as pretty-printed XML files.

pub mod builders;
pub mod error;
pub mod handlers;
pub mod parsers;
pub mod types;

pub use builders::{build_records_xml, build_xml_string};
pub use error::{XmlError, XmlResult};
pub use handlers::{dump_to_file, load_from_file};
pub use parsers::parse_xml_from_str;
pub use types::{PropertyValue, Record, XmlElement, XmlNode};
