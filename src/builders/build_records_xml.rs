//! Build the pretty-printed document for a record sequence.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::builders::emit;
use crate::error::{XmlError, XmlResult};
use crate::types::Record;

const INDENT: &str = "    ";

/// Build the document text for a record sequence.
///
/// Element names derive from the first record: the root is the lower-cased
/// type name with `s` appended, and every record serializes under the
/// lower-cased type name itself, one text-bearing sub-element per entry of
/// `property_names` in the given order. The writer escapes reserved
/// characters in text content.
pub fn build_records_xml<R: Record>(records: &[R], property_names: &[&str]) -> XmlResult<String> {
    let first = records.first().ok_or_else(|| {
        XmlError::dump_failed("cannot derive element names from an empty record sequence")
    })?;
    let singular = first.type_name().to_lowercase();
    let root_name = format!("{}s", singular);

    let mut writer = Writer::new(Vec::new());
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    emit(&mut writer, Event::Text(BytesText::new("\n")))?;
    emit(&mut writer, Event::Start(BytesStart::new(root_name.as_str())))?;

    for record in records {
        emit(
            &mut writer,
            Event::Text(BytesText::new(concat_indent(1).as_str())),
        )?;
        emit(&mut writer, Event::Start(BytesStart::new(singular.as_str())))?;

        for property in property_names {
            let value = record.property(property).ok_or_else(|| XmlError::AccessorMissing {
                record: record.type_name().to_string(),
                property: (*property).to_string(),
            })?;
            emit(
                &mut writer,
                Event::Text(BytesText::new(concat_indent(2).as_str())),
            )?;
            emit(&mut writer, Event::Start(BytesStart::new(*property)))?;
            emit(
                &mut writer,
                Event::Text(BytesText::new(value.to_string().as_str())),
            )?;
            emit(&mut writer, Event::End(BytesEnd::new(*property)))?;
        }

        emit(
            &mut writer,
            Event::Text(BytesText::new(concat_indent(1).as_str())),
        )?;
        emit(&mut writer, Event::End(BytesEnd::new(singular.as_str())))?;
    }

    emit(&mut writer, Event::Text(BytesText::new("\n")))?;
    emit(&mut writer, Event::End(BytesEnd::new(root_name.as_str())))?;
    emit(&mut writer, Event::Text(BytesText::new("\n")))?;

    String::from_utf8(writer.into_inner()).map_err(XmlError::dump_failed)
}

fn concat_indent(level: usize) -> String {
    format!("\n{}", INDENT.repeat(level))
}
