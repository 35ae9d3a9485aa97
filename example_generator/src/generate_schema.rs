use quick_xml::Reader;
use quick_xml::events::Event;
use xsd_parser::pipeline::parser::resolver::FileResolver;
use xsd_parser::{Parser, Schemas};

use crate::error::XMLGeneratorError;

/// Schema-level attributes read off the document's `schema` element.
#[derive(Debug, Default)]
pub(crate) struct SchemaFlags {
    pub(crate) qualified: bool,
    pub(crate) target_namespace: Option<String>,
}

pub(crate) fn generate_schema(xsd: &str) -> Result<Schemas, XMLGeneratorError> {
    let parser = Parser::new()
        .with_resolver(FileResolver::new())
        .with_default_namespaces()
        .add_schema_from_str(xsd)
        .map_err(|err| XMLGeneratorError::XSDParserError(err.to_string()))?;

    Ok(parser.finish())
}

/// Reads `elementFormDefault` and `targetNamespace` from the root
/// `schema` element, which the structural parse does not surface.
///
/// The structural parse is the authority on malformed input, so scan
/// failures degrade to the defaults (unqualified, no namespace).
pub(crate) fn schema_flags(xsd: &str) -> SchemaFlags {
    let mut flags = SchemaFlags::default();
    let mut reader = Reader::from_str(xsd);

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) | Ok(Event::Empty(tag)) => {
                if tag.local_name().as_ref() != b"schema" {
                    return flags;
                }

                for attribute in tag.attributes().flatten() {
                    let value = match attribute.unescape_value() {
                        Ok(value) => value.into_owned(),
                        Err(_) => continue,
                    };
                    match attribute.key.local_name().as_ref() {
                        b"elementFormDefault" => flags.qualified = value == "qualified",
                        b"targetNamespace" => flags.target_namespace = Some(value),
                        _ => {}
                    }
                }

                return flags;
            }
            Ok(Event::Eof) | Err(_) => return flags,
            Ok(_) => {}
        }
    }
}
