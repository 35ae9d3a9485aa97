use xsd_parser::Schemas;
use xsd_parser::models::schema::xs::SchemaContent;

use crate::error::XMLGeneratorError;
use crate::fetch_types::get_element_def;
use crate::schema_model::ElementDef;

/// Collects the top-level element declarations of every parsed schema.
pub(crate) fn fetch_elements(schemas: &Schemas) -> Result<Vec<ElementDef>, XMLGeneratorError> {
    let mut elements = vec![];
    for (_schema_id, schema) in schemas.schemas() {
        for content in &schema.schema.content {
            if let SchemaContent::Element(element) = content {
                elements.push(get_element_def(&element)?);
            }
        }
    }

    Ok(elements)
}
