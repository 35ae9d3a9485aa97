//! Example XML generation from XSD schemas.
//!
//! Parses an XSD with the `xsd-parser` crate into a flat model of
//! named elements and complex types, then walks that model to emit an
//! example document, synthesizing values for the simple-typed leaves.
//! The model can also be built directly in code:
//!
//! ```
//! use examplegen::{ComplexTypeDef, ElementDef, SchemaModel, generate};
//!
//! let mut model = SchemaModel::new();
//! model.insert_element(ElementDef::new("pet", "petType"));
//! model.insert_complex_type(ComplexTypeDef::new(
//!     "petType",
//!     vec![
//!         ElementDef::new("id", "xs:int"),
//!         ElementDef::new("name", "xs:string"),
//!     ],
//! ));
//!
//! let xml = generate(&model, "pet");
//! assert!(xml.starts_with("<pet>"));
//! ```

mod error;
mod fetch_elements;
mod fetch_types;
mod generate;
mod generate_schema;
mod resolve_references;
mod schema_model;
mod values;

use std::path::Path;

pub use error::XMLGeneratorError;
pub use generate::{GenerationContext, generate, generate_with_context, generate_with_namespace};
pub use resolve_references::resolve_references;
pub use schema_model::{ComplexTypeDef, ElementDef, SchemaModel};

/// Parses XSD text into a corrected schema model ready for generation.
pub fn parse_schema(xsd: &str) -> Result<SchemaModel, XMLGeneratorError> {
    let schemas = generate_schema::generate_schema(xsd)?;
    let flags = generate_schema::schema_flags(xsd);

    let mut model = SchemaModel::new();
    model.set_qualified(flags.qualified);
    model.set_target_namespace(flags.target_namespace);

    for element in fetch_elements::fetch_elements(&schemas)? {
        model.insert_element(element);
    }
    for complex_type in fetch_types::fetch_types(&schemas)? {
        model.insert_complex_type(complex_type);
    }

    Ok(resolve_references::resolve_references(model))
}

/// Reads and parses an XSD schema file.
pub fn parse_schema_file(path: impl AsRef<Path>) -> Result<SchemaModel, XMLGeneratorError> {
    let path = path.as_ref();
    let xsd = std::fs::read_to_string(path)
        .map_err(|err| XMLGeneratorError::SchemaReadError(format!("{}: {err}", path.display())))?;

    parse_schema(&xsd)
}

/// Parses the schema file and generates example XML for `element_name`.
pub fn generate_from_file(
    path: impl AsRef<Path>,
    element_name: &str,
) -> Result<String, XMLGeneratorError> {
    let model = parse_schema_file(path)?;
    Ok(generate(&model, element_name))
}

/// Same as [`generate_from_file`], with a namespace and prefix applied
/// to the emitted tags.
pub fn generate_from_file_with_namespace(
    path: impl AsRef<Path>,
    element_name: &str,
    namespace: &str,
    prefix: &str,
) -> Result<String, XMLGeneratorError> {
    let model = parse_schema_file(path)?;
    Ok(generate_with_namespace(&model, element_name, namespace, prefix))
}
