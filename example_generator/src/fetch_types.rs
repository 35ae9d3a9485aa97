use tracing::{debug, warn};
use xsd_parser::Schemas;
use xsd_parser::models::schema::QName;
use xsd_parser::models::schema::xs::{
    ComplexBaseType, ComplexBaseTypeContent, ElementType, GroupType, GroupTypeContent,
    SchemaContent,
};

use crate::error::XMLGeneratorError;
use crate::schema_model::{ComplexTypeDef, ElementDef};

pub(crate) fn qname_local(qname: &QName) -> Result<String, XMLGeneratorError> {
    String::from_utf8(qname.local_name().to_vec())
        .map_err(|err| XMLGeneratorError::XSDParserError(err.to_string()))
}

/// Builds an element definition from a schema element declaration.
///
/// A declaration written as `ref="target"` keeps the target in
/// `reference` for the resolver pass; the final name is filled in
/// there.
pub(crate) fn get_element_def(element: &ElementType) -> Result<ElementDef, XMLGeneratorError> {
    let mut def = ElementDef::new(element.name.clone().unwrap_or_default(), String::new());

    if let Some(reference) = &element.ref_ {
        def.reference = Some(qname_local(reference)?);
    }

    if let Some(element_type) = &element.type_ {
        def.type_name = qname_local(element_type)?;
    }

    Ok(def)
}

fn get_group_members(
    group: &GroupType,
    members: &mut Vec<ElementDef>,
) -> Result<(), XMLGeneratorError> {
    for content in &group.content {
        match content {
            GroupTypeContent::Element(element) => members.push(get_element_def(element)?),
            GroupTypeContent::Group(nested) => get_group_members(nested, members)?,
            GroupTypeContent::All(nested) => get_group_members(nested, members)?,
            GroupTypeContent::Sequence(nested) => get_group_members(nested, members)?,
            GroupTypeContent::Choice(_) => {
                warn!("choice groups are not supported, skipping");
            }
            GroupTypeContent::Annotation(_) => {}
            GroupTypeContent::Any(_) => {
                debug!("any elements are not supported, skipping");
            }
        }
    }

    Ok(())
}

fn get_complex_members(
    complex: &ComplexBaseType,
) -> Result<Vec<ElementDef>, XMLGeneratorError> {
    let mut members = vec![];
    for content in &complex.content {
        match content {
            ComplexBaseTypeContent::Group(group) => get_group_members(group, &mut members)?,
            ComplexBaseTypeContent::All(group) => get_group_members(group, &mut members)?,
            ComplexBaseTypeContent::Sequence(group) => get_group_members(group, &mut members)?,
            ComplexBaseTypeContent::Choice(_) => {
                warn!("choice groups are not supported, skipping");
            }
            ComplexBaseTypeContent::Attribute(_) => {
                debug!("attributes are not supported, skipping");
            }
            ComplexBaseTypeContent::Annotation(_) => {}
            _ => {
                debug!("unsupported complex type content, skipping");
            }
        }
    }

    Ok(members)
}

fn get_complex_type_def(
    complex: &ComplexBaseType,
) -> Result<Option<ComplexTypeDef>, XMLGeneratorError> {
    let Some(name) = complex.name.clone() else {
        // Anonymous inline types are unreachable through name lookup.
        debug!("skipping unnamed complex type");
        return Ok(None);
    };

    let members = get_complex_members(complex)?;
    Ok(Some(ComplexTypeDef::new(name, members)))
}

pub(crate) fn fetch_types(schemas: &Schemas) -> Result<Vec<ComplexTypeDef>, XMLGeneratorError> {
    let mut types = vec![];
    for (_schema_id, schema) in schemas.schemas() {
        for content in &schema.schema.content {
            if let SchemaContent::ComplexType(complex) = content {
                if let Some(complex_type) = get_complex_type_def(&complex)? {
                    types.push(complex_type);
                }
            }
        }
    }

    Ok(types)
}
