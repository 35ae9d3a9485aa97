use std::collections::HashMap;

/// A single element declaration: the tag name to emit and the name of
/// the type that fills its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDef {
    /// Tag name written to the output.
    pub name: String,
    /// Name of the element's type. Empty means the element has no type
    /// and is emitted self-closing. May carry a `prefix:` segment.
    pub type_name: String,
    /// Raw `ref="..."` target from the schema. Present only before
    /// reference resolution; `None` everywhere in a corrected model.
    pub reference: Option<String>,
}

impl ElementDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        ElementDef {
            name: name.into(),
            type_name: type_name.into(),
            reference: None,
        }
    }
}

/// A named complex type: an ordered list of member elements.
///
/// Member order is significant and is preserved in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexTypeDef {
    pub name: String,
    pub members: Vec<ElementDef>,
}

impl ComplexTypeDef {
    pub fn new(name: impl Into<String>, members: Vec<ElementDef>) -> Self {
        ComplexTypeDef {
            name: name.into(),
            members,
        }
    }
}

/// Parsed schema definitions, keyed by name.
///
/// Duplicate names are not an error; the first definition of a name
/// wins and later ones are dropped.
#[derive(Debug, Default, Clone)]
pub struct SchemaModel {
    pub(crate) elements: HashMap<String, ElementDef>,
    pub(crate) complex_types: HashMap<String, ComplexTypeDef>,
    qualified: bool,
    target_namespace: Option<String>,
}

impl SchemaModel {
    pub fn new() -> Self {
        SchemaModel::default()
    }

    pub fn insert_element(&mut self, element: ElementDef) {
        self.elements.entry(element.name.clone()).or_insert(element);
    }

    pub fn insert_complex_type(&mut self, complex_type: ComplexTypeDef) {
        self.complex_types
            .entry(complex_type.name.clone())
            .or_insert(complex_type);
    }

    pub fn find_element(&self, name: &str) -> Option<&ElementDef> {
        self.elements.get(name)
    }

    /// Looks up a complex type by name, stripping any `prefix:`
    /// segment from the requested name first.
    pub fn find_complex_type(&self, type_name: &str) -> Option<&ComplexTypeDef> {
        self.complex_types.get(strip_prefix(type_name))
    }

    /// Whether the schema declared `elementFormDefault="qualified"`.
    /// Informational: emission applies the prefix policy of the
    /// top-level call uniformly, regardless of this flag.
    pub fn qualified(&self) -> bool {
        self.qualified
    }

    pub fn set_qualified(&mut self, qualified: bool) {
        self.qualified = qualified;
    }

    pub fn target_namespace(&self) -> Option<&str> {
        self.target_namespace.as_deref()
    }

    pub fn set_target_namespace(&mut self, target_namespace: Option<String>) {
        self.target_namespace = target_namespace;
    }
}

/// Strips the segment before and including the first `:`, e.g.
/// `xs:int` becomes `int`.
pub(crate) fn strip_prefix(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}
