use thiserror::Error;

/// XML generator error
///
/// Failures raised while obtaining a schema model. Generation itself
/// never fails: a missing element or a runaway schema maps to defined
/// output rather than an error.
#[derive(Debug, Error)]
pub enum XMLGeneratorError {
    /// Error reading the input XSD file
    #[error("failed to read schema file: {0}")]
    SchemaReadError(String),
    /// Error parsing the input XSD file contents
    #[error("failed to parse schema: {0}")]
    XSDParserError(String),
}
