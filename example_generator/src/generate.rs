use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use tracing::debug;

use crate::schema_model::{ElementDef, SchemaModel, strip_prefix};
use crate::values;

/// Ceiling on the number of elements emitted by one generate call.
/// Recursive schemas are legal input; this counter is what stops them.
const ELEMENT_LIMIT: usize = 1000;

/// Spaces added per nesting level.
const INDENT_STEP: usize = 2;

/// Per-call generation state: the element counter, the namespace
/// policy, and the random source used for value synthesis.
///
/// A context is created fresh for each top-level generate call and is
/// never shared between calls.
pub struct GenerationContext {
    element_count: usize,
    namespace: Option<String>,
    prefix: Option<String>,
    rng: XorShiftRng,
}

impl GenerationContext {
    /// Context with an entropy-seeded random source and no namespace.
    pub fn new() -> Self {
        GenerationContext::from_source(XorShiftRng::from_rng(&mut rand::rng()))
    }

    /// Context with a fixed seed. The same seed produces the same
    /// output for the same model and element.
    pub fn seeded(seed: u64) -> Self {
        GenerationContext::from_source(XorShiftRng::seed_from_u64(seed))
    }

    /// Applies a namespace URI and prefix to the emitted tags. Empty
    /// strings are treated as absent.
    pub fn with_namespace(mut self, namespace: &str, prefix: &str) -> Self {
        self.namespace = non_empty(namespace);
        self.prefix = non_empty(prefix);
        self
    }

    fn from_source(rng: XorShiftRng) -> Self {
        GenerationContext {
            element_count: 0,
            namespace: None,
            prefix: None,
            rng,
        }
    }
}

impl Default for GenerationContext {
    fn default() -> Self {
        GenerationContext::new()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Generates example XML for `element_name` with no namespace.
pub fn generate(model: &SchemaModel, element_name: &str) -> String {
    generate_with_context(model, element_name, GenerationContext::new())
}

/// Generates example XML with every emitted tag qualified by `prefix`
/// and the root tag carrying the matching `xmlns` declaration.
///
/// The declaration appears only when both `namespace` and `prefix` are
/// non-empty; the prefix alone is applied whenever it is non-empty.
pub fn generate_with_namespace(
    model: &SchemaModel,
    element_name: &str,
    namespace: &str,
    prefix: &str,
) -> String {
    let context = GenerationContext::new().with_namespace(namespace, prefix);
    generate_with_context(model, element_name, context)
}

/// Generates example XML using a caller-supplied context.
///
/// A missing element is not an error: the result is a comment naming
/// the element, which is valid terminal output.
pub fn generate_with_context(
    model: &SchemaModel,
    element_name: &str,
    mut context: GenerationContext,
) -> String {
    let Some(element) = model.find_element(element_name) else {
        return format!("<!-- Element {element_name} not found -->");
    };

    let mut buf = String::new();
    write_element(model, element, &mut context, &mut buf, 0);
    buf
}

/// Emits one element and, depth-first, everything below it.
///
/// An element whose type resolves to a complex type is expanded
/// member by member at every depth; any other type is rendered as
/// inline text by the value synthesizer.
fn write_element(
    model: &SchemaModel,
    element: &ElementDef,
    context: &mut GenerationContext,
    buf: &mut String,
    indent: usize,
) {
    if context.element_count > ELEMENT_LIMIT {
        debug!(element = %element.name, "element limit reached, truncating subtree");
        return;
    }
    context.element_count += 1;

    write_indent(buf, indent);
    buf.push('<');
    write_tag_name(buf, context.prefix.as_deref(), &element.name);

    // Only the root element carries the namespace declaration.
    if indent == 0 {
        if let (Some(namespace), Some(prefix)) = (&context.namespace, &context.prefix) {
            buf.push_str(&format!(" xmlns:{prefix}=\"{namespace}\""));
        }
    }

    if element.type_name.is_empty() {
        buf.push_str("/>\n");
        return;
    }

    buf.push('>');

    match model.find_complex_type(&element.type_name) {
        Some(complex_type) => {
            buf.push('\n');
            for member in &complex_type.members {
                write_element(model, member, context, buf, indent + INDENT_STEP);
            }
            write_indent(buf, indent);
        }
        None => {
            let simple_type = strip_prefix(&element.type_name);
            buf.push_str(&values::synthesize(simple_type, &mut context.rng));
        }
    }

    buf.push_str("</");
    write_tag_name(buf, context.prefix.as_deref(), &element.name);
    buf.push_str(">\n");
}

fn write_tag_name(buf: &mut String, prefix: Option<&str>, name: &str) {
    if let Some(prefix) = prefix {
        buf.push_str(prefix);
        buf.push(':');
    }
    buf.push_str(name);
}

fn write_indent(buf: &mut String, indent: usize) {
    buf.push_str(&" ".repeat(indent));
}
