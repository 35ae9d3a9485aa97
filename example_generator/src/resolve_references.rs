use crate::schema_model::SchemaModel;

/// Rewrites complex-type members declared as `ref="target"` so that
/// their `name` is the final element name to emit.
///
/// Runs once, after parsing and before any generation; the engine only
/// ever sees the corrected model. Running it again on its own output
/// is a no-op.
pub fn resolve_references(mut model: SchemaModel) -> SchemaModel {
    for complex_type in model.complex_types.values_mut() {
        for member in &mut complex_type.members {
            if let Some(reference) = member.reference.take() {
                member.name = reference;
            }
        }
    }

    model
}
