pub mod reserved;

use crate::{prelude::*, validate::reserved::is_reserved_word};
use convert_case::{Case, Casing};
use std::collections::{HashMap, HashSet};

/// Validate a parsed message before any code is generated.
/// All problems are accumulated so they surface in one compile.
pub fn message(node: &Message) -> Result<(), DarlingError> {
    let mut errors = DarlingError::accumulator();
    let mut names = HashSet::new();
    let mut accessors: HashMap<String, String> = HashMap::new();

    for field in &node.fields {
        let name = field.name();

        if name.to_case(Case::Snake) != name {
            errors.push(
                DarlingError::custom(format!("field ident '{name}' must be snake_case"))
                    .with_span(&field.ident),
            );
        }

        if !names.insert(name.clone()) {
            errors.push(
                DarlingError::custom(format!("duplicate field '{name}'")).with_span(&field.ident),
            );
            continue;
        }

        for accessor in field.accessor_idents() {
            let accessor = accessor.unraw().to_string();

            if is_reserved_word(&accessor) {
                errors.push(
                    DarlingError::custom(format!(
                        "field '{name}' generates accessor '{accessor}', which is reserved"
                    ))
                    .with_span(&field.ident),
                );
            }

            if let Some(owner) = accessors.get(&accessor) {
                errors.push(
                    DarlingError::custom(format!(
                        "accessor '{accessor}' of field '{name}' collides with field '{owner}'"
                    ))
                    .with_span(&field.ident),
                );
            } else {
                accessors.insert(accessor, name.clone());
            }
        }
    }

    if let Some(debug) = &node.debug {
        let name = debug.unraw().to_string();

        match node.fields.get(&name) {
            Some(field) if field.is_string() => {}
            Some(_) => errors.push(
                DarlingError::custom(format!("debug field '{name}' must be a string field"))
                    .with_span(debug),
            ),
            None => errors.push(
                DarlingError::custom(format!("debug field '{name}' is not declared"))
                    .with_span(debug),
            ),
        }
    }

    errors.finish()
}

///
/// TESTS
///
