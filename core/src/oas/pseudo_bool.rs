#![deny(missing_docs)]

//! # Pseudo-Boolean Parameters
//!
//! Generators often emit `type: string, enum: ["true", "false"]` for boolean
//! query flags. These helpers detect that shape and turn it into a real
//! boolean schema.

use serde_json::Value;

const PSEUDO_BOOL_ENUM: [&str; 2] = ["false", "true"];

/// Returns `true` if the parameter's inline schema is a stringified boolean enum.
///
/// The enum must contain exactly the strings `"true"` and `"false"`, in any
/// order. Reference parameters (no inline `schema`) never match.
pub fn is_pseudo_boolean(parameter: &Value) -> bool {
    let Some(values) = parameter
        .get("schema")
        .and_then(|schema| schema.get("enum"))
        .and_then(Value::as_array)
    else {
        return false;
    };

    let mut members = Vec::with_capacity(values.len());
    for value in values {
        match value.as_str() {
            Some(s) => members.push(s),
            None => return false,
        }
    }
    members.sort_unstable();
    members == PSEUDO_BOOL_ENUM
}

/// Rewrites a pseudo-boolean parameter into a boolean one.
///
/// Sets `schema.type` to `boolean`, drops `schema.enum` and sets the
/// parameter's `example` to `true`. Other schema fields are left alone.
/// Returns whether the parameter was rewritten.
pub fn rewrite_pseudo_boolean(parameter: &mut Value) -> bool {
    if !is_pseudo_boolean(parameter) {
        return false;
    }
    let Some(param) = parameter.as_object_mut() else {
        return false;
    };

    if let Some(schema) = param.get_mut("schema").and_then(Value::as_object_mut) {
        schema.insert("type".to_string(), Value::String("boolean".to_string()));
        schema.shift_remove("enum");
    }
    param.insert("example".to_string(), Value::Bool(true));
    true
}
