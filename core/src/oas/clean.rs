#![deny(missing_docs)]

//! # Document Cleaning
//!
//! Rewrites OpenAPI documents emitted by annotation-driven generators into
//! canonical OpenAPI. Per operation, in order:
//!
//! 1. `operationId` is camel-cased and made unique across the document.
//! 2. Ad hoc `query` / `params` sub-schemas inside request-body schemas are
//!    hoisted into `parameters` (merged into existing ones where present),
//!    a `body` sub-schema replaces its parent, and empty `required` lists go.
//! 3. Pseudo-boolean (`enum: ["true", "false"]`) parameters become booleans.
//!
//! The tree is walked as a plain `serde_json::Value`; anything that does not
//! have the expected shape is skipped rather than rejected.

use crate::error::{AppError, AppResult};
use crate::oas::identifiers::{to_identifier_case, OperationIdRegistry};
use crate::oas::pseudo_bool::rewrite_pseudo_boolean;
use serde_json::{Map, Value};

/// Path item keys that hold operations. Everything else on a path item is ignored.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Request-body keys that carry parameter sub-schemas, in processing order.
const HOISTED_KEYS: [(&str, ParamSource); 2] =
    [("query", ParamSource::Query), ("params", ParamSource::Path)];

/// The `in` location of a parameter produced by hoisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSource {
    /// URL Path parameter (e.g. /users/{id})
    Path,
    /// URL Query parameter (e.g. /users?page=1)
    Query,
}

impl ParamSource {
    /// The value used for the parameter's `in` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamSource::Path => "path",
            ParamSource::Query => "query",
        }
    }
}

/// A request-body property waiting to be turned into a parameter.
#[derive(Debug)]
struct HoistedParam {
    source: ParamSource,
    name: String,
    /// `None` when the property had no schema behind it (see [`is_present`]).
    schema: Option<Value>,
}

/// Cleans a document and hands it back.
///
/// Fails only when the document has no `paths` mapping.
pub fn clean(mut document: Value) -> AppResult<Value> {
    clean_in_place(&mut document)?;
    Ok(document)
}

/// Cleans a document in place.
///
/// The operation-id counter lives for exactly one call, so cleaning two
/// documents never lets ids from the first affect the second.
pub fn clean_in_place(document: &mut Value) -> AppResult<()> {
    let paths = document
        .get_mut("paths")
        .and_then(Value::as_object_mut)
        .ok_or(AppError::MissingPaths)?;

    let mut operation_ids = OperationIdRegistry::new();

    for (path, path_item) in paths.iter_mut() {
        let Some(path_item) = path_item.as_object_mut() else {
            continue;
        };
        for (method, operation) in path_item.iter_mut() {
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            let Some(operation) = operation.as_object_mut() else {
                continue;
            };
            tracing::trace!(
                path = path.as_str(),
                method = method.as_str(),
                "cleaning operation"
            );
            clean_operation(operation, &mut operation_ids);
        }
    }

    Ok(())
}

fn clean_operation(operation: &mut Map<String, Value>, operation_ids: &mut OperationIdRegistry) {
    canonicalize_operation_id(operation, operation_ids);

    let hoisted = hoist_request_body(operation);
    if !hoisted.is_empty() {
        merge_parameters(operation, hoisted);
    }

    if let Some(parameters) = operation.get_mut("parameters").and_then(Value::as_array_mut) {
        for parameter in parameters.iter_mut() {
            if is_reference(parameter) {
                continue;
            }
            if rewrite_pseudo_boolean(parameter) {
                let name = parameter
                    .get("name")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default();
                tracing::debug!(name, "rewrote pseudo-boolean parameter");
            }
        }
    }
}

fn canonicalize_operation_id(
    operation: &mut Map<String, Value>,
    operation_ids: &mut OperationIdRegistry,
) {
    let Some(Value::String(id)) = operation.get_mut("operationId") else {
        return;
    };
    if id.is_empty() {
        return;
    }

    let canonical = operation_ids.distinguish(&to_identifier_case(id));
    if *id != canonical {
        tracing::debug!(
            from = id.as_str(),
            to = canonical.as_str(),
            "renamed operationId"
        );
        *id = canonical;
    }
}

/// Strips `query` / `params` / `body` from every request-body media schema.
///
/// Returns the properties found under `query` and `params`, in the order they
/// must be merged into the operation's parameters. The list is non-empty
/// exactly when some `properties` mapping had at least one entry.
fn hoist_request_body(operation: &mut Map<String, Value>) -> Vec<HoistedParam> {
    let mut hoisted = Vec::new();

    let Some(content) = operation
        .get_mut("requestBody")
        .and_then(|body| body.get_mut("content"))
        .and_then(Value::as_object_mut)
    else {
        return hoisted;
    };

    for (media, media_object) in content.iter_mut() {
        let Some(media_object) = media_object.as_object_mut() else {
            continue;
        };
        let Some(schema) = media_object.get_mut("schema") else {
            continue;
        };
        let Some(schema_map) = schema.as_object_mut() else {
            continue;
        };

        for (key, source) in HOISTED_KEYS {
            let Some(properties) = schema_map
                .get(key)
                .and_then(|sub| sub.get("properties"))
                .and_then(Value::as_object)
            else {
                continue;
            };
            for (name, property) in properties {
                hoisted.push(HoistedParam {
                    source,
                    name: name.clone(),
                    schema: is_present(property).then(|| property.clone()),
                });
            }
        }

        schema_map.shift_remove("query");
        schema_map.shift_remove("params");

        if schema_map.get("body").is_some_and(is_present) {
            if let Some(body) = schema_map.shift_remove("body") {
                tracing::debug!(
                    media = media.as_str(),
                    "replaced request body schema with its `body`"
                );
                *schema = body;
            }
        }

        if let Some(schema_map) = schema.as_object_mut() {
            let empty_required = schema_map
                .get("required")
                .and_then(Value::as_array)
                .is_some_and(Vec::is_empty);
            if empty_required {
                schema_map.shift_remove("required");
            }
        }
    }

    hoisted
}

/// Appends or merges hoisted properties into the operation's `parameters`.
fn merge_parameters(operation: &mut Map<String, Value>, hoisted: Vec<HoistedParam>) {
    let parameters = operation.entry("parameters").or_insert(Value::Null);
    if parameters.is_null() {
        *parameters = Value::Array(Vec::new());
    }
    let Some(parameters) = parameters.as_array_mut() else {
        return;
    };

    for HoistedParam {
        source,
        name,
        schema,
    } in hoisted
    {
        let Some(schema) = schema else {
            continue;
        };

        let existing = parameters.iter_mut().find(|p| {
            !is_reference(p)
                && p.get("in").and_then(Value::as_str) == Some(source.as_str())
                && p.get("name").and_then(Value::as_str) == Some(name.as_str())
        });

        match existing.and_then(Value::as_object_mut) {
            Some(existing) => {
                let merged = overlay_schema(&schema, existing.get("schema"));
                existing.insert("schema".to_string(), merged);
                tracing::debug!(
                    name = name.as_str(),
                    location = source.as_str(),
                    "merged hoisted parameter"
                );
            }
            None => {
                let mut param = Map::new();
                param.insert("in".to_string(), Value::String(source.as_str().to_string()));
                param.insert("name".to_string(), Value::String(name.clone()));
                param.insert("schema".to_string(), schema);
                if source == ParamSource::Path {
                    param.insert("required".to_string(), Value::Bool(true));
                }
                parameters.push(Value::Object(param));
                tracing::debug!(
                    name = name.as_str(),
                    location = source.as_str(),
                    "created hoisted parameter"
                );
            }
        }
    }
}

/// Shallow overlay: fields of `base` first, then fields of `top` on top.
///
/// Keys present in both keep `top`'s value at `base`'s position.
fn overlay_schema(base: &Value, top: Option<&Value>) -> Value {
    let mut merged = Map::new();
    for layer in [Some(base), top].into_iter().flatten() {
        if let Some(fields) = layer.as_object() {
            for (key, value) in fields {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Value::Object(merged)
}

/// Whether a sub-schema slot actually holds something.
///
/// `null`, `false`, `0` and `""` all count as empty.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_reference(value: &Value) -> bool {
    value.get("$ref").is_some()
}
