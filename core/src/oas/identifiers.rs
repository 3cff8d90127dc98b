#![deny(missing_docs)]

//! # Operation Identifiers
//!
//! Canonical casing and collision handling for `operationId` values.

use heck::ToLowerCamelCase;
use std::collections::HashMap;

/// Converts an identifier to lower camel case.
///
/// Delimiters and spacing are collapsed, the first word is lower-cased and
/// every following word is capitalized, e.g. `"Operation Id"` -> `"operationId"`.
pub fn to_identifier_case(id: &str) -> String {
    id.to_lower_camel_case()
}

/// Occurrence counter for identifiers seen during a single cleaning pass.
///
/// The first occurrence of an identifier is returned unchanged; repeats get
/// the running count appended (`id`, `id2`, `id3`, ...).
#[derive(Debug, Default, Clone)]
pub struct OperationIdRegistry {
    counts: HashMap<String, u32>,
}

impl OperationIdRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a name for `id` that has not been handed out by this registry yet.
    ///
    /// A suffixed candidate that collides with a name already registered
    /// (e.g. a literal `foo2` seen before the second `foo`) keeps advancing
    /// the counter until it is free.
    pub fn distinguish(&mut self, id: &str) -> String {
        let mut count = match self.counts.get(id) {
            Some(&count) if count > 0 => count,
            _ => {
                self.counts.insert(id.to_string(), 1);
                return id.to_string();
            }
        };

        let candidate = loop {
            count += 1;
            let candidate = format!("{}{}", id, count);
            if !self.counts.contains_key(&candidate) {
                break candidate;
            }
        };
        self.counts.insert(id.to_string(), count);
        self.counts.insert(candidate.clone(), 1);
        candidate
    }

    #[cfg(test)]
    fn occurrences(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }
}
