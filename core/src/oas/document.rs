#![deny(missing_docs)]

//! # OpenAPI Document I/O
//!
//! Reads a spec file into a `serde_json::Value` tree and writes it back in
//! the format implied by the file extension.

use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// On-disk encoding of an OpenAPI document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json` files.
    Json,
    /// Everything else (`.yaml`, `.yml`, no extension, ...).
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension; only `json` selects JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Decodes document text into a tree.
pub fn parse_document(text: &str, format: DocumentFormat) -> AppResult<Value> {
    let parsed: Result<Value, String> = match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };

    match parsed {
        Ok(Value::Null) => Err(AppError::Parse("Unable to parse spec file.".to_string())),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::Parse(format!(
            "Unable to parse spec file with error: {}",
            e
        ))),
    }
}

/// Encodes a tree as document text.
///
/// JSON is indented with four spaces; YAML is emitted without anchors and
/// without wrapping long lines.
pub fn render_document<T: Serialize + ?Sized>(
    value: &T,
    format: DocumentFormat,
) -> AppResult<String> {
    match format {
        DocumentFormat::Json => {
            let mut out = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
            value
                .serialize(&mut ser)
                .map_err(|e| AppError::Serialize(e.to_string()))?;
            String::from_utf8(out).map_err(|e| AppError::Serialize(e.to_string()))
        }
        DocumentFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| AppError::Serialize(e.to_string()))
        }
    }
}

/// Reads and parses the document at `path`.
pub fn load_document(path: &Path) -> AppResult<(Value, DocumentFormat)> {
    let format = DocumentFormat::from_path(path);
    let text = fs::read_to_string(path)?;
    let document = parse_document(&text, format)?;
    tracing::debug!(path = %path.display(), ?format, "loaded document");
    Ok((document, format))
}

/// Renders `document` and writes it to `path`, replacing any existing file.
///
/// Nothing is written if rendering fails.
pub fn save_document(path: &Path, document: &Value, format: DocumentFormat) -> AppResult<()> {
    let text = render_document(document, format)?;
    fs::write(path, text)?;
    tracing::debug!(path = %path.display(), ?format, "wrote document");
    Ok(())
}
