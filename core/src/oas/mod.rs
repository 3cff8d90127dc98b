#![deny(missing_docs)]

//! # OpenAPI Cleaning Module
//!
//! - **clean**: The document walk that applies every normalization rule.
//! - **identifiers**: `operationId` casing and de-duplication.
//! - **pseudo_bool**: Stringified boolean enum detection and rewrite.
//! - **document**: Loading and saving JSON/YAML spec files.

pub mod clean;
pub mod document;
pub mod identifiers;
pub mod pseudo_bool;

pub use clean::{clean, clean_in_place, ParamSource, HTTP_METHODS};
pub use document::{
    load_document, parse_document, render_document, save_document, DocumentFormat,
};
pub use identifiers::{to_identifier_case, OperationIdRegistry};
pub use pseudo_bool::{is_pseudo_boolean, rewrite_pseudo_boolean};
