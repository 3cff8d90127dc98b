#![deny(missing_docs)]

//! # OAS Clean Core
//!
//! Normalizes OpenAPI v3 documents emitted by annotation-driven generators
//! into canonical OpenAPI: unique camel-cased operation ids, request-body
//! `query`/`params`/`body` sub-schemas hoisted into real parameters, and
//! stringified boolean enums turned into booleans.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) cleaning utilities.
pub mod oas;

pub use error::{AppError, AppResult};
pub use oas::{
    clean, clean_in_place, is_pseudo_boolean, load_document, parse_document, render_document,
    save_document, to_identifier_case, DocumentFormat, OperationIdRegistry, ParamSource,
};
