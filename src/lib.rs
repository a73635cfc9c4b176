#![deny(missing_docs)]

//! # OpenAPI Composer
//!
//! Builds an OpenAPI document from per-endpoint request/response schema
//! declarations. Each [`OpenApiDocument::define`] call reshapes one set of
//! schema fragments into parameter, request-body, response, operation and
//! path-item objects, then folds the result into the accumulated document.
//! Structural combination happens through a single recursive deep-merge with
//! right-biased overwrite semantics, so every computed fragment can be
//! extended or overridden by a caller-supplied fragment of the same shape.

/// Shared error types.
pub mod error;

/// Recursive structural merge over JSON values.
pub mod merge;

/// Schema-to-fragment transformers (parameters, bodies, responses, operations).
pub mod transform;

/// The accumulating OpenAPI document store.
pub mod document;

/// JSON Schema validation against defined operations.
pub mod validation;

pub use document::OpenApiDocument;
pub use error::{AppError, AppResult};
pub use merge::{compose_with_overwrite, deep_merge, deep_merge_all, get_or_init_object};
pub use transform::{
    transform_media_object, transform_operation, transform_parameter, transform_parameters,
    transform_path_item, transform_request_body, transform_response, transform_responses,
    HttpMethod, OperationOptions, OperationSchemas, ParameterLocation, ParameterOptions,
    PathItemOptions, RequestBodyOptions, ResponseOptions, ResponsesOptions, SchemaKind,
    DEFAULT_CONTENT_TYPE,
};
pub use validation::{
    InitOptions, OperationValidator, SchemaViolation, ValidationReport, ValidatorOptions,
};

// Re-exported so callers can pick a draft without depending on `jsonschema`
// directly.
pub use jsonschema::Draft;
