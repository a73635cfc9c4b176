//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A schema fragment did not have the shape a transformer requires.
    #[from(ignore)]
    #[display("Invalid schema: {_0}")]
    InvalidSchema(String),

    /// An endpoint path failed syntax validation.
    #[from(ignore)]
    #[display("Invalid path: {_0}")]
    InvalidPath(String),

    /// A value expected to be a JSON object was something else.
    #[from(ignore)]
    #[display("Target value is not an object, key: {_0}")]
    NotAnObject(String),

    /// Lookup of an operation or schema kind that was never defined.
    #[from(ignore)]
    #[display("No schema found for {_0}")]
    SchemaNotFound(String),

    /// A stored schema was rejected by the JSON Schema compiler.
    #[from(ignore)]
    #[display("Schema compilation failed: {_0}")]
    SchemaCompile(String),

    /// Wrapper for JSON encoding errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML encoding errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
