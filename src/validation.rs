//! # Operation Validation
//!
//! Compiles the schema sets recorded by `define` into JSON Schema validators
//! (via the `jsonschema` crate) and runs request/response data against them.
//! Validator failures are converted into owned [`SchemaViolation`] records so
//! reports outlive the validated instance.

use std::collections::BTreeMap;

use jsonschema::{Draft, Validator};
use serde::Serialize;
use serde_json::Value;

use crate::document::OpenApiDocument;
use crate::error::{AppError, AppResult};
use crate::transform::{HttpMethod, OperationSchemas, PathItemOptions, SchemaKind};

/// Options controlling validator construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorOptions {
    /// JSON Schema draft to compile against. Autodetected from the schema's
    /// `$schema` field when `None`.
    pub draft: Option<Draft>,
}

/// Options for [`OpenApiDocument::init`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Options for the path item transform.
    pub path_item: PathItemOptions,
    /// Options for validator construction.
    pub validator: ValidatorOptions,
}

/// One structured validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON Pointer into the validated instance.
    pub instance_path: String,
    /// JSON Pointer to the failing schema keyword.
    pub schema_path: String,
    /// Human-readable failure message.
    pub message: String,
}

/// Per-kind validation outcome: `None` when the value was valid, the
/// violation list otherwise. Kinds without data are not present at all.
pub type ValidationReport = BTreeMap<SchemaKind, Option<Vec<SchemaViolation>>>;

/// Compiled validators for every schema kind of one defined operation.
pub struct OperationValidator {
    validators: BTreeMap<SchemaKind, Validator>,
}

impl OperationValidator {
    /// Compiles a validator for every kind present in `schemas`.
    pub fn compile(schemas: &OperationSchemas, options: &ValidatorOptions) -> AppResult<Self> {
        let mut validators = BTreeMap::new();
        for kind in SchemaKind::ALL {
            if let Some(schema) = schemas.get(kind) {
                validators.insert(kind, compile_schema(kind, schema, options)?);
            }
        }

        Ok(Self { validators })
    }

    /// Validates every kind present in `data` against its schema.
    ///
    /// Kinds absent from `data` are skipped entirely (not validated, not
    /// reported). Supplying data for a kind the operation has no schema for
    /// is an error.
    pub fn validate(&self, data: &BTreeMap<SchemaKind, Value>) -> AppResult<ValidationReport> {
        let mut report = ValidationReport::new();
        for (kind, value) in data {
            let Some(validator) = self.validators.get(kind) else {
                return Err(AppError::SchemaNotFound(kind.as_str().to_owned()));
            };

            let violations: Vec<SchemaViolation> = validator
                .iter_errors(value)
                .map(|error| SchemaViolation {
                    instance_path: error.instance_path.to_string(),
                    schema_path: error.schema_path.to_string(),
                    message: error.to_string(),
                })
                .collect();

            report.insert(
                *kind,
                if violations.is_empty() {
                    None
                } else {
                    Some(violations)
                },
            );
        }

        Ok(report)
    }
}

fn compile_schema(
    kind: SchemaKind,
    schema: &Value,
    options: &ValidatorOptions,
) -> AppResult<Validator> {
    let built = match options.draft {
        Some(draft) => jsonschema::options().with_draft(draft).build(schema),
        None => jsonschema::validator_for(schema),
    };

    built.map_err(|error| AppError::SchemaCompile(format!("{kind} schema: {error}")))
}

impl OpenApiDocument {
    /// Defines the operation and returns compiled validators for its schema
    /// set in one step.
    pub fn init(
        &mut self,
        path: &str,
        method: HttpMethod,
        schemas: OperationSchemas,
        options: &InitOptions,
    ) -> AppResult<OperationValidator> {
        let validator = OperationValidator::compile(&schemas, &options.validator)?;
        self.define(path, method, schemas, &options.path_item)?;

        Ok(validator)
    }

    /// Validates data against the schemas stored for `path` + `method`.
    ///
    /// Fails with a missing-registration error naming the `METHOD path` key
    /// when the operation was never defined.
    pub fn validate(
        &self,
        path: &str,
        method: HttpMethod,
        data: &BTreeMap<SchemaKind, Value>,
        options: &ValidatorOptions,
    ) -> AppResult<ValidationReport> {
        let schemas = self.stored_schemas(path, method)?;
        let validator = OperationValidator::compile(schemas, options)?;

        validator.validate(data)
    }
}
