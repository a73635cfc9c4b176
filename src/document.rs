//! # OpenAPI Document Store
//!
//! Accumulates path items produced by the transformers into one OpenAPI
//! document and keeps each operation's original schema set for later reuse
//! (e.g. validation). One store instance is intended for single-threaded,
//! sequential `define` calls during program initialization.

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::merge::{deep_merge, get_or_init_object};
use crate::transform::{transform_path_item, HttpMethod, OperationSchemas, PathItemOptions};

/// Builds and owns one OpenAPI document plus the schema registry backing it.
pub struct OpenApiDocument {
    /// The accumulating document. Mutated in place across `define` calls.
    document: Value,
    /// Original schema sets keyed by `"METHOD path"`. Last write wins.
    operation_schemas: IndexMap<String, OperationSchemas>,
}

impl OpenApiDocument {
    /// Creates a store seeded with the base document (`openapi`, `info`,
    /// `servers`, `components`, ...). A `paths` entry is initialized on the
    /// first `define` if absent.
    pub fn new(base: Value) -> AppResult<Self> {
        if !base.is_object() {
            return Err(AppError::InvalidSchema(
                "base document must be a JSON object".to_owned(),
            ));
        }

        Ok(Self {
            document: base,
            operation_schemas: IndexMap::new(),
        })
    }

    /// Creates a store from a typed `utoipa` document.
    pub fn from_openapi(openapi: utoipa::openapi::OpenApi) -> AppResult<Self> {
        Self::new(serde_json::to_value(openapi)?)
    }

    /// The accumulated document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Deserializes the accumulated document into the typed `utoipa` model.
    pub fn into_openapi(self) -> AppResult<utoipa::openapi::OpenApi> {
        Ok(serde_json::from_value(self.document)?)
    }

    /// Defines an operation for a path: records the original schemas in the
    /// registry and folds the transformed path item into the document.
    ///
    /// The merge base for the path item is the caller's `path_item` fragment
    /// with the document's currently stored fragment for `path` merged on
    /// top, so repeated defines extend a path item rather than replacing it;
    /// only the fragment under the same method key is replaced wholesale.
    ///
    /// Returns a clone of the stored path item.
    pub fn define(
        &mut self,
        path: &str,
        method: HttpMethod,
        schemas: OperationSchemas,
        options: &PathItemOptions,
    ) -> AppResult<Value> {
        validate_path(path)?;

        let existing = self
            .document
            .get("paths")
            .and_then(|paths| paths.get(path))
            .cloned()
            .unwrap_or(Value::Null);
        let base = deep_merge(
            options.path_item.as_ref().unwrap_or(&Value::Null),
            &existing,
        );

        let effective = PathItemOptions {
            operation: options.operation.clone(),
            path_item: match base {
                Value::Null => None,
                fragment => Some(fragment),
            },
        };
        let path_item = transform_path_item(method, &schemas, &effective)?;

        let paths = get_or_init_object(&mut self.document, "paths")?;
        paths.insert(path.to_owned(), path_item.clone());
        self.operation_schemas
            .insert(registry_key(path, method), schemas);

        Ok(path_item)
    }

    /// Serializes the full accumulated document to compact JSON. No
    /// conformance checking is performed.
    pub fn json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.document)?)
    }

    /// Serializes the full accumulated document to YAML.
    pub fn yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(&self.document)?)
    }

    /// The schema set recorded for `path` + `method`, or a
    /// missing-registration error naming the key.
    pub(crate) fn stored_schemas(
        &self,
        path: &str,
        method: HttpMethod,
    ) -> AppResult<&OperationSchemas> {
        let key = registry_key(path, method);
        match self.operation_schemas.get(&key) {
            Some(schemas) => Ok(schemas),
            None => Err(AppError::SchemaNotFound(key)),
        }
    }
}

/// Registry key for one operation, e.g. `GET /pets`.
fn registry_key(path: &str, method: HttpMethod) -> String {
    format!("{} {}", method.as_upper_str(), path)
}

/// Validates endpoint path syntax: must begin with `/`, and every
/// `{placeholder}` must be a non-empty name of `[a-zA-Z0-9._-]` characters
/// with balanced braces.
fn validate_path(path: &str) -> AppResult<()> {
    if !path.starts_with('/') {
        return Err(AppError::InvalidPath(format!(
            "{path:?} must start with '/'"
        )));
    }

    let placeholder_re = Regex::new(r"\{([^{}]*)}").expect("Invalid regex constant");
    let name_re = Regex::new(r"^[a-zA-Z0-9._-]+$").expect("Invalid regex constant");

    let mut matched_braces = 0;
    for capture in placeholder_re.captures_iter(path) {
        let name = &capture[1];
        if !name_re.is_match(name) {
            return Err(AppError::InvalidPath(format!(
                "invalid template parameter {name:?} in {path:?}"
            )));
        }
        matched_braces += 2;
    }

    let braces = path.matches(['{', '}']).count();
    if braces != matched_braces {
        return Err(AppError::InvalidPath(format!(
            "unbalanced braces in {path:?}"
        )));
    }

    Ok(())
}
