//! # Parameter Objects
//!
//! Turns one object schema per parameter location into a list of parameter
//! objects, one per declared property, in declaration order.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::object_parts;
use crate::error::{AppError, AppResult};
use crate::merge::{compose_with_overwrite, deep_merge};

/// Where a parameter lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// A path template segment.
    Path,
    /// A query string entry.
    Query,
    /// A request header.
    Header,
    /// A cookie.
    Cookie,
}

impl ParameterLocation {
    /// The OpenAPI `in` value for this location.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options or overwrites applied while transforming parameters.
///
/// The name sets control the three per-parameter boolean flags: when a set is
/// supplied, the corresponding field is emitted on every parameter of the
/// call with value equal to name membership; when the set is absent the field
/// is omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct ParameterOptions {
    /// Fragment merged into every produced parameter.
    pub overwrite_all: Option<Value>,
    /// Per-parameter fragments keyed by parameter name, merged on top of
    /// `overwrite_all`.
    pub overwrites: IndexMap<String, Value>,
    /// Names whose `allowReserved` flag is set.
    pub allow_reserved: Option<BTreeSet<String>>,
    /// Names whose `deprecated` flag is set.
    pub deprecated: Option<BTreeSet<String>>,
    /// Names whose `explode` flag is set.
    pub explode: Option<BTreeSet<String>>,
}

impl ParameterOptions {
    /// The overwrite fragment applying to the parameter named `name`, with
    /// the per-name fragment taking precedence over `overwrite_all`.
    fn overwrite_for(&self, name: &str) -> Option<Value> {
        match (&self.overwrite_all, self.overwrites.get(name)) {
            (Some(all), Some(specific)) => Some(deep_merge(all, specific)),
            (Some(all), None) => Some(all.clone()),
            (None, Some(specific)) => Some(specific.clone()),
            (None, None) => None,
        }
    }
}

/// Transforms one schema fragment into a parameter object.
///
/// The top-level `description`, `example` and `examples` annotations are
/// hoisted out of the schema to the parameter itself; the structural
/// remainder becomes `schema`.
pub fn transform_parameter(
    name: &str,
    location: ParameterLocation,
    schema: &Value,
    required: bool,
    options: &ParameterOptions,
) -> Value {
    let mut parameter = Map::new();
    parameter.insert("name".to_owned(), Value::String(name.to_owned()));
    parameter.insert("in".to_owned(), Value::String(location.as_str().to_owned()));

    let (remainder, description, example, examples) = match object_parts(schema) {
        Some(mut map) => {
            let description = map.shift_remove("description");
            let example = map.shift_remove("example");
            let examples = map.shift_remove("examples");
            (Value::Object(map), description, example, examples)
        }
        None => (schema.clone(), None, None, None),
    };

    if let Some(description) = description {
        parameter.insert("description".to_owned(), description);
    }
    parameter.insert("required".to_owned(), Value::Bool(required));

    if let Some(names) = &options.deprecated {
        parameter.insert("deprecated".to_owned(), Value::Bool(names.contains(name)));
    }
    if let Some(names) = &options.explode {
        parameter.insert("explode".to_owned(), Value::Bool(names.contains(name)));
    }
    if let Some(names) = &options.allow_reserved {
        parameter.insert(
            "allowReserved".to_owned(),
            Value::Bool(names.contains(name)),
        );
    }

    parameter.insert("schema".to_owned(), remainder);
    if let Some(example) = example {
        parameter.insert("example".to_owned(), example);
    }
    if let Some(examples) = examples {
        parameter.insert("examples".to_owned(), examples);
    }

    compose_with_overwrite(Value::Object(parameter), options.overwrite_for(name).as_ref())
}

/// Transforms an object schema into parameter objects, one per property, in
/// declaration order.
///
/// `required` is derived per parameter from membership in the enclosing
/// schema's `required` array. Fails without partial output when the schema
/// has no `properties` object or a property value is not an object-shaped
/// fragment, which signals caller misuse.
pub fn transform_parameters(
    location: ParameterLocation,
    schema: &Value,
    options: &ParameterOptions,
) -> AppResult<Vec<Value>> {
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            AppError::InvalidSchema(format!(
                "{location} parameter schema must declare a properties object"
            ))
        })?;

    let required_names: BTreeSet<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    properties
        .iter()
        .map(|(name, item_schema)| {
            if !item_schema.is_object() {
                return Err(AppError::InvalidSchema(format!(
                    "{location} parameter {name:?} must be an object-shaped schema"
                )));
            }

            Ok(transform_parameter(
                name,
                location,
                item_schema,
                required_names.contains(name.as_str()),
                options,
            ))
        })
        .collect()
}
