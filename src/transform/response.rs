//! # Response Objects
//!
//! A response always carries a description, so a placeholder is substituted
//! when neither the schema nor an overwrite provides one. The responses map
//! transform wraps one computed response under its status code next to any
//! caller-supplied sibling entries.

use serde_json::{json, Map, Value};

use super::{object_parts, replicate_content, transform_media_object};
use crate::error::{AppError, AppResult};
use crate::merge::compose_with_overwrite;

/// Description used when neither the schema nor an overwrite provides one.
pub const DEFAULT_RESPONSE_DESCRIPTION: &str = "No Description.";

/// Status code the computed response is stored under by default.
pub const DEFAULT_HTTP_CODE: u16 = 200;

/// Options or overwrites applied while transforming one response.
#[derive(Debug, Clone, Default)]
pub struct ResponseOptions {
    /// Fragment merged into the media object under every content type.
    pub content: Option<Value>,
    /// Content types the schema is replicated under. Defaults to
    /// `application/json`.
    pub content_types: Option<Vec<String>>,
    /// Fragment merged on top of the computed response. An overwrite
    /// `description` always wins over the schema's own.
    pub overwrite: Option<Value>,
}

/// Options or overwrites applied while transforming the responses map.
#[derive(Debug, Clone, Default)]
pub struct ResponsesOptions {
    /// Status code for the computed response entry. Defaults to `200`.
    pub http_code: Option<u16>,
    /// Extra entries for the responses map (e.g. a `default` response). An
    /// entry under the computed status code is replaced wholesale.
    pub overwrite: Option<Value>,
    /// Options forwarded to the single response transform.
    pub response: ResponseOptions,
}

/// Transforms a schema fragment into a response object.
///
/// Without a schema, a minimal fragment carrying the placeholder description
/// is produced so every operation always has at least a default response
/// entry.
pub fn transform_response(schema: Option<&Value>, options: &ResponseOptions) -> Value {
    let Some(schema) = schema else {
        let defaults = json!({ "description": DEFAULT_RESPONSE_DESCRIPTION });
        return compose_with_overwrite(defaults, options.overwrite.as_ref());
    };

    let (remainder, description) = match object_parts(schema) {
        Some(mut map) => {
            let description = map.shift_remove("description");
            (Value::Object(map), description)
        }
        None => (schema.clone(), None),
    };

    let media = transform_media_object(&remainder, options.content.as_ref());

    let mut response = Map::new();
    response.insert(
        "description".to_owned(),
        description.unwrap_or_else(|| Value::String(DEFAULT_RESPONSE_DESCRIPTION.to_owned())),
    );
    response.insert(
        "content".to_owned(),
        replicate_content(&media, options.content_types.as_deref()),
    );

    compose_with_overwrite(Value::Object(response), options.overwrite.as_ref())
}

/// Transforms a schema fragment into the responses map of an operation.
///
/// The map starts from the overwrite fragment (extra status entries), then
/// the computed response is inserted under the configured status code,
/// replacing any overwrite entry under the same code.
pub fn transform_responses(schema: Option<&Value>, options: &ResponsesOptions) -> AppResult<Value> {
    let mut responses = match &options.overwrite {
        None => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => return Err(AppError::NotAnObject("responses".to_owned())),
    };

    let http_code = options.http_code.unwrap_or(DEFAULT_HTTP_CODE);
    responses.insert(
        http_code.to_string(),
        transform_response(schema, &options.response),
    );

    Ok(Value::Object(responses))
}
