//! # Operation Objects
//!
//! Combines the parameter, request-body and responses transforms into one
//! operation object. Parameters are concatenated across locations in a fixed
//! order (path, query, header, cookie) so repeated runs produce identical
//! documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::parameter::{transform_parameters, ParameterLocation, ParameterOptions};
use super::request_body::{transform_request_body, RequestBodyOptions};
use super::response::{transform_responses, ResponsesOptions};
use crate::error::AppResult;
use crate::merge::compose_with_overwrite;

/// The kind of schema attached to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// The request body schema.
    Body,
    /// Cookie parameters.
    Cookie,
    /// Header parameters.
    Header,
    /// Path parameters.
    Path,
    /// Query parameters.
    Query,
    /// The response body schema.
    Response,
}

impl SchemaKind {
    /// Every kind, in field declaration order.
    pub const ALL: [SchemaKind; 6] = [
        SchemaKind::Body,
        SchemaKind::Cookie,
        SchemaKind::Header,
        SchemaKind::Path,
        SchemaKind::Query,
        SchemaKind::Response,
    ];

    /// Lowercase name used as data key and in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Cookie => "cookie",
            Self::Header => "header",
            Self::Path => "path",
            Self::Query => "query",
            Self::Response => "response",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schemas for one operation.
///
/// The four location kinds are object schemas whose properties enumerate the
/// individual parameters; `body` and `response` describe one payload each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationSchemas {
    /// Schema for the request body.
    pub body: Option<Value>,
    /// Object schema whose properties are the cookie parameters.
    pub cookie: Option<Value>,
    /// Object schema whose properties are the header parameters.
    pub header: Option<Value>,
    /// Object schema whose properties are the path parameters.
    pub path: Option<Value>,
    /// Object schema whose properties are the query parameters.
    pub query: Option<Value>,
    /// Schema for the response body.
    pub response: Option<Value>,
}

impl OperationSchemas {
    /// Returns the schema stored for `kind`, if any.
    pub fn get(&self, kind: SchemaKind) -> Option<&Value> {
        match kind {
            SchemaKind::Body => self.body.as_ref(),
            SchemaKind::Cookie => self.cookie.as_ref(),
            SchemaKind::Header => self.header.as_ref(),
            SchemaKind::Path => self.path.as_ref(),
            SchemaKind::Query => self.query.as_ref(),
            SchemaKind::Response => self.response.as_ref(),
        }
    }
}

/// Options or overwrites applied while transforming an operation.
#[derive(Debug, Clone, Default)]
pub struct OperationOptions {
    /// Options for cookie parameters.
    pub cookie: ParameterOptions,
    /// Options for header parameters.
    pub header: ParameterOptions,
    /// Options for path parameters.
    pub path: ParameterOptions,
    /// Options for query parameters.
    pub query: ParameterOptions,
    /// Options for the request body transform.
    pub request_body: RequestBodyOptions,
    /// Options for the responses transform.
    pub responses: ResponsesOptions,
    /// Fragment merged on top of the computed operation (summary, tags,
    /// operationId, extensions, ...). Wins on conflict.
    pub overwrite: Option<Value>,
}

/// Transforms one set of operation schemas into an operation object.
///
/// `parameters`, `requestBody` and `responses` are always present, so a
/// schema-less call still yields a well-formed operation skeleton.
pub fn transform_operation(
    schemas: &OperationSchemas,
    options: &OperationOptions,
) -> AppResult<Value> {
    let mut parameters = Vec::new();
    let locations = [
        (ParameterLocation::Path, &schemas.path, &options.path),
        (ParameterLocation::Query, &schemas.query, &options.query),
        (ParameterLocation::Header, &schemas.header, &options.header),
        (ParameterLocation::Cookie, &schemas.cookie, &options.cookie),
    ];
    for (location, schema, parameter_options) in locations {
        if let Some(schema) = schema {
            parameters.extend(transform_parameters(location, schema, parameter_options)?);
        }
    }

    let mut operation = Map::new();
    operation.insert("parameters".to_owned(), Value::Array(parameters));
    operation.insert(
        "requestBody".to_owned(),
        transform_request_body(schemas.body.as_ref(), &options.request_body),
    );
    operation.insert(
        "responses".to_owned(),
        transform_responses(schemas.response.as_ref(), &options.responses)?,
    );

    Ok(compose_with_overwrite(
        Value::Object(operation),
        options.overwrite.as_ref(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_schemas_yield_skeleton() {
        let operation =
            transform_operation(&OperationSchemas::default(), &OperationOptions::default())
                .unwrap();

        assert_eq!(
            operation,
            json!({
                "parameters": [],
                "requestBody": { "content": {} },
                "responses": { "200": { "description": "No Description." } }
            })
        );
    }

    #[test]
    fn test_parameter_locations_in_fixed_order() {
        let schemas = OperationSchemas {
            cookie: Some(json!({ "properties": { "session": { "type": "string" } } })),
            header: Some(json!({ "properties": { "x-trace": { "type": "string" } } })),
            path: Some(json!({ "properties": { "id": { "type": "string" } } })),
            query: Some(json!({ "properties": { "limit": { "type": "integer" } } })),
            ..Default::default()
        };

        let operation =
            transform_operation(&schemas, &OperationOptions::default()).unwrap();

        let locations: Vec<&str> = operation["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|parameter| parameter["in"].as_str().unwrap())
            .collect();
        assert_eq!(locations, vec!["path", "query", "header", "cookie"]);
    }

    #[test]
    fn test_overwrite_wins_over_skeleton() {
        let options = OperationOptions {
            overwrite: Some(json!({
                "summary": "List all pets",
                "tags": ["pets"],
                "responses": { "200": { "description": "patched" } }
            })),
            ..Default::default()
        };

        let operation =
            transform_operation(&OperationSchemas::default(), &options).unwrap();

        assert_eq!(operation["summary"], json!("List all pets"));
        assert_eq!(operation["tags"], json!(["pets"]));
        assert_eq!(
            operation["responses"]["200"]["description"],
            json!("patched")
        );
    }

    #[test]
    fn test_parameter_error_propagates() {
        let schemas = OperationSchemas {
            query: Some(json!({ "properties": { "bad": 1 } })),
            ..Default::default()
        };

        assert!(transform_operation(&schemas, &OperationOptions::default()).is_err());
    }

    #[test]
    fn test_schema_kind_lookup() {
        let schemas = OperationSchemas {
            body: Some(json!({ "type": "object" })),
            ..Default::default()
        };
        assert_eq!(schemas.get(SchemaKind::Body), Some(&json!({ "type": "object" })));
        assert_eq!(schemas.get(SchemaKind::Query), None);
    }
}
