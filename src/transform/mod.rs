//! # Schema Transformers
//!
//! Pure functions that reshape annotated schema fragments into OpenAPI
//! document fragments, one per target object:
//!
//! - **media_object**: media-type objects for request/response content.
//! - **parameter**: parameter objects from an object schema's properties.
//! - **request_body**: request body objects.
//! - **response**: response objects and the responses map.
//! - **operation**: operation objects combining the above.
//! - **path_item**: path items keyed by HTTP method.
//!
//! Every transformer computes a default fragment and then merges the caller's
//! overwrite fragment on top via [`crate::merge::compose_with_overwrite`].

pub mod media_object;
pub mod operation;
pub mod parameter;
pub mod path_item;
pub mod request_body;
pub mod response;

pub use media_object::transform_media_object;
pub use operation::{transform_operation, OperationOptions, OperationSchemas, SchemaKind};
pub use parameter::{
    transform_parameter, transform_parameters, ParameterLocation, ParameterOptions,
};
pub use path_item::{transform_path_item, HttpMethod, PathItemOptions};
pub use request_body::{transform_request_body, RequestBodyOptions};
pub use response::{
    transform_response, transform_responses, ResponseOptions, ResponsesOptions, DEFAULT_HTTP_CODE,
    DEFAULT_RESPONSE_DESCRIPTION,
};

use serde_json::{Map, Value};

/// Media type used when a transform is not given explicit content types.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Builds a content map replicating one media object under each listed
/// content type. All entries share the same fragment; per-type customization
/// requires separate transform calls.
pub(crate) fn replicate_content(media: &Value, content_types: Option<&[String]>) -> Value {
    let mut content = Map::new();
    match content_types {
        Some(types) => {
            for content_type in types {
                content.insert(content_type.clone(), media.clone());
            }
        }
        None => {
            content.insert(DEFAULT_CONTENT_TYPE.to_owned(), media.clone());
        }
    }
    Value::Object(content)
}

/// Clones the top-level map of an object fragment. Non-object fragments
/// (e.g. boolean schemas) yield `None` and are passed through opaquely by the
/// callers.
pub(crate) fn object_parts(schema: &Value) -> Option<Map<String, Value>> {
    match schema {
        Value::Object(map) => Some(map.clone()),
        _ => None,
    }
}
