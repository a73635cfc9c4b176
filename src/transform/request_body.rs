//! # Request Body Objects

use serde_json::{json, Map, Value};

use super::{object_parts, replicate_content, transform_media_object};
use crate::merge::compose_with_overwrite;

/// Options or overwrites applied while transforming a request body.
#[derive(Debug, Clone, Default)]
pub struct RequestBodyOptions {
    /// Fragment merged into the media object under every content type.
    pub content: Option<Value>,
    /// Content types the schema is replicated under. Defaults to
    /// `application/json`.
    pub content_types: Option<Vec<String>>,
    /// Fragment merged on top of the computed request body.
    pub overwrite: Option<Value>,
}

/// Transforms a schema fragment into a request body object.
///
/// Without a schema the result is a bare `{"content": {}}` and no options are
/// applied. With a schema, the top-level `description` is hoisted to the
/// request body, `required` defaults to `true`, and the same media fragment
/// is replicated under each requested content type.
pub fn transform_request_body(schema: Option<&Value>, options: &RequestBodyOptions) -> Value {
    let Some(schema) = schema else {
        return json!({ "content": {} });
    };

    let (remainder, description) = match object_parts(schema) {
        Some(mut map) => {
            let description = map.shift_remove("description");
            (Value::Object(map), description)
        }
        None => (schema.clone(), None),
    };

    let media = transform_media_object(&remainder, options.content.as_ref());

    let mut request_body = Map::new();
    if let Some(description) = description {
        request_body.insert("description".to_owned(), description);
    }
    request_body.insert("required".to_owned(), Value::Bool(true));
    request_body.insert(
        "content".to_owned(),
        replicate_content(&media, options.content_types.as_deref()),
    );

    compose_with_overwrite(Value::Object(request_body), options.overwrite.as_ref())
}
