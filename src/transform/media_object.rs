//! # Media Type Objects
//!
//! The target document's convention is that example values live beside the
//! schema reference, not only inside it, so the top-level `example` and
//! `examples` annotations are hoisted out of the schema fragment here.

use serde_json::{Map, Value};

use super::object_parts;
use crate::merge::compose_with_overwrite;

/// Builds a media-type object from a schema fragment.
///
/// The structural remainder of the fragment becomes `schema`; hoisted
/// `example` / `examples` become siblings. Absent fields are omitted rather
/// than emitted as null. The `overwrite` fragment is merged on top and wins
/// on conflict, including nested `schema` sub-fields.
pub fn transform_media_object(schema: &Value, overwrite: Option<&Value>) -> Value {
    let mut media = Map::new();

    match object_parts(schema) {
        Some(mut remainder) => {
            let example = remainder.shift_remove("example");
            let examples = remainder.shift_remove("examples");

            media.insert("schema".to_owned(), Value::Object(remainder));
            if let Some(example) = example {
                media.insert("example".to_owned(), example);
            }
            if let Some(examples) = examples {
                media.insert("examples".to_owned(), examples);
            }
        }
        None => {
            media.insert("schema".to_owned(), schema.clone());
        }
    }

    compose_with_overwrite(Value::Object(media), overwrite)
}
