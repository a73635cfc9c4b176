//! # Path Item Objects

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::operation::{transform_operation, OperationOptions, OperationSchemas};
use crate::error::{AppError, AppResult};

/// HTTP methods a path item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP PUT.
    Put,
    /// HTTP POST.
    Post,
    /// HTTP DELETE.
    Delete,
    /// HTTP OPTIONS.
    Options,
    /// HTTP HEAD.
    Head,
    /// HTTP PATCH.
    Patch,
    /// HTTP TRACE.
    Trace,
}

impl HttpMethod {
    /// Lowercase key used in path item objects.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Trace => "trace",
        }
    }

    /// Uppercase form used in registry keys and diagnostics.
    pub fn as_upper_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for transforming a path item.
#[derive(Debug, Clone, Default)]
pub struct PathItemOptions {
    /// Options forwarded to the operation transform.
    pub operation: OperationOptions,
    /// Base path-item fragment the method entry is attached to. Keys other
    /// than the transformed method are preserved untouched.
    pub path_item: Option<Value>,
}

/// Transforms operation schemas into a path item carrying the operation
/// under its HTTP method key.
///
/// An existing fragment under the same method in the base path item is
/// replaced wholesale; method fragments are never merged together. A
/// non-object base is a target-type error.
pub fn transform_path_item(
    method: HttpMethod,
    schemas: &OperationSchemas,
    options: &PathItemOptions,
) -> AppResult<Value> {
    let mut item = match &options.path_item {
        None => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => return Err(AppError::NotAnObject("pathItem".to_owned())),
    };

    item.insert(
        method.as_str().to_owned(),
        transform_operation(schemas, &options.operation)?,
    );

    Ok(Value::Object(item))
}
