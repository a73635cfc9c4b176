//! # Deep Merge
//!
//! Generic recursive structural merge over `serde_json::Value` trees. This is
//! the single combination primitive behind every transformer: defaults are
//! computed first, then a caller-supplied fragment of the same shape is merged
//! on top and wins on conflict.
//!
//! The merge is permissive by contract, not by accident:
//! - two objects merge per key, recursively;
//! - two arrays do not concatenate, the overlay array replaces the base one
//!   wholesale;
//! - `Value::Null` is the identity element on either side;
//! - any other type mismatch resolves to the overlay value, no error raised.

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Merges `overlay` onto `base`, returning a new value.
///
/// Inputs are never mutated. Later (overlay) values take precedence at every
/// conflicting leaf; objects are merged key-by-key with base key order
/// preserved and overlay-only keys appended.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(lhs), Value::Object(rhs)) => {
            let mut merged = Map::new();
            for (key, value) in lhs {
                match rhs.get(key) {
                    Some(overlay_value) => {
                        merged.insert(key.clone(), deep_merge(value, overlay_value));
                    }
                    None => {
                        merged.insert(key.clone(), value.clone());
                    }
                }
            }
            for (key, value) in rhs {
                if !lhs.contains_key(key) {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Value::Object(merged)
        }
        // Null is the identity element: the defined side wins.
        (defined, Value::Null) => defined.clone(),
        // Arrays replace wholesale; mismatched types fall back to the overlay.
        (_, overlay) => overlay.clone(),
    }
}

/// Folds any number of fragments left-to-right with [`deep_merge`].
///
/// Later fragments take precedence. An empty iterator yields `Value::Null`.
pub fn deep_merge_all<'a, I>(layers: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    layers
        .into_iter()
        .fold(Value::Null, |merged, layer| deep_merge(&merged, layer))
}

/// Applies an optional caller overwrite on top of computed defaults.
///
/// Every transformer ends with this step, so the merge order is fixed in one
/// place: the overwrite always wins.
pub fn compose_with_overwrite(defaults: Value, overwrite: Option<&Value>) -> Value {
    match overwrite {
        Some(overwrite) => deep_merge(&defaults, overwrite),
        None => defaults,
    }
}

/// Gets the object stored under `key` in `target`, inserting an empty one if
/// the key is absent.
///
/// Fails when `target` itself is not an object, or when the existing value
/// under `key` is not an object.
pub fn get_or_init_object<'a>(
    target: &'a mut Value,
    key: &str,
) -> AppResult<&'a mut Map<String, Value>> {
    let map = target
        .as_object_mut()
        .ok_or_else(|| AppError::NotAnObject(key.to_owned()))?;

    map.entry(key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| AppError::NotAnObject(key.to_owned()))
}
