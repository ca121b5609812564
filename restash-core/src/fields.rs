//! Name-based field introspection over an entity's serialized field map.
//!
//! Stores resolve query and search operations against field *names* supplied at
//! runtime. This module is the lookup and comparison engine behind that: it
//! serializes an entity to its JSON field map, resolves a named field, and
//! compares it against a query value with the loose coercion a stringly-typed
//! HTTP surface needs (path and query parameters always arrive as strings).

use serde_json::Value;

use crate::{
    entity::{Entity, EntityExt},
    error::{StoreError, StoreResult},
};

/// Returns the value of the named field on an entity.
///
/// # Errors
///
/// Returns [`StoreError::UnknownField`] if the entity's serialized form has no
/// such field, and [`StoreError::Serialization`] if the entity does not
/// serialize to an object.
pub fn field_value<T: Entity>(item: &T, field: &str) -> StoreResult<Value> {
    let map = item.to_value()?;
    let object = map
        .as_object()
        .ok_or_else(|| StoreError::Serialization("entity did not serialize to an object".into()))?;

    object
        .get(field)
        .cloned()
        .ok_or_else(|| StoreError::UnknownField(field.to_string(), T::table_name().to_string()))
}

/// Tests whether the named field on an entity equals a query value.
///
/// The query value is coerced toward the field's type before comparison:
/// numbers are compared as `f64` regardless of integer/float representation,
/// string query values are parsed when the field holds a number or boolean,
/// and non-string query values are rendered to text when the field holds a
/// string. Arrays, objects, and nulls compare by strict equality.
///
/// # Errors
///
/// Returns [`StoreError::UnknownField`] if the field does not exist.
pub fn field_matches<T: Entity>(item: &T, field: &str, value: &Value) -> StoreResult<bool> {
    Ok(values_match(&field_value(item, field)?, value))
}

/// Tests whether the named field, rendered to text, contains the needle
/// (case-insensitive).
///
/// A `null` field never matches.
///
/// # Errors
///
/// Returns [`StoreError::UnknownField`] if the field does not exist.
pub fn field_contains<T: Entity>(item: &T, field: &str, needle: &str) -> StoreResult<bool> {
    let value = field_value(item, field)?;
    if value.is_null() {
        return Ok(false);
    }

    Ok(display_value(&value)
        .to_lowercase()
        .contains(&needle.to_lowercase()))
}

/// Renders a JSON value to the text form used in URLs and search matching.
///
/// Strings render without surrounding quotes; every other value renders as its
/// JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Loose equality between a stored field value and a query value.
pub(crate) fn values_match(field: &Value, query: &Value) -> bool {
    match (field, query) {
        (Value::Number(left), Value::Number(right)) => left.as_f64() == right.as_f64(),
        (Value::Number(left), Value::String(right)) => {
            right.parse::<f64>().is_ok_and(|parsed| left.as_f64() == Some(parsed))
        }
        (Value::Bool(left), Value::String(right)) => {
            right.parse::<bool>().is_ok_and(|parsed| *left == parsed)
        }
        (Value::String(left), Value::String(right)) => left == right,
        (Value::String(left), other) => *left == display_value(other),
        (left, right) => left == right,
    }
}
