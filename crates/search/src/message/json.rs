//! Canonical JSON helpers.
//!
//! Thin wrappers around `serde_json` that emit object keys in lexicographic
//! order at every nesting level, regardless of whether `serde_json` was
//! built with `preserve_order`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EncodeError;

/// Serializes a value to a `serde_json::Value` with sorted object keys.
pub fn to_sorted_json_value<T>(value: &T) -> Result<Value, EncodeError>
where
    T: Serialize + ?Sized,
{
    Ok(sort_keys(serde_json::to_value(value)?))
}

/// Serializes a value to a compact JSON string with sorted object keys.
///
/// # Examples
///
/// ```
/// use quiver_search::message::to_sorted_json_string;
/// use serde_json::json;
///
/// let encoded = to_sorted_json_string(&json!({"search": "x", "limit": 1})).unwrap();
/// assert_eq!(encoded, r#"{"limit":1,"search":"x"}"#);
/// ```
pub fn to_sorted_json_string<T>(value: &T) -> Result<String, EncodeError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(&to_sorted_json_value(value)?)?)
}

/// Recursively rebuilds objects so their keys are inserted in sorted order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_keys(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_nested_objects_are_sorted() {
        let value = json!({"b": {"z": 1, "a": [{"y": 2, "x": 3}]}, "a": null});
        assert_eq!(
            to_sorted_json_string(&value).unwrap(),
            r#"{"a":null,"b":{"a":[{"x":3,"y":2}],"z":1}}"#
        );
    }

    #[test]
    fn test_hash_map_input_is_deterministic() {
        let mut map = HashMap::new();
        for key in ["until", "authors", "search", "kinds", "limit", "since"] {
            map.insert(key, 1);
        }
        assert_eq!(
            to_sorted_json_string(&map).unwrap(),
            r#"{"authors":1,"kinds":1,"limit":1,"search":1,"since":1,"until":1}"#
        );
    }

    #[test]
    fn test_non_string_keys_fail() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "value");
        assert!(to_sorted_json_string(&map).is_err());
    }
}
