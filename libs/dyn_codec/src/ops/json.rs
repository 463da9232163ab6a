use std::borrow::Cow;

use serde_json::{Map, Value};

use super::{DynamicOps, MapEntries};

/// [`DynamicOps`] for [`serde_json::Value`] trees.
///
/// The empty value is [`Value::Null`]. Object keys keep their insertion order.
///
/// Map keys that aren't strings are written as their JSON text, so an integer
/// key `1` becomes the key `"1"`. Reading such a map back yields string keys.
///
/// Non-finite floats cannot be represented in JSON and encode as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOps;

impl DynamicOps for JsonOps {
    type Value = Value;

    fn create_string(&self, value: &str) -> Value {
        Value::String(value.to_owned())
    }

    fn create_int(&self, value: i32) -> Value {
        Value::from(value)
    }

    fn create_long(&self, value: i64) -> Value {
        Value::from(value)
    }

    fn create_float(&self, value: f32) -> Value {
        Value::from(value)
    }

    fn create_double(&self, value: f64) -> Value {
        Value::from(value)
    }

    fn create_bool(&self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn create_list(&self, elements: Vec<Value>) -> Value {
        Value::Array(elements)
    }

    fn create_map(&self, entries: Vec<(Value, Value)>) -> Value {
        let mut map = Map::with_capacity(entries.len());
        for (key, value) in entries {
            let key = match key {
                Value::String(key) => key,
                other => other.to_string(),
            };

            map.insert(key, value);
        }

        Value::Object(map)
    }

    fn get_string<'a>(&self, input: &'a Value) -> Option<Cow<'a, str>> {
        input.as_str().map(Cow::Borrowed)
    }

    fn get_int(&self, input: &Value) -> Option<i32> {
        input.as_i64().and_then(|v| i32::try_from(v).ok())
    }

    fn get_long(&self, input: &Value) -> Option<i64> {
        input.as_i64()
    }

    fn get_float(&self, input: &Value) -> Option<f32> {
        input.as_f64().and_then(super::narrow_f32)
    }

    fn get_double(&self, input: &Value) -> Option<f64> {
        input.as_f64()
    }

    fn get_bool(&self, input: &Value) -> Option<bool> {
        input.as_bool()
    }

    fn get_list<'a>(&self, input: &'a Value) -> Option<Cow<'a, [Value]>> {
        input.as_array().map(|a| Cow::Borrowed(a.as_slice()))
    }

    fn get_map<'a>(&self, input: &'a Value) -> Option<MapEntries<'a, Value>> {
        let map = input.as_object()?;
        let entries = map
            .iter()
            .map(|(k, v)| (Cow::Owned(Value::String(k.clone())), Cow::Borrowed(v)))
            .collect();

        Some(entries)
    }

    fn empty(&self) -> Value {
        Value::Null
    }

    fn is_empty(&self, input: &Value) -> bool {
        input.is_null()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ints_must_fit() {
        let ops = JsonOps;
        assert_eq!(ops.get_int(&json!(42)), Some(42), "small ints fit");
        assert_eq!(ops.get_int(&json!(i64::MAX)), None, "i64::MAX does not fit i32");
        assert_eq!(ops.get_long(&json!(i64::MAX)), Some(i64::MAX), "i64::MAX fits i64");
        assert_eq!(ops.get_int(&json!(1.5)), None, "floats are not ints");
    }

    #[test]
    fn any_number_is_a_double() {
        let ops = JsonOps;
        assert_eq!(ops.get_double(&json!(3)), Some(3.0), "ints read as doubles");
        assert_eq!(ops.get_float(&json!(0.5)), Some(0.5), "doubles read as floats");
        assert_eq!(ops.get_double(&json!("3")), None, "strings are not numbers");
    }

    #[test]
    fn floats_must_fit() {
        let ops = JsonOps;
        assert_eq!(ops.get_float(&json!(1e300)), None, "1e300 does not fit f32");
        assert_eq!(ops.get_float(&json!(-1e300)), None, "-1e300 does not fit f32");
        assert_eq!(ops.get_double(&json!(1e300)), Some(1e300), "1e300 fits f64");
        assert_eq!(ops.get_float(&json!(f32::MAX)), Some(f32::MAX), "f32::MAX fits");
    }

    #[test]
    fn map_keys_keep_order() {
        let ops = JsonOps;
        let map = ops.create_map(vec![
            (ops.create_string("z"), ops.create_int(1)),
            (ops.create_string("a"), ops.create_int(2)),
            (ops.create_int(7), ops.create_int(3)),
        ]);

        let keys: Vec<_> = map
            .as_object()
            .expect("must be an object")
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["z", "a", "7"], "keys must be in insertion order");

        let entries = ops.get_map(&map).expect("must read as map");
        assert_eq!(*entries[0].0, json!("z"), "keys read back as strings");
        assert_eq!(*entries[2].1, json!(3), "values are kept");
    }

    #[test]
    fn null_is_empty() {
        let ops = JsonOps;
        assert!(ops.is_empty(&Value::Null), "null must be empty");
        assert!(!ops.is_empty(&json!({})), "empty objects are not empty values");
    }
}
