use std::borrow::Cow;

use bson::{Bson, Document};

use super::{DynamicOps, MapEntries, narrow_f32};

/// Converts an integer to a double if it is exactly representable.
fn int_to_double(value: i64) -> Option<f64> {
    const LIMIT: i64 = 1 << f64::MANTISSA_DIGITS;
    (-LIMIT..=LIMIT).contains(&value).then_some(value as f64)
}

/// Converts an integer to a float if it is exactly representable.
fn int_to_float(value: i64) -> Option<f32> {
    const LIMIT: i64 = 1 << f32::MANTISSA_DIGITS;
    (-LIMIT..=LIMIT).contains(&value).then_some(value as f32)
}

/// [`DynamicOps`] for [`bson::Bson`] values.
///
/// The empty value is [`Bson::Null`]. 32-bit floats are stored as doubles.
/// Integers may be read with either width as long as the value fits. Both
/// integer widths may also be read as floats and doubles, as long as the
/// value is exactly representable, f.e. up to 2^53 for doubles.
///
/// Documents can only have string keys. Map entries whose key isn't a
/// string are dropped when encoding, with a warning logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BsonOps;

impl DynamicOps for BsonOps {
    type Value = Bson;

    fn create_string(&self, value: &str) -> Bson {
        Bson::String(value.to_owned())
    }

    fn create_int(&self, value: i32) -> Bson {
        Bson::Int32(value)
    }

    fn create_long(&self, value: i64) -> Bson {
        Bson::Int64(value)
    }

    fn create_float(&self, value: f32) -> Bson {
        Bson::Double(f64::from(value))
    }

    fn create_double(&self, value: f64) -> Bson {
        Bson::Double(value)
    }

    fn create_bool(&self, value: bool) -> Bson {
        Bson::Boolean(value)
    }

    fn create_list(&self, elements: Vec<Bson>) -> Bson {
        Bson::Array(elements)
    }

    fn create_map(&self, entries: Vec<(Bson, Bson)>) -> Bson {
        let mut doc = Document::new();
        for (key, value) in entries {
            match key {
                Bson::String(key) => {
                    doc.insert(key, value);
                },
                other => log::warn!("dropping document entry with non-string key {other}"),
            }
        }

        Bson::Document(doc)
    }

    fn get_string<'a>(&self, input: &'a Bson) -> Option<Cow<'a, str>> {
        match input {
            Bson::String(s) => Some(Cow::Borrowed(s.as_str())),
            _ => None,
        }
    }

    fn get_int(&self, input: &Bson) -> Option<i32> {
        match *input {
            Bson::Int32(v) => Some(v),
            Bson::Int64(v) => i32::try_from(v).ok(),
            _ => None,
        }
    }

    fn get_long(&self, input: &Bson) -> Option<i64> {
        match *input {
            Bson::Int32(v) => Some(i64::from(v)),
            Bson::Int64(v) => Some(v),
            _ => None,
        }
    }

    fn get_float(&self, input: &Bson) -> Option<f32> {
        match *input {
            Bson::Double(v) => narrow_f32(v),
            Bson::Int32(v) => int_to_float(i64::from(v)),
            Bson::Int64(v) => int_to_float(v),
            _ => None,
        }
    }

    fn get_double(&self, input: &Bson) -> Option<f64> {
        match *input {
            Bson::Double(v) => Some(v),
            Bson::Int32(v) => Some(f64::from(v)),
            Bson::Int64(v) => int_to_double(v),
            _ => None,
        }
    }

    fn get_bool(&self, input: &Bson) -> Option<bool> {
        match *input {
            Bson::Boolean(v) => Some(v),
            _ => None,
        }
    }

    fn get_list<'a>(&self, input: &'a Bson) -> Option<Cow<'a, [Bson]>> {
        match input {
            Bson::Array(a) => Some(Cow::Borrowed(a.as_slice())),
            _ => None,
        }
    }

    fn get_map<'a>(&self, input: &'a Bson) -> Option<MapEntries<'a, Bson>> {
        let Bson::Document(doc) = input else {
            return None;
        };

        let entries = doc
            .iter()
            .map(|(k, v)| (Cow::Owned(Bson::String(k.to_owned())), Cow::Borrowed(v)))
            .collect();

        Some(entries)
    }

    fn empty(&self) -> Bson {
        Bson::Null
    }

    fn is_empty(&self, input: &Bson) -> bool {
        matches!(input, Bson::Null)
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;
    use crate::codec::{Codec as _, DOUBLE, FLOAT};

    #[test]
    fn int_widths() {
        let ops = BsonOps;
        assert_eq!(ops.get_long(&Bson::Int32(5)), Some(5), "i32 widens to i64");
        assert_eq!(ops.get_int(&Bson::Int64(5)), Some(5), "small i64 narrows to i32");
        assert_eq!(ops.get_int(&Bson::Int64(i64::MIN)), None, "large i64 does not narrow");
        assert_eq!(ops.get_int(&Bson::Double(5.0)), None, "doubles are not ints");
    }

    #[test]
    fn numbers_read_as_floats() {
        let ops = BsonOps;
        for value in [Bson::Int32(5), Bson::Int64(5), Bson::Double(5.0)] {
            assert_eq!(DOUBLE.decode(&ops, &value).ok(), Some(5.0), "{value:?} as double");
            assert_eq!(FLOAT.decode(&ops, &value).ok(), Some(5.0), "{value:?} as float");
        }

        let exact = 1 << 53;
        assert_eq!(
            ops.get_double(&Bson::Int64(exact)),
            Some(9_007_199_254_740_992.0),
            "2^53 is exact"
        );
        assert_eq!(ops.get_double(&Bson::Int64(exact + 1)), None, "2^53 + 1 is not exact");
        assert_eq!(ops.get_double(&Bson::Int64(-exact - 1)), None, "-2^53 - 1 is not exact");
        assert_eq!(ops.get_float(&Bson::Int32(1 << 24)), Some(16_777_216.0), "2^24 is exact");
        assert_eq!(ops.get_float(&Bson::Int32((1 << 24) + 1)), None, "2^24 + 1 is not exact");
        assert_eq!(ops.get_float(&Bson::Int64(i64::MAX)), None, "i64::MAX is not exact");
    }

    #[test]
    fn floats_must_fit() {
        let ops = BsonOps;
        assert_eq!(ops.get_float(&Bson::Double(1e300)), None, "1e300 does not fit f32");
        assert_eq!(ops.get_float(&Bson::Double(0.5)), Some(0.5), "0.5 fits f32");
        assert_eq!(
            ops.get_float(&Bson::Double(f64::INFINITY)),
            Some(f32::INFINITY),
            "infinity stays infinity"
        );
    }

    #[test]
    fn non_string_keys_are_dropped() {
        let ops = BsonOps;
        let map = ops.create_map(vec![
            (ops.create_string("kept"), ops.create_bool(true)),
            (ops.create_int(1), ops.create_bool(false)),
        ]);

        assert_eq!(map, Bson::Document(doc! { "kept": true }), "int key must be dropped");
    }

    #[test]
    fn documents_read_as_maps() {
        let ops = BsonOps;
        let value = Bson::Document(doc! { "b": 1, "a": "x" });
        let entries = ops.get_map(&value).expect("must read as map");

        let keys: Vec<_> = entries
            .iter()
            .filter_map(|(k, _)| ops.get_string(k).map(Cow::into_owned))
            .collect();
        assert_eq!(keys, ["b", "a"], "document order must be kept");
    }
}
