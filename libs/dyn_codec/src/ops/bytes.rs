use std::borrow::Cow;

use super::{DynamicOps, MapEntries, leb128};

/// [`DynamicOps`] for a compact binary representation in a [`Vec<u8>`].
///
/// The format is not self-describing: a value only has meaning when read
/// back with the same codec that wrote it.
///
/// - `int` and `float`: 4 bytes, big-endian
/// - `long` and `double`: 8 bytes, big-endian
/// - `bool`: 1 byte, 0 or 1
/// - `string`: LEB128 byte length, then UTF-8 data
/// - `list`: LEB128 element count, then each element with a LEB128 length
/// - `map`: LEB128 entry count, then each key and value with a LEB128 length
///
/// The empty value is a zero-length buffer. Every non-empty encoding is at
/// least one byte long, so the two never collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteOps;

fn exact<const N: usize>(input: &[u8]) -> Option<[u8; N]> {
    input.try_into().ok()
}

/// Reads `count` length-prefixed items, requiring no trailing bytes.
fn read_items(mut input: &[u8], per_item: usize) -> Option<Vec<Vec<u8>>> {
    let count = leb128::read(&mut input)?;
    let total = count.checked_mul(per_item)?;

    // every item needs at least its length prefix
    if total > input.len() {
        return None;
    }

    let mut items = Vec::with_capacity(total);
    for _ in 0..total {
        items.push(leb128::read_prefixed(&mut input)?.to_vec());
    }

    input.is_empty().then_some(items)
}

impl DynamicOps for ByteOps {
    type Value = Vec<u8>;

    fn create_string(&self, value: &str) -> Vec<u8> {
        let mut buf = Vec::with_capacity(value.len() + 1);
        leb128::write_prefixed(&mut buf, value.as_bytes());
        buf
    }

    fn create_int(&self, value: i32) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_long(&self, value: i64) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_float(&self, value: f32) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_double(&self, value: f64) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_bool(&self, value: bool) -> Vec<u8> {
        vec![u8::from(value)]
    }

    fn create_list(&self, elements: Vec<Vec<u8>>) -> Vec<u8> {
        let mut buf = Vec::new();
        leb128::write(&mut buf, elements.len());
        for elem in &elements {
            leb128::write_prefixed(&mut buf, elem);
        }

        buf
    }

    fn create_map(&self, entries: Vec<(Vec<u8>, Vec<u8>)>) -> Vec<u8> {
        let mut buf = Vec::new();
        leb128::write(&mut buf, entries.len());
        for (key, value) in &entries {
            leb128::write_prefixed(&mut buf, key);
            leb128::write_prefixed(&mut buf, value);
        }

        buf
    }

    fn get_string<'a>(&self, input: &'a Vec<u8>) -> Option<Cow<'a, str>> {
        let mut slice = input.as_slice();
        let data = leb128::read_prefixed(&mut slice)?;
        if !slice.is_empty() {
            return None;
        }

        str::from_utf8(data).ok().map(Cow::Borrowed)
    }

    fn get_int(&self, input: &Vec<u8>) -> Option<i32> {
        exact(input).map(i32::from_be_bytes)
    }

    fn get_long(&self, input: &Vec<u8>) -> Option<i64> {
        exact(input).map(i64::from_be_bytes)
    }

    fn get_float(&self, input: &Vec<u8>) -> Option<f32> {
        exact(input).map(f32::from_be_bytes)
    }

    fn get_double(&self, input: &Vec<u8>) -> Option<f64> {
        exact(input).map(f64::from_be_bytes)
    }

    fn get_bool(&self, input: &Vec<u8>) -> Option<bool> {
        match **input {
            [0] => Some(false),
            [1] => Some(true),
            _ => None,
        }
    }

    fn get_list<'a>(&self, input: &'a Vec<u8>) -> Option<Cow<'a, [Vec<u8>]>> {
        read_items(input, 1).map(Cow::Owned)
    }

    fn get_map<'a>(&self, input: &'a Vec<u8>) -> Option<MapEntries<'a, Vec<u8>>> {
        let mut items = read_items(input, 2)?.into_iter();
        let mut entries = Vec::with_capacity(items.len() / 2);
        while let (Some(key), Some(value)) = (items.next(), items.next()) {
            entries.push((Cow::Owned(key), Cow::Owned(value)));
        }

        Some(entries)
    }

    fn empty(&self) -> Vec<u8> {
        Vec::new()
    }

    fn is_empty(&self, input: &Vec<u8>) -> bool {
        input.is_empty()
    }
}
