//! The format adapter contract and the bundled adapters.
//!
//! A [`DynamicOps`] implementation describes how to build and inspect values
//! of one concrete representation. Codecs only ever touch the representation
//! through these operations, which is what lets one codec serve every format.

use std::borrow::Cow;

#[cfg(feature = "bson")]
mod bson;
#[cfg(feature = "bytes")]
mod bytes;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "bytes")]
mod leb128;

#[cfg(feature = "bson")]
pub use self::bson::BsonOps;
#[cfg(feature = "bytes")]
pub use self::bytes::ByteOps;
#[cfg(feature = "json")]
pub use self::json::JsonOps;

/// Narrows a double to a float, failing for finite values out of its range.
#[cfg(any(feature = "json", feature = "bson"))]
#[expect(clippy::cast_possible_truncation)]
fn narrow_f32(value: f64) -> Option<f32> {
    let narrow = value as f32;
    (narrow.is_finite() || !value.is_finite()).then_some(narrow)
}

/// Ordered key-value entries of a map read through [`DynamicOps::get_map`].
///
/// Entries borrow from the inspected value where the representation allows.
pub type MapEntries<'a, V> = Vec<(Cow<'a, V>, Cow<'a, V>)>;

/// Operations to create and inspect values of a concrete representation.
///
/// None of these operations fail. Readers return [`None`] when the value
/// does not hold the requested kind, and it is up to the calling codec to
/// decide whether that is an error.
///
/// This trait is object safe, so codecs may also be driven through a
/// `&dyn DynamicOps<Value = V>`.
pub trait DynamicOps {
    /// The representation type, f.e. a JSON tree node.
    type Value: Clone + PartialEq;

    /// Creates a string value.
    fn create_string(&self, value: &str) -> Self::Value;
    /// Creates a 32-bit integer value.
    fn create_int(&self, value: i32) -> Self::Value;
    /// Creates a 64-bit integer value.
    fn create_long(&self, value: i64) -> Self::Value;
    /// Creates a 32-bit float value.
    fn create_float(&self, value: f32) -> Self::Value;
    /// Creates a 64-bit float value.
    fn create_double(&self, value: f64) -> Self::Value;
    /// Creates a boolean value.
    fn create_bool(&self, value: bool) -> Self::Value;
    /// Creates a list from its elements, preserving their order.
    fn create_list(&self, elements: Vec<Self::Value>) -> Self::Value;
    /// Creates a map from its entries, preserving their order.
    fn create_map(&self, entries: Vec<(Self::Value, Self::Value)>) -> Self::Value;

    /// Reads the value as a string.
    fn get_string<'a>(&self, input: &'a Self::Value) -> Option<Cow<'a, str>>;
    /// Reads the value as a 32-bit integer.
    fn get_int(&self, input: &Self::Value) -> Option<i32>;
    /// Reads the value as a 64-bit integer.
    fn get_long(&self, input: &Self::Value) -> Option<i64>;
    /// Reads the value as a 32-bit float.
    fn get_float(&self, input: &Self::Value) -> Option<f32>;
    /// Reads the value as a 64-bit float.
    fn get_double(&self, input: &Self::Value) -> Option<f64>;
    /// Reads the value as a boolean.
    fn get_bool(&self, input: &Self::Value) -> Option<bool>;
    /// Reads the value as a list of elements.
    fn get_list<'a>(&self, input: &'a Self::Value) -> Option<Cow<'a, [Self::Value]>>;
    /// Reads the value as ordered map entries.
    fn get_map<'a>(&self, input: &'a Self::Value) -> Option<MapEntries<'a, Self::Value>>;

    /// The value that represents "nothing", f.e. a JSON `null`.
    fn empty(&self) -> Self::Value;

    /// Whether `input` is the [`empty`](Self::empty) value.
    fn is_empty(&self, input: &Self::Value) -> bool {
        *input == self.empty()
    }
}
