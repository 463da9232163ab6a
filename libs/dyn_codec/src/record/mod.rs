//! Composition of field codecs into a codec for a struct-like type.
//!
//! A record is represented as a map with one entry per field, keyed by the
//! field's name. Fields are declared with [`Codec::field_of`] or
//! [`Codec::field_ref`] and combined with a constructor via [`record`],
//! [`try_record`], or a [`RecordBuilder`].
//!
//! Any number of fields is supported: [`Fields`] is implemented for tuples of
//! up to 16 elements, and the elements may themselves be tuples of fields.
//! The constructor then receives the nested tuples of values.
//!
//! ```
//! use dyn_codec::ops::JsonOps;
//! use dyn_codec::{Codec, INT, STRING, record};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Pair {
//!     a: i32,
//!     b: String,
//! }
//!
//! let codec = record(
//!     (
//!         INT.field_of("a", |p: &Pair| p.a),
//!         STRING.field_ref("b", |p: &Pair| &p.b),
//!     ),
//!     |a, b| Pair { a, b },
//! );
//!
//! let pair = Pair { a: 3, b: "x".to_owned() };
//! let value = codec.encode(&JsonOps, &pair)?;
//! assert_eq!(value, json!({ "a": 3, "b": "x" }));
//! assert_eq!(codec.decode(&JsonOps, &value)?, pair);
//! # Ok::<_, dyn_codec::Error>(())
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::ops::{DynamicOps, MapEntries};

mod builder;
mod tuple;

pub use builder::{Append, RecordBuilder};

/// A named field of a record of type `P`.
///
/// Obtain this via [`Codec::field_of`] or [`Codec::field_ref`].
#[must_use]
pub struct Field<P, C, G> {
    name: Cow<'static, str>,
    codec: C,
    getter: G,
    _owner: PhantomData<fn(&P)>,
}

impl<P, C, G> Field<P, C, G> {
    pub(crate) fn new(name: impl Into<Cow<'static, str>>, codec: C, getter: G) -> Self {
        Self {
            name: name.into(),
            codec,
            getter,
            _owner: PhantomData,
        }
    }

    /// The key this field is stored under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The codec for this field's value.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// The projection of this field's value out of its owner.
    pub fn getter(&self) -> &G {
        &self.getter
    }
}

/// Projects a field's value out of its owner.
pub trait Getter<P, T> {
    /// Calls `f` with the value projected from `owner`.
    fn with<R>(&self, owner: &P, f: impl FnOnce(&T) -> R) -> R;
}

/// A [`Getter`] that returns the value by value.
#[derive(Debug, Clone, Copy)]
pub struct Owned<G>(pub(crate) G);

/// A [`Getter`] that returns the value by reference.
#[derive(Debug, Clone, Copy)]
pub struct Borrowed<G>(pub(crate) G);

impl<P, T, G> Getter<P, T> for Owned<G>
where
    G: Fn(&P) -> T,
{
    fn with<R>(&self, owner: &P, f: impl FnOnce(&T) -> R) -> R {
        f(&(self.0)(owner))
    }
}

impl<P, T, G> Getter<P, T> for Borrowed<G>
where
    G: for<'a> Fn(&'a P) -> &'a T,
{
    fn with<R>(&self, owner: &P, f: impl FnOnce(&T) -> R) -> R {
        f((self.0)(owner))
    }
}

/// A set of fields of a record of type `P`.
///
/// Implemented for a single [`Field`], for `()`, and for tuples of up to 16
/// elements that implement this trait themselves.
pub trait Fields<P> {
    /// The decoded values, matching the shape of `Self`.
    type Values;

    /// Decodes every field from the record's map entries, in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first field that fails to decode.
    fn decode_fields<O>(&self, ops: &O, entries: &MapEntries<'_, O::Value>) -> Result<Self::Values>
    where
        O: DynamicOps + ?Sized;

    /// Encodes every field of `owner`, appending the entries to `out` in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first field that fails to encode.
    fn encode_fields<O>(
        &self,
        ops: &O,
        owner: &P,
        out: &mut Vec<(O::Value, O::Value)>,
    ) -> Result<()>
    where
        O: DynamicOps + ?Sized;
}

impl<P, C, G> Fields<P> for Field<P, C, G>
where
    C: Codec,
    G: Getter<P, C::Target>,
{
    type Values = C::Target;

    fn decode_fields<O>(&self, ops: &O, entries: &MapEntries<'_, O::Value>) -> Result<C::Target>
    where
        O: DynamicOps + ?Sized,
    {
        let raw = entries
            .iter()
            .find(|(k, _)| ops.get_string(&**k).is_some_and(|k| *k == *self.name));

        match raw {
            Some((_, value)) => self.codec.decode(ops, &**value),
            None => {
                log::trace!("field `{}` is missing, decoding empty value", self.name);
                self.codec.decode(ops, &ops.empty())
            },
        }
    }

    fn encode_fields<O>(
        &self,
        ops: &O,
        owner: &P,
        out: &mut Vec<(O::Value, O::Value)>,
    ) -> Result<()>
    where
        O: DynamicOps + ?Sized,
    {
        let value = self.getter.with(owner, |v| self.codec.encode(ops, v))?;
        out.push((ops.create_string(&self.name), value));
        Ok(())
    }
}

/// A function that constructs a value from the arguments `Args`.
///
/// Implemented for functions and closures taking up to 16 arguments, with
/// `Args` being the tuple of the argument types.
pub trait Constructor<Args> {
    /// The constructed type.
    type Output;

    /// Calls the function with the tuple's elements as arguments.
    fn construct(&self, args: Args) -> Self::Output;
}

/// Turns the decoded values of a record's fields into the record.
///
/// Implemented by [`Infallible`] and [`Fallible`], which wrap a
/// [`Constructor`] returning the record or a [`Result`] of it respectively.
pub trait Assemble<Values, P> {
    /// Builds the record from its field values.
    ///
    /// # Errors
    ///
    /// Returns any error of a fallible constructor.
    fn assemble(&self, values: Values) -> Result<P>;
}

/// Wraps a [`Constructor`] that returns the record.
#[derive(Debug, Clone, Copy)]
pub struct Infallible<K>(K);

/// Wraps a [`Constructor`] that returns a [`Result`] of the record.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<K>(K);

impl<Values, P, K> Assemble<Values, P> for Infallible<K>
where
    K: Constructor<Values, Output = P>,
{
    fn assemble(&self, values: Values) -> Result<P> {
        Ok(self.0.construct(values))
    }
}

impl<Values, P, K> Assemble<Values, P> for Fallible<K>
where
    K: Constructor<Values, Output = Result<P>>,
{
    fn assemble(&self, values: Values) -> Result<P> {
        self.0.construct(values)
    }
}

/// Codec returned by [`record`], [`try_record`], and [`RecordBuilder`].
#[must_use]
pub struct RecordCodec<P, F, K> {
    fields: F,
    constructor: K,
    _owner: PhantomData<fn() -> P>,
}

/// Creates a codec for `P` from its fields and a constructor.
///
/// `fields` is usually a tuple of [`Field`] values. Decoding reads every field
/// by its name and passes the values, in declaration order, to `constructor`.
/// Encoding writes every field, in declaration order, to a new map.
///
/// A field whose key is missing is decoded from the ops'
/// [`empty`](DynamicOps::empty) value, so it only succeeds if the field's codec
/// accepts that, f.e. via [`Codec::optional`] or [`Codec::or_else`].
///
/// See the [module documentation](self) for an example.
pub const fn record<P, F, K>(fields: F, constructor: K) -> RecordCodec<P, F, Infallible<K>>
where
    F: Fields<P>,
    K: Constructor<F::Values, Output = P>,
{
    RecordCodec::new(fields, Infallible(constructor))
}

/// Like [`record`], but the constructor may fail.
///
/// An error returned by the constructor is returned by decoding.
pub const fn try_record<P, F, K>(fields: F, constructor: K) -> RecordCodec<P, F, Fallible<K>>
where
    F: Fields<P>,
    K: Constructor<F::Values, Output = Result<P>>,
{
    RecordCodec::new(fields, Fallible(constructor))
}

impl<P, F, K> RecordCodec<P, F, K> {
    pub(crate) const fn new(fields: F, constructor: K) -> Self {
        Self {
            fields,
            constructor,
            _owner: PhantomData,
        }
    }

    /// The fields of this record.
    pub const fn fields(&self) -> &F {
        &self.fields
    }
}

impl<P, F, K> Codec for RecordCodec<P, F, K>
where
    F: Fields<P>,
    K: Assemble<F::Values, P>,
{
    type Target = P;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<P>
    where
        O: DynamicOps + ?Sized,
    {
        let entries = ops.get_map(input).ok_or_else(|| Error::expected("map"))?;
        let values = self.fields.decode_fields(ops, &entries)?;
        self.constructor.assemble(values)
    }

    fn encode<O>(&self, ops: &O, value: &P) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        let mut entries = Vec::new();
        self.fields.encode_fields(ops, value, &mut entries)?;
        Ok(ops.create_map(entries))
    }
}

impl<P, C: Clone, G: Clone> Clone for Field<P, C, G> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            codec: self.codec.clone(),
            getter: self.getter.clone(),
            _owner: PhantomData,
        }
    }
}

impl<P, C: fmt::Debug, G> fmt::Debug for Field<P, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl<P, F: Clone, K: Clone> Clone for RecordCodec<P, F, K> {
    fn clone(&self) -> Self {
        Self::new(self.fields.clone(), self.constructor.clone())
    }
}

impl<P, F: fmt::Debug, K> fmt::Debug for RecordCodec<P, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordCodec")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
