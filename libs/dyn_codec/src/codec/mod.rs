//! The [`Codec`] trait and its combinators.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;
use crate::ops::DynamicOps;
use crate::record::{Borrowed, Field, Owned};

mod collection;
mod enums;
mod fallback;
mod optional;
mod primitive;
mod xmap;

pub use collection::{Collection, MapCodec, map, map_of};
pub use enums::{EnumCodec, NamedEnum, enum_codec};
pub use fallback::{EitherOf, Fallback, OrElse, OrElseWith, either, either_of};
pub use optional::Optional;
pub use primitive::{
    BOOL, BoolCodec, CHAR, CharCodec, DOUBLE, DoubleCodec, FLOAT, FloatCodec, INT, IntCodec, LONG,
    LongCodec, STRING, StringCodec,
};
pub use xmap::{FlatXMap, XMap};

/// A bidirectional transform between [`Self::Target`] and any representation
/// described by a [`DynamicOps`].
///
/// Codecs are immutable values. The combinator methods never modify their
/// receiver. Instead, they consume it and return a new codec wrapping it, much
/// like iterator adapters do. To reuse one codec in several places, use a
/// reference to it, or share it via [`Arc`]. Both implement [`Codec`] as well.
///
/// # Examples
///
/// ```
/// use dyn_codec::ops::JsonOps;
/// use dyn_codec::{Codec, INT};
/// use serde_json::json;
///
/// let codec = INT.list();
/// let value = codec.encode(&JsonOps, &vec![1, 2, 3])?;
/// assert_eq!(value, json!([1, 2, 3]));
///
/// let back = codec.decode(&JsonOps, &value)?;
/// assert_eq!(back, [1, 2, 3]);
/// # Ok::<_, dyn_codec::Error>(())
/// ```
pub trait Codec {
    /// The type this codec reads and writes.
    type Target;

    /// Decodes a value from its representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` cannot be interpreted as [`Self::Target`].
    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<Self::Target>
    where
        O: DynamicOps + ?Sized;

    /// Encodes a value into its representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented.
    fn encode<O>(&self, ops: &O, value: &Self::Target) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized;

    /// Maps this codec to another type via a pair of conversions.
    ///
    /// `forward` is applied after decoding, `backward` before encoding. For the
    /// resulting codec to round-trip, the two must be inverses.
    fn xmap<R, F, G>(self, forward: F, backward: G) -> XMap<Self, F, G>
    where
        Self: Sized,
        F: Fn(Self::Target) -> R,
        G: Fn(&R) -> Self::Target,
    {
        XMap::new(self, forward, backward)
    }

    /// Like [`xmap`](Self::xmap), but both conversions may fail.
    ///
    /// Errors from either conversion are returned unchanged.
    fn flat_xmap<R, F, G>(self, forward: F, backward: G) -> FlatXMap<Self, F, G>
    where
        Self: Sized,
        F: Fn(Self::Target) -> Result<R>,
        G: Fn(&R) -> Result<Self::Target>,
    {
        FlatXMap::new(self, forward, backward)
    }

    /// Returns a codec that decodes to `default` whenever this codec fails.
    ///
    /// Decoding with the returned codec never fails. This also means it will
    /// not round-trip values that this codec can't encode.
    fn or_else(self, default: Self::Target) -> OrElse<Self>
    where
        Self: Sized,
        Self::Target: Clone,
    {
        OrElse::new(self, default)
    }

    /// Like [`or_else`](Self::or_else), but computes the default on demand.
    fn or_else_with<F>(self, default: F) -> OrElseWith<Self, F>
    where
        Self: Sized,
        F: Fn() -> Self::Target,
    {
        OrElseWith::new(self, default)
    }

    /// Returns a codec for a [`Vec`] of this codec's values.
    ///
    /// Decoding fails on the first element that fails to decode.
    fn list(self) -> Collection<Self, Vec<Self::Target>>
    where
        Self: Sized,
    {
        Collection::new(self)
    }

    /// Returns a codec for any collection of this codec's values.
    ///
    /// [`list`](Self::list) is this with `C` being a [`Vec`].
    fn collection<C>(self) -> Collection<Self, C>
    where
        Self: Sized,
        C: FromIterator<Self::Target>,
        for<'a> &'a C: IntoIterator<Item = &'a Self::Target>,
    {
        Collection::new(self)
    }

    /// Returns a codec that maps the ops' empty value to [`None`].
    #[doc(alias = "nullable")]
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Pairs this codec with a field name and an owned projection.
    ///
    /// The result is used to build a [`record`](crate::record()) codec.
    fn field_of<P, G>(
        self,
        name: impl Into<Cow<'static, str>>,
        getter: G,
    ) -> Field<P, Self, Owned<G>>
    where
        Self: Sized,
        G: Fn(&P) -> Self::Target,
    {
        Field::new(name, self, Owned(getter))
    }

    /// Pairs this codec with a field name and a borrowing projection.
    ///
    /// This avoids cloning the field's value when encoding.
    fn field_ref<P, G>(
        self,
        name: impl Into<Cow<'static, str>>,
        getter: G,
    ) -> Field<P, Self, Borrowed<G>>
    where
        Self: Sized,
        G: for<'a> Fn(&'a P) -> &'a Self::Target,
    {
        Field::new(name, self, Borrowed(getter))
    }

    /// Borrows this codec, so it can be used by a combinator without consuming
    /// it.
    fn by_ref(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }
}

macro_rules! impl_deref_codec {
    ($($Ty:ty),*) => { $(
        impl<C: Codec> Codec for $Ty {
            type Target = C::Target;

            fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<Self::Target>
            where
                O: DynamicOps + ?Sized,
            {
                (**self).decode(ops, input)
            }

            fn encode<O>(&self, ops: &O, value: &Self::Target) -> Result<O::Value>
            where
                O: DynamicOps + ?Sized,
            {
                (**self).encode(ops, value)
            }
        }
    )* };
}

impl_deref_codec!(&C, Box<C>, Rc<C>, Arc<C>);
