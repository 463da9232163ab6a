//! Combinators that recover from a failed alternative.
//!
//! These are the only combinators that don't propagate every error. They only
//! ever observe [`Error`](crate::Error) values; panics are not caught.

use std::fmt;

use super::Codec;
use crate::either::Either;
use crate::error::Result;
use crate::ops::DynamicOps;

/// Codec returned by [`Codec::or_else`].
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct OrElse<C: Codec> {
    codec: C,
    default: C::Target,
}

impl<C: Codec> OrElse<C> {
    pub(super) const fn new(codec: C, default: C::Target) -> Self {
        Self { codec, default }
    }
}

impl<C> Codec for OrElse<C>
where
    C: Codec,
    C::Target: Clone,
{
    type Target = C::Target;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<C::Target>
    where
        O: DynamicOps + ?Sized,
    {
        match self.codec.decode(ops, input) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::trace!("substituting default value: {err}");
                Ok(self.default.clone())
            },
        }
    }

    fn encode<O>(&self, ops: &O, value: &C::Target) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        self.codec.encode(ops, value)
    }
}

/// Codec returned by [`Codec::or_else_with`].
#[derive(Clone, Copy)]
#[must_use]
pub struct OrElseWith<C, F> {
    codec: C,
    default: F,
}

impl<C, F> OrElseWith<C, F> {
    pub(super) const fn new(codec: C, default: F) -> Self {
        Self { codec, default }
    }
}

impl<C, F> Codec for OrElseWith<C, F>
where
    C: Codec,
    F: Fn() -> C::Target,
{
    type Target = C::Target;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<C::Target>
    where
        O: DynamicOps + ?Sized,
    {
        match self.codec.decode(ops, input) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::trace!("substituting computed default value: {err}");
                Ok((self.default)())
            },
        }
    }

    fn encode<O>(&self, ops: &O, value: &C::Target) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        self.codec.encode(ops, value)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for OrElseWith<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrElseWith").field("codec", &self.codec).finish_non_exhaustive()
    }
}

/// Codec returned by [`either`].
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct Fallback<L, R> {
    left: L,
    right: R,
}

/// Combines two codecs for the same type, preferring `left`.
///
/// Decoding first tries `left`. If that fails, it tries `right` and returns
/// its result, including its error if it also fails. Encoding works the same
/// way.
///
/// This is how a value that may be written in one of two shapes is expressed.
/// Note that it does not round-trip values `left` decodes differently than
/// `right` would.
///
/// Nest calls to try more than two alternatives.
///
/// # Examples
///
/// ```
/// use dyn_codec::ops::JsonOps;
/// use dyn_codec::{Codec, INT, either};
/// use serde_json::json;
///
/// // accepts either `[1, 2]` or just `1`
/// let codec = either(INT.list(), INT.xmap(|i| vec![i], |v: &Vec<i32>| v[0]));
/// assert_eq!(codec.decode(&JsonOps, &json!([1, 2]))?, [1, 2]);
/// assert_eq!(codec.decode(&JsonOps, &json!(1))?, [1]);
/// # Ok::<_, dyn_codec::Error>(())
/// ```
pub const fn either<L, R>(left: L, right: R) -> Fallback<L, R>
where
    L: Codec,
    R: Codec<Target = L::Target>,
{
    Fallback { left, right }
}

impl<L, R> Codec for Fallback<L, R>
where
    L: Codec,
    R: Codec<Target = L::Target>,
{
    type Target = L::Target;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<L::Target>
    where
        O: DynamicOps + ?Sized,
    {
        self.left.decode(ops, input).or_else(|err| {
            log::trace!("decoding left alternative failed, trying right: {err}");
            self.right.decode(ops, input)
        })
    }

    fn encode<O>(&self, ops: &O, value: &L::Target) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        self.left.encode(ops, value).or_else(|err| {
            log::trace!("encoding left alternative failed, trying right: {err}");
            self.right.encode(ops, value)
        })
    }
}

/// Codec returned by [`either_of`].
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct EitherOf<L, R> {
    left: L,
    right: R,
}

/// Combines two codecs for different types into a codec for [`Either`].
///
/// Decoding first tries `left`, producing [`Either::Left`]. If that fails, it
/// decodes with `right`, producing [`Either::Right`]. Encoding uses the codec
/// matching the variant.
pub const fn either_of<L, R>(left: L, right: R) -> EitherOf<L, R>
where
    L: Codec,
    R: Codec,
{
    EitherOf { left, right }
}

impl<L, R> Codec for EitherOf<L, R>
where
    L: Codec,
    R: Codec,
{
    type Target = Either<L::Target, R::Target>;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<Self::Target>
    where
        O: DynamicOps + ?Sized,
    {
        match self.left.decode(ops, input) {
            Ok(value) => Ok(Either::Left(value)),
            Err(err) => {
                log::trace!("decoding left variant failed, trying right: {err}");
                self.right.decode(ops, input).map(Either::Right)
            },
        }
    }

    fn encode<O>(&self, ops: &O, value: &Self::Target) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        match value {
            Either::Left(value) => self.left.encode(ops, value),
            Either::Right(value) => self.right.encode(ops, value),
        }
    }
}
