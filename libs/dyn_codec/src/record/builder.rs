use std::fmt;
use std::marker::PhantomData;

use super::{Constructor, Fallible, Fields, Infallible, RecordCodec};
use crate::error::Result;

/// Collects the fields of a record one at a time.
///
/// This is an alternative to passing a tuple to [`record`](super::record).
/// Each call to [`field`](Self::field) appends to the tuple of fields, so a
/// builder holds at most 16 fields. Pass a tuple of fields to `field` to go
/// beyond that.
///
/// # Examples
///
/// ```
/// use dyn_codec::ops::JsonOps;
/// use dyn_codec::{BOOL, Codec, RecordBuilder, STRING};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Flag {
///     name: String,
///     enabled: bool,
/// }
///
/// let codec = RecordBuilder::<Flag>::new()
///     .field(STRING.field_ref("name", |f: &Flag| &f.name))
///     .field(BOOL.or_else(false).field_of("enabled", |f: &Flag| f.enabled))
///     .build(|name, enabled| Flag { name, enabled });
///
/// let flag = codec.decode(&JsonOps, &json!({ "name": "debug" }))?;
/// assert!(!flag.enabled);
/// # Ok::<_, dyn_codec::Error>(())
/// ```
#[must_use]
pub struct RecordBuilder<P, F = ()> {
    fields: F,
    _owner: PhantomData<fn() -> P>,
}

impl<P> RecordBuilder<P> {
    /// Creates a builder without any fields.
    pub const fn new() -> Self {
        Self {
            fields: (),
            _owner: PhantomData,
        }
    }
}

impl<P> Default for RecordBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, F> RecordBuilder<P, F> {
    /// Adds a field after the ones added so far.
    pub fn field<N>(self, field: N) -> RecordBuilder<P, F::Output>
    where
        F: Append<N>,
        N: Fields<P>,
    {
        RecordBuilder {
            fields: self.fields.append(field),
            _owner: PhantomData,
        }
    }

    /// Finishes the record with an infallible constructor.
    ///
    /// See [`record`](super::record).
    pub fn build<K>(self, constructor: K) -> RecordCodec<P, F, Infallible<K>>
    where
        F: Fields<P>,
        K: Constructor<F::Values, Output = P>,
    {
        RecordCodec::new(self.fields, Infallible(constructor))
    }

    /// Finishes the record with a fallible constructor.
    ///
    /// See [`try_record`](super::try_record).
    pub fn try_build<K>(self, constructor: K) -> RecordCodec<P, F, Fallible<K>>
    where
        F: Fields<P>,
        K: Constructor<F::Values, Output = Result<P>>,
    {
        RecordCodec::new(self.fields, Fallible(constructor))
    }
}

impl<P, F: fmt::Debug> fmt::Debug for RecordBuilder<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordBuilder")
            .field("fields", &self.fields)
            .finish()
    }
}

/// A tuple that another element can be appended to.
///
/// Used by [`RecordBuilder::field`].
pub trait Append<N> {
    /// The tuple with `N` appended.
    type Output;

    /// Appends `next` to the end of this tuple.
    fn append(self, next: N) -> Self::Output;
}

macro_rules! impl_append {
    ($($T:ident $t:ident),*) => {
        impl<$($T,)* N> Append<N> for ($($T,)*) {
            type Output = ($($T,)* N,);

            fn append(self, next: N) -> Self::Output {
                let ($($t,)*) = self;
                ($($t,)* next,)
            }
        }
    };
}

impl_append!();
impl_append!(T1 t1);
impl_append!(T1 t1, T2 t2);
impl_append!(T1 t1, T2 t2, T3 t3);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12, T13 t13);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12, T13 t13, T14 t14);
impl_append!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12, T13 t13, T14 t14, T15 t15);
