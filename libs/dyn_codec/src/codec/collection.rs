use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::IndexMap;

use super::Codec;
use crate::error::{Error, Result};
use crate::ops::DynamicOps;

/// Codec returned by [`Codec::list`] and [`Codec::collection`].
#[must_use]
pub struct Collection<C, T> {
    codec: C,
    _collection: PhantomData<fn() -> T>,
}

impl<C, T> Collection<C, T> {
    pub(super) const fn new(codec: C) -> Self {
        Self {
            codec,
            _collection: PhantomData,
        }
    }
}

impl<C, T> Codec for Collection<C, T>
where
    C: Codec,
    T: FromIterator<C::Target>,
    for<'a> &'a T: IntoIterator<Item = &'a C::Target>,
{
    type Target = T;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<T>
    where
        O: DynamicOps + ?Sized,
    {
        let elems = ops.get_list(input).ok_or_else(|| Error::expected("list"))?;
        elems
            .iter()
            .map(|elem| self.codec.decode(ops, elem))
            .collect()
    }

    fn encode<O>(&self, ops: &O, value: &T) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        let elems = value
            .into_iter()
            .map(|elem| self.codec.encode(ops, elem))
            .collect::<Result<Vec<_>>>()?;

        Ok(ops.create_list(elems))
    }
}

/// Codec returned by [`map`] and [`map_of`].
#[must_use]
pub struct MapCodec<K, V, M> {
    key: K,
    value: V,
    _map: PhantomData<fn() -> M>,
}

/// Creates a codec for an [`IndexMap`] from codecs for its keys and values.
///
/// Entries keep the order they have in the representation.
///
/// Note that some representations, f.e. JSON, only support string keys.
pub const fn map<K, V>(key: K, value: V) -> MapCodec<K, V, IndexMap<K::Target, V::Target>>
where
    K: Codec,
    V: Codec,
    K::Target: Hash + Eq,
{
    map_of(key, value)
}

/// Creates a codec for any map type from codecs for its keys and values.
///
/// The map type is usually inferred. [`map`] is this with `M` being an
/// [`IndexMap`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use dyn_codec::ops::JsonOps;
/// use dyn_codec::{Codec, INT, STRING, map_of};
/// use serde_json::json;
///
/// let codec = map_of::<BTreeMap<_, _>, _, _>(STRING, INT);
/// let map = codec.decode(&JsonOps, &json!({ "b": 2, "a": 1 }))?;
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
/// # Ok::<_, dyn_codec::Error>(())
/// ```
pub const fn map_of<M, K, V>(key: K, value: V) -> MapCodec<K, V, M>
where
    K: Codec,
    V: Codec,
{
    MapCodec {
        key,
        value,
        _map: PhantomData,
    }
}

impl<K, V, M> Codec for MapCodec<K, V, M>
where
    K: Codec,
    V: Codec,
    M: FromIterator<(K::Target, V::Target)>,
    for<'a> &'a M: IntoIterator<Item = (&'a K::Target, &'a V::Target)>,
{
    type Target = M;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<M>
    where
        O: DynamicOps + ?Sized,
    {
        let entries = ops.get_map(input).ok_or_else(|| Error::expected("map"))?;
        entries
            .iter()
            .map(|(k, v)| Ok((self.key.decode(ops, &**k)?, self.value.decode(ops, &**v)?)))
            .collect()
    }

    fn encode<O>(&self, ops: &O, value: &M) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        let entries = value
            .into_iter()
            .map(|(k, v)| Ok((self.key.encode(ops, k)?, self.value.encode(ops, v)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(ops.create_map(entries))
    }
}

impl<C: Clone, T> Clone for Collection<C, T> {
    fn clone(&self) -> Self {
        Self::new(self.codec.clone())
    }
}

impl<C: fmt::Debug, T> fmt::Debug for Collection<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection").field("codec", &self.codec).finish()
    }
}

impl<K: Clone, V: Clone, M> Clone for MapCodec<K, V, M> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            _map: PhantomData,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, M> fmt::Debug for MapCodec<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCodec")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
