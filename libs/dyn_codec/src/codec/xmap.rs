use std::fmt;

use super::Codec;
use crate::error::Result;
use crate::ops::DynamicOps;

/// Codec returned by [`Codec::xmap`].
#[derive(Clone, Copy)]
#[must_use]
pub struct XMap<C, F, G> {
    codec: C,
    forward: F,
    backward: G,
}

impl<C, F, G> XMap<C, F, G> {
    pub(super) const fn new(codec: C, forward: F, backward: G) -> Self {
        Self {
            codec,
            forward,
            backward,
        }
    }
}

impl<C, F, G, R> Codec for XMap<C, F, G>
where
    C: Codec,
    F: Fn(C::Target) -> R,
    G: Fn(&R) -> C::Target,
{
    type Target = R;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<R>
    where
        O: DynamicOps + ?Sized,
    {
        self.codec.decode(ops, input).map(&self.forward)
    }

    fn encode<O>(&self, ops: &O, value: &R) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        self.codec.encode(ops, &(self.backward)(value))
    }
}

/// Codec returned by [`Codec::flat_xmap`].
#[derive(Clone, Copy)]
#[must_use]
pub struct FlatXMap<C, F, G> {
    codec: C,
    forward: F,
    backward: G,
}

impl<C, F, G> FlatXMap<C, F, G> {
    pub(super) const fn new(codec: C, forward: F, backward: G) -> Self {
        Self {
            codec,
            forward,
            backward,
        }
    }
}

impl<C, F, G, R> Codec for FlatXMap<C, F, G>
where
    C: Codec,
    F: Fn(C::Target) -> Result<R>,
    G: Fn(&R) -> Result<C::Target>,
{
    type Target = R;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<R>
    where
        O: DynamicOps + ?Sized,
    {
        self.codec.decode(ops, input).and_then(&self.forward)
    }

    fn encode<O>(&self, ops: &O, value: &R) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        let value = (self.backward)(value)?;
        self.codec.encode(ops, &value)
    }
}

impl<C: fmt::Debug, F, G> fmt::Debug for XMap<C, F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XMap").field("codec", &self.codec).finish_non_exhaustive()
    }
}

impl<C: fmt::Debug, F, G> fmt::Debug for FlatXMap<C, F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatXMap").field("codec", &self.codec).finish_non_exhaustive()
    }
}
