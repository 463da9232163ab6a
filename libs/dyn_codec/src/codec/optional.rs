use super::Codec;
use crate::error::Result;
use crate::ops::DynamicOps;

/// Codec returned by [`Codec::optional`].
///
/// The ops' [`empty`](DynamicOps::empty) value decodes to [`None`] and
/// [`None`] encodes to it. Any other value is handled by the inner codec.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct Optional<C> {
    codec: C,
}

impl<C> Optional<C> {
    pub(super) const fn new(codec: C) -> Self {
        Self { codec }
    }
}

impl<C: Codec> Codec for Optional<C> {
    type Target = Option<C::Target>;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<Self::Target>
    where
        O: DynamicOps + ?Sized,
    {
        if ops.is_empty(input) {
            return Ok(None);
        }

        self.codec.decode(ops, input).map(Some)
    }

    fn encode<O>(&self, ops: &O, value: &Self::Target) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        match value {
            Some(value) => self.codec.encode(ops, value),
            None => Ok(ops.empty()),
        }
    }
}
