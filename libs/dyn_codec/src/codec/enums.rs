use std::fmt;
use std::marker::PhantomData;

use super::Codec;
use crate::error::{Error, Result};
use crate::ops::DynamicOps;

/// A fieldless enum whose variants have symbolic names.
///
/// Implement this via [`impl_named_enum!`](crate::impl_named_enum) to use the
/// variant identifiers as the names.
pub trait NamedEnum: Sized + 'static {
    /// All variants, in declaration order.
    const VARIANTS: &'static [Self];

    /// Gets the symbolic name of this variant.
    fn name(&self) -> &'static str;

    /// Resolves a variant by its symbolic name.
    fn from_name(name: &str) -> Option<&'static Self> {
        Self::VARIANTS.iter().find(|v| v.name() == name)
    }
}

/// Implements [`NamedEnum`] for a fieldless enum.
///
/// Every variant must be listed. The name of each variant is its identifier.
///
/// # Examples
///
/// ```
/// use dyn_codec::NamedEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Category {
///     Building,
///     Redstone,
/// }
///
/// dyn_codec::impl_named_enum!(Category { Building, Redstone });
///
/// assert_eq!(Category::Redstone.name(), "Redstone");
/// assert_eq!(Category::from_name("Building"), Some(&Category::Building));
/// ```
#[macro_export]
macro_rules! impl_named_enum {
    ($Ty:ident { $($Variant:ident),* $(,)? }) => {
        impl $crate::NamedEnum for $Ty {
            const VARIANTS: &'static [Self] = &[$(Self::$Variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$Variant => ::core::stringify!($Variant),)*
                }
            }
        }
    };
}

/// Codec returned by [`enum_codec`].
#[must_use]
pub struct EnumCodec<E> {
    _enum: PhantomData<fn() -> E>,
}

/// Creates a codec for a [`NamedEnum`].
///
/// Variants are represented by their name as a string. Decoding a string that
/// isn't the name of any variant fails.
pub const fn enum_codec<E: NamedEnum + Clone>() -> EnumCodec<E> {
    EnumCodec {
        _enum: PhantomData,
    }
}

impl<E: NamedEnum + Clone> Codec for EnumCodec<E> {
    type Target = E;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<E>
    where
        O: DynamicOps + ?Sized,
    {
        let name = ops
            .get_string(input)
            .ok_or_else(|| Error::new("Expected enum string"))?;

        E::from_name(&name)
            .cloned()
            .ok_or_else(|| Error::new(format!("Invalid enum value: {name}")))
    }

    fn encode<O>(&self, ops: &O, value: &E) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        Ok(ops.create_string(value.name()))
    }
}

impl<E> Clone for EnumCodec<E> {
    fn clone(&self) -> Self {
        Self {
            _enum: PhantomData,
        }
    }
}

impl<E> fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumCodec")
            .field("enum", &std::any::type_name::<E>())
            .finish()
    }
}
