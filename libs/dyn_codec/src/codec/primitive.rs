//! Codecs for the primitive kinds every [`DynamicOps`] supports.

use super::Codec;
use crate::error::{Error, Result};
use crate::ops::DynamicOps;

macro_rules! define_primitive {
    ($(
        $(#[$attr:meta])*
        $CONST:ident: $Name:ident($Ty:ty) = $get:ident, $create:ident, $kind:literal;
    )*) => { $(
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $Name;

        $(#[$attr])*
        pub const $CONST: $Name = $Name;

        impl Codec for $Name {
            type Target = $Ty;

            fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<$Ty>
            where
                O: DynamicOps + ?Sized,
            {
                ops.$get(input).ok_or_else(|| Error::expected($kind))
            }

            fn encode<O>(&self, ops: &O, value: &$Ty) -> Result<O::Value>
            where
                O: DynamicOps + ?Sized,
            {
                Ok(ops.$create(*value))
            }
        }
    )* };
}

define_primitive! {
    /// Codec for [`i32`] values.
    INT: IntCodec(i32) = get_int, create_int, "integer";
    /// Codec for [`i64`] values.
    LONG: LongCodec(i64) = get_long, create_long, "long";
    /// Codec for [`f32`] values.
    FLOAT: FloatCodec(f32) = get_float, create_float, "float";
    /// Codec for [`f64`] values.
    DOUBLE: DoubleCodec(f64) = get_double, create_double, "double";
    /// Codec for [`bool`] values.
    BOOL: BoolCodec(bool) = get_bool, create_bool, "boolean";
}

/// Codec for [`String`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCodec;

/// Codec for [`String`] values.
pub const STRING: StringCodec = StringCodec;

impl Codec for StringCodec {
    type Target = String;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<String>
    where
        O: DynamicOps + ?Sized,
    {
        ops.get_string(input)
            .map(|s| s.into_owned())
            .ok_or_else(|| Error::expected("string"))
    }

    fn encode<O>(&self, ops: &O, value: &String) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        Ok(ops.create_string(value))
    }
}

/// Codec for [`char`] values, represented as a string of exactly one
/// character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCodec;

/// Codec for [`char`] values, represented as a string of exactly one
/// character.
pub const CHAR: CharCodec = CharCodec;

impl Codec for CharCodec {
    type Target = char;

    fn decode<O>(&self, ops: &O, input: &O::Value) -> Result<char>
    where
        O: DynamicOps + ?Sized,
    {
        let s = ops.get_string(input).ok_or_else(|| Error::expected("char"))?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::expected("char")),
        }
    }

    fn encode<O>(&self, ops: &O, value: &char) -> Result<O::Value>
    where
        O: DynamicOps + ?Sized,
    {
        let mut buf = [0u8; 4];
        Ok(ops.create_string(value.encode_utf8(&mut buf)))
    }
}
