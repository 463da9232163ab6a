//! # Dynamic Codecs
//!
//! Bidirectional, format-independent conversion between typed values and
//! generic tree-shaped representations.
//!
//! A [`Codec`] knows how to turn its [`Target`](Codec::Target) into a
//! representation and back, but not what that representation is. That is
//! described by a [`DynamicOps`](ops::DynamicOps) implementation, which knows
//! how to build and inspect one concrete format. The same codec therefore
//! works with every format:
//!
//! - [`JsonOps`](ops::JsonOps): [`serde_json::Value`] trees
//! - [`BsonOps`](ops::BsonOps): [`bson::Bson`] values
//! - [`ByteOps`](ops::ByteOps): a compact, length-prefixed binary encoding
//!
//! Codecs for the primitives are provided as constants, f.e. [`INT`] and
//! [`STRING`]. Everything else is composed from these via the combinators on
//! [`Codec`], the functions in this crate, and [`record`] for struct-like
//! types.
//!
//! ```
//! use dyn_codec::ops::{ByteOps, JsonOps};
//! use dyn_codec::{Codec, INT, STRING, record};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Item {
//!     name: String,
//!     tags: Vec<String>,
//!     count: Option<i32>,
//! }
//!
//! let codec = record(
//!     (
//!         STRING.field_ref("name", |i: &Item| &i.name),
//!         STRING.list().field_ref("tags", |i: &Item| &i.tags),
//!         INT.optional().field_ref("count", |i: &Item| &i.count),
//!     ),
//!     |name, tags, count| Item { name, tags, count },
//! );
//!
//! let item = codec.decode(&JsonOps, &json!({ "name": "torch", "tags": ["light"] }))?;
//! assert_eq!(item.count, None);
//!
//! let bytes = codec.encode(&ByteOps, &item)?;
//! assert_eq!(codec.decode(&ByteOps, &bytes)?, item);
//! # Ok::<_, dyn_codec::Error>(())
//! ```
//!
//! # Features
//!
//! - `json`: enables [`JsonOps`](ops::JsonOps). Enabled by default.
//! - `bson`: enables [`BsonOps`](ops::BsonOps). Enabled by default.
//! - `bytes`: enables [`ByteOps`](ops::ByteOps). Enabled by default.

mod codec;
mod either;
mod error;
pub mod ops;
pub mod record;

pub use codec::*;
pub use either::Either;
pub use error::{Error, Result};
pub use record::{Field, RecordBuilder, RecordCodec, record, try_record};
