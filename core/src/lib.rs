//! Schema-governed automatic coding of object properties.
//!
//! Types describe their properties through [`Reflect`] (usually derived), pick or
//! customise a [`Schema`] through the [`AutoEncoded`] hooks, and are then moved in and
//! out of any [`KeyValueSink`]: a [`Dictionary`], a binary [`KeyedArchive`], or an
//! adapter provided by another crate.

extern crate self as autocodable_core_rs;

pub mod archive;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod introspect;
pub mod schema;
pub mod value;

pub use archive::*;
pub use dictionary::*;
pub use engine::*;
pub use error::*;
pub use introspect::*;
pub use schema::*;
pub use value::*;

// Re-exports for derive macros
pub use autocodable_derive_rs::{AutoEncoded, Reflect};

#[cfg(test)]
pub(crate) mod test_support;
