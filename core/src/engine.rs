//! Encode and decode passes over key/value sinks.

mod auto_encoded;
mod key_value_sink;
mod serialization_engine;

pub use self::{auto_encoded::*, key_value_sink::*, serialization_engine::*};
