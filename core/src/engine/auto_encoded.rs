use crate::engine::{KeyValueSink, SerializationEngine};
use crate::error::{EngineError, IntrospectionError};
use crate::introspect::{Reflect, TypeRef};
use crate::schema::Schema;
use crate::value::Value;
use std::sync::Arc;

/// Hooks a type can override to steer how it is coded.
///
/// Every hook has a default; `#[derive(AutoEncoded)]` keeps all of them.
pub trait AutoEncoded: Reflect + Sized {
  /// The schema shared by every instance of the type. Computed once per process.
  ///
  /// Defaults to the full schema minus [`AutoEncoded::excluded_property_names`].
  fn schema_for_class() -> Result<Schema, IntrospectionError> {
    let mut schema = Schema::for_type::<Self>()?;
    #[allow(deprecated)]
    let excluded = Self::excluded_property_names();
    schema.remove_properties(excluded);
    Ok(schema)
  }

  #[deprecated(note = "override `schema_for_class` and use `Schema::remove_properties`")]
  fn excluded_property_names() -> Vec<String> {
    Vec::new()
  }

  /// The class name written into keyed archives and checked when reading them back.
  ///
  /// Defaults to the simple type name. A renamed type keeps reading its old archives by
  /// returning the old name here.
  fn archive_class_name() -> &'static str {
    TypeRef::of::<Self>().simple_name()
  }

  /// Adjusts the class schema for this instance before a pass.
  ///
  /// The schema is shared; use `Arc::make_mut` to change it.
  fn prepare_schema(&self, schema: Arc<Schema>) -> Arc<Schema> {
    schema
  }

  fn value_to_encode(&self, property: &str) -> Result<Value, EngineError> {
    self.read_property(property)
  }

  fn apply_decoded_value(&mut self, property: &str, value: Value) -> Result<(), EngineError> {
    self.write_property(property, value)
  }

  fn encode_to<S: KeyValueSink + ?Sized>(&self, sink: &mut S) -> Result<(), EngineError> {
    SerializationEngine::encode(self, sink)
  }

  fn decode_from<S: KeyValueSink + ?Sized>(&mut self, sink: &S) -> Result<(), EngineError> {
    SerializationEngine::decode(self, sink)
  }
}
