use crate::engine::{AutoEncoded, KeyValueSink};
use crate::error::EngineError;
use crate::introspect::{PropertyDescriptor, PropertyIntrospector, TypeRef};
use crate::schema::{PropertyBinding, Schema, SchemaRegistry};
use std::sync::Arc;

/// Runs single encode or decode passes of an object against a sink.
///
/// A pass is not transactional: when a property fails, the ones handled before it keep
/// their new state.
pub struct SerializationEngine;

impl SerializationEngine {
  pub fn encode<T, S>(object: &T, sink: &mut S) -> Result<(), EngineError>
  where
    T: AutoEncoded,
    S: KeyValueSink + ?Sized, {
    let schema = SchemaRegistry::class_schema::<T>()?;
    Self::encode_with_schema(object, schema, sink)
  }

  pub fn encode_with_schema<T, S>(object: &T, schema: Arc<Schema>, sink: &mut S) -> Result<(), EngineError>
  where
    T: AutoEncoded,
    S: KeyValueSink + ?Sized, {
    let descriptors = PropertyIntrospector::properties_of::<T>()?;
    let schema = object.prepare_schema(schema);
    for binding in Self::bind::<T>(&schema, &descriptors)? {
      let value = object.value_to_encode(binding.property)?;
      tracing::trace!("encode: {} -> {} ({})", binding.property, binding.encoded_name, value.kind());
      sink.set(binding.encoded_name, value);
    }
    Ok(())
  }

  pub fn decode<T, S>(object: &mut T, sink: &S) -> Result<(), EngineError>
  where
    T: AutoEncoded,
    S: KeyValueSink + ?Sized, {
    let schema = SchemaRegistry::class_schema::<T>()?;
    Self::decode_with_schema(object, schema, sink)
  }

  /// Assigns every property whose key is present in the sink; absent keys are skipped.
  pub fn decode_with_schema<T, S>(object: &mut T, schema: Arc<Schema>, sink: &S) -> Result<(), EngineError>
  where
    T: AutoEncoded,
    S: KeyValueSink + ?Sized, {
    let descriptors = PropertyIntrospector::properties_of::<T>()?;
    let schema = object.prepare_schema(schema);
    for binding in Self::bind::<T>(&schema, &descriptors)? {
      let Some(value) = sink.get(binding.encoded_name) else {
        tracing::trace!("decode: {} absent, keeping {}", binding.encoded_name, binding.property);
        continue;
      };
      tracing::trace!("decode: {} -> {} ({})", binding.encoded_name, binding.property, value.kind());
      object.apply_decoded_value(binding.property, value)?;
    }
    Ok(())
  }

  /// The class schema as adjusted by `object`, checked against its type.
  pub fn effective_schema<T: AutoEncoded>(object: &T) -> Result<Arc<Schema>, EngineError> {
    let descriptors = PropertyIntrospector::properties_of::<T>()?;
    let schema = object.prepare_schema(SchemaRegistry::class_schema::<T>()?);
    Self::bind::<T>(&schema, &descriptors)?;
    Ok(schema)
  }

  fn bind<'a, T: AutoEncoded>(
    schema: &'a Schema,
    descriptors: &[PropertyDescriptor],
  ) -> Result<Vec<PropertyBinding<'a>>, EngineError> {
    schema.bind(TypeRef::of::<T>(), descriptors).map_err(|err| {
      tracing::warn!("Rejected schema for {}: {}", std::any::type_name::<T>(), err);
      EngineError::from(err)
    })
  }
}
