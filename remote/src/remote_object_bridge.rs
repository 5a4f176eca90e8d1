use crate::RemoteObject;
use autocodable_core_rs::{
  AutoEncoded, EngineError, IntrospectionError, Schema, SchemaPurpose, SchemaRegistry, SerializationEngine, TypeRef,
};
use std::sync::Arc;

pub const REMOTE_SCHEMA: SchemaPurpose = SchemaPurpose::new("remote");

/// Conversion of coded objects to and from [`RemoteObject`]s.
pub trait RemoteObjectBridge: AutoEncoded {
  /// Class name written to, and required on, remote objects. Defaults to the simple type name.
  fn remote_class_name() -> String {
    TypeRef::of::<Self>().simple_name().to_string()
  }

  /// Schema used against remote objects. Defaults to the class schema.
  fn remote_schema() -> Result<Schema, IntrospectionError> {
    Ok(SchemaRegistry::class_schema::<Self>()?.as_ref().clone())
  }

  fn to_remote_object(&self) -> Result<RemoteObject, EngineError> {
    let mut remote = RemoteObject::new(Self::remote_class_name());
    SerializationEngine::encode_with_schema(self, registered_remote_schema::<Self>()?, &mut remote)?;
    Ok(remote)
  }

  /// Builds a new instance from `remote`.
  ///
  /// Yields `None` when `remote` is absent or tagged with another class name.
  fn from_remote_object(remote: Option<&RemoteObject>) -> Result<Option<Self>, EngineError>
  where
    Self: Default, {
    let Some(remote) = remote else {
      return Ok(None);
    };
    let expected = Self::remote_class_name();
    if remote.class_name() != expected {
      tracing::debug!(
        "Ignoring remote object: class_name = {}, expected = {}",
        remote.class_name(),
        expected
      );
      return Ok(None);
    }
    let mut object = Self::default();
    SerializationEngine::decode_with_schema(&mut object, registered_remote_schema::<Self>()?, remote)?;
    Ok(Some(object))
  }
}

fn registered_remote_schema<T: RemoteObjectBridge>() -> Result<Arc<Schema>, IntrospectionError> {
  SchemaRegistry::get_or_compute(TypeRef::of::<T>(), REMOTE_SCHEMA, T::remote_schema)
}
