use crate::engine::AutoEncoded;
use crate::error::IntrospectionError;
use crate::introspect::TypeRef;
use crate::schema::Schema;
use autocodable_utils_rs::collections::DashMapExtension;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Distinguishes the class-level schemas one type may keep, e.g. one for local coding
/// and one for a remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaPurpose(&'static str);

impl SchemaPurpose {
  pub const CLASS: SchemaPurpose = SchemaPurpose("class");

  pub const fn new(name: &'static str) -> Self {
    Self(name)
  }

  pub fn name(&self) -> &'static str {
    self.0
  }
}

impl Display for SchemaPurpose {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.0)
  }
}

static SCHEMAS: Lazy<DashMap<(TypeId, SchemaPurpose), Arc<Schema>>> = Lazy::new(DashMap::new);

/// Process-wide memo of class-level schemas.
///
/// Entries are computed on first request and kept for the life of the process.
pub struct SchemaRegistry;

impl SchemaRegistry {
  pub fn class_schema<T: AutoEncoded>() -> Result<Arc<Schema>, IntrospectionError> {
    Self::get_or_compute(TypeRef::of::<T>(), SchemaPurpose::CLASS, T::schema_for_class)
  }

  pub fn get_or_compute<F>(type_ref: TypeRef, purpose: SchemaPurpose, compute: F) -> Result<Arc<Schema>, IntrospectionError>
  where
    F: FnOnce() -> Result<Schema, IntrospectionError>, {
    SCHEMAS.load_or_try_compute((type_ref.type_id(), purpose), || {
      let schema = compute()?;
      tracing::debug!(
        "Registering schema: type_name = {}, purpose = {}, properties = {}",
        type_ref,
        purpose,
        schema.len()
      );
      Ok(Arc::new(schema))
    })
  }

  pub fn get(type_ref: TypeRef, purpose: SchemaPurpose) -> Option<Arc<Schema>> {
    SCHEMAS
      .get(&(type_ref.type_id(), purpose))
      .map(|entry| entry.value().clone())
  }
}
