use crate::error::IntrospectionError;
use crate::introspect::{PropertyDescriptor, Reflect, TypeInfo};
use autocodable_utils_rs::collections::DashMapExtension;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::collections::BTreeMap;
use std::sync::Arc;

static DESCRIPTORS: Lazy<DashMap<TypeId, Arc<[PropertyDescriptor]>>> = Lazy::new(DashMap::new);

/// Enumerates the properties of a type and its ancestors.
///
/// Results are sorted by name and cached for the lifetime of the process.
pub struct PropertyIntrospector;

impl PropertyIntrospector {
  pub fn properties_of<T: Reflect>() -> Result<Arc<[PropertyDescriptor]>, IntrospectionError> {
    Self::properties_of_type(T::type_info())
  }

  pub fn properties_of_type(info: TypeInfo) -> Result<Arc<[PropertyDescriptor]>, IntrospectionError> {
    DESCRIPTORS.load_or_try_compute(info.type_ref.type_id(), || {
      let descriptors = Self::collect(info)?;
      tracing::debug!(
        "Introspected {}: properties = {:?}",
        info.type_ref,
        descriptors.iter().map(|d| d.name).collect::<Vec<_>>()
      );
      Ok(descriptors)
    })
  }

  fn collect(info: TypeInfo) -> Result<Arc<[PropertyDescriptor]>, IntrospectionError> {
    let mut collected = BTreeMap::new();
    let mut current = Some(info);
    while let Some(type_info) = current {
      for declaration in type_info.declared {
        // walked from the most derived type upwards, so the first declaration wins
        if collected.contains_key(declaration.name) {
          continue;
        }
        if !(declaration.readable && declaration.writable) {
          return Err(IntrospectionError::UndeterminedStorage {
            type_name: type_info.type_ref.type_name(),
            property: declaration.name,
            readable: declaration.readable,
            writable: declaration.writable,
          });
        }
        collected.insert(
          declaration.name,
          PropertyDescriptor::new(declaration.name, type_info.type_ref),
        );
      }
      current = type_info.parent_info();
    }
    Ok(collected.into_values().collect())
  }
}
