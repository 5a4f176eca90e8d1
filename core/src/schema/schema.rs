use crate::error::{IntrospectionError, SchemaContractError};
use crate::introspect::{PropertyDescriptor, PropertyIntrospector, Reflect, TypeRef};
use crate::schema::NameMinimizer;
use std::collections::{BTreeMap, BTreeSet};

/// Maps property names to the keys they are stored under, minus a set of exclusions.
///
/// A schema never looks at an instance, so one value can be shared by every object of a
/// type. Excluded properties stay in the mapping but are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
  name_mapping: BTreeMap<String, String>,
  excluded: BTreeSet<String>,
}

/// One effective property of a schema, bound to the type being coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyBinding<'a> {
  pub property: &'a str,
  pub encoded_name: &'a str,
}

impl Schema {
  /// Identity mapping for every property of `T`.
  pub fn for_type<T: Reflect>() -> Result<Self, IntrospectionError> {
    let descriptors = PropertyIntrospector::properties_of::<T>()?;
    Ok(Self::from_names(descriptors.iter().map(|d| d.name)))
  }

  /// Every property of `T`, stored under its shortest unique prefix.
  pub fn minimized_for_type<T: Reflect>() -> Result<Self, IntrospectionError> {
    let descriptors = PropertyIntrospector::properties_of::<T>()?;
    Ok(Self::from_mapping(NameMinimizer::minimize(
      descriptors.iter().map(|d| d.name),
    )))
  }

  /// Exactly the given properties, under the given encoded names.
  pub fn from_mapping<I, P, E>(mapping: I) -> Self
  where
    I: IntoIterator<Item = (P, E)>,
    P: Into<String>,
    E: Into<String>, {
    Self {
      name_mapping: mapping.into_iter().map(|(p, e)| (p.into(), e.into())).collect(),
      excluded: BTreeSet::new(),
    }
  }

  /// Exactly the given properties, each stored under its own name.
  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    Self::from_mapping(names.into_iter().map(|name| {
      let name = name.into();
      (name.clone(), name)
    }))
  }

  pub fn set_encoded_name(&mut self, encoded_name: impl Into<String>, property: impl Into<String>) {
    self.name_mapping.insert(property.into(), encoded_name.into());
  }

  pub fn remove_properties<I, S>(&mut self, names: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    self.excluded.extend(names.into_iter().map(Into::into));
  }

  pub fn encoded_name(&self, property: &str) -> Option<&str> {
    if self.is_excluded(property) {
      return None;
    }
    self.name_mapping.get(property).map(String::as_str)
  }

  pub fn is_excluded(&self, property: &str) -> bool {
    self.excluded.contains(property)
  }

  /// `(property, encoded name)` pairs that take part in coding.
  pub fn effective_entries(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .name_mapping
      .iter()
      .filter(|(property, _)| !self.excluded.contains(*property))
      .map(|(property, encoded)| (property.as_str(), encoded.as_str()))
  }

  pub fn len(&self) -> usize {
    self.effective_entries().count()
  }

  pub fn is_empty(&self) -> bool {
    self.effective_entries().next().is_none()
  }

  /// Checks the effective entries against a type's properties.
  ///
  /// Every entry must name a declared property, and no two entries may share an
  /// encoded name since encoded names become sink keys. `descriptors` must be sorted by
  /// name, as [`PropertyIntrospector`] returns them.
  pub fn bind<'a>(
    &'a self,
    type_ref: TypeRef,
    descriptors: &[PropertyDescriptor],
  ) -> Result<Vec<PropertyBinding<'a>>, SchemaContractError> {
    let mut claimed: BTreeMap<&str, &str> = BTreeMap::new();
    let mut bindings = Vec::new();
    for (property, encoded_name) in self.effective_entries() {
      if descriptors.binary_search_by(|d| d.name.cmp(property)).is_err() {
        return Err(SchemaContractError::UnknownProperty {
          type_name: type_ref.type_name(),
          property: property.to_string(),
        });
      }
      if let Some(first) = claimed.insert(encoded_name, property) {
        return Err(SchemaContractError::DuplicateEncodedName {
          encoded_name: encoded_name.to_string(),
          first: first.to_string(),
          second: property.to_string(),
        });
      }
      bindings.push(PropertyBinding {
        property,
        encoded_name,
      });
    }
    Ok(bindings)
  }
}
