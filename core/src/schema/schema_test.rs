#[cfg(test)]
mod tests {
  use crate::error::SchemaContractError;
  use crate::introspect::{PropertyIntrospector, TypeRef};
  use crate::schema::{PropertyBinding, Schema, SchemaPurpose, SchemaRegistry};
  use crate::test_support::{init_tracing, LegacyNote, Player, Stats};
  use std::sync::Arc;

  fn entries(schema: &Schema) -> Vec<(&str, &str)> {
    schema.effective_entries().collect()
  }

  #[test]
  fn test_full_schema_is_identity() {
    init_tracing();
    let schema = Schema::for_type::<Player>().unwrap();
    assert_eq!(schema.len(), 7);
    assert!(schema.effective_entries().all(|(p, e)| p == e));
  }

  #[test]
  fn test_minimized_schema_uses_shortest_prefixes() {
    let schema = Schema::minimized_for_type::<Stats>().unwrap();
    assert_eq!(
      entries(&schema),
      vec![("score", "s"), ("size", "si"), ("size_limit", "siz")]
    );
  }

  #[test]
  fn test_from_mapping_keeps_only_listed_properties() {
    let schema = Schema::from_mapping([("name", "n"), ("score", "pts")]);
    assert_eq!(entries(&schema), vec![("name", "n"), ("score", "pts")]);
    assert_eq!(schema.encoded_name("size"), None);
  }

  #[test]
  fn test_from_names_is_identity_named() {
    let schema = Schema::from_names(["size", "name"]);
    assert_eq!(entries(&schema), vec![("name", "name"), ("size", "size")]);
  }

  #[test]
  fn test_set_encoded_name_last_write_wins() {
    let mut schema = Schema::from_names(["name"]);
    schema.set_encoded_name("a", "name");
    schema.set_encoded_name("b", "name");
    schema.set_encoded_name("s", "score");
    assert_eq!(entries(&schema), vec![("name", "b"), ("score", "s")]);
  }

  #[test]
  fn test_remove_properties_is_idempotent() {
    let mut once = Schema::from_names(["x", "y"]);
    once.remove_properties(["x"]);
    let mut twice = once.clone();
    twice.remove_properties(["x"]);
    assert_eq!(once, twice);
    assert_eq!(entries(&twice), vec![("y", "y")]);
  }

  #[test]
  fn test_exclusion_wins_over_later_mapping() {
    let mut schema = Schema::from_names(["x"]);
    schema.remove_properties(["x"]);
    schema.set_encoded_name("renamed", "x");
    assert!(schema.is_excluded("x"));
    assert_eq!(schema.encoded_name("x"), None);
    assert!(schema.is_empty());
  }

  #[test]
  fn test_bind_rejects_unknown_property() {
    let descriptors = PropertyIntrospector::properties_of::<Player>().unwrap();
    let schema = Schema::from_names(["name", "nickname"]);
    let err = schema.bind(TypeRef::of::<Player>(), &descriptors).unwrap_err();
    assert_eq!(
      err,
      SchemaContractError::UnknownProperty {
        type_name: std::any::type_name::<Player>(),
        property: "nickname".to_string(),
      }
    );
  }

  #[test]
  fn test_bind_rejects_shared_encoded_name() {
    let descriptors = PropertyIntrospector::properties_of::<Player>().unwrap();
    let schema = Schema::from_mapping([("name", "k"), ("score", "k")]);
    let err = schema.bind(TypeRef::of::<Player>(), &descriptors).unwrap_err();
    assert!(matches!(err, SchemaContractError::DuplicateEncodedName { encoded_name, .. } if encoded_name == "k"));
  }

  #[test]
  fn test_bind_ignores_excluded_duplicates() {
    let descriptors = PropertyIntrospector::properties_of::<Player>().unwrap();
    let mut schema = Schema::from_mapping([("name", "k"), ("score", "k")]);
    schema.remove_properties(["score"]);
    let bindings = schema.bind(TypeRef::of::<Player>(), &descriptors).unwrap();
    assert_eq!(
      bindings,
      vec![PropertyBinding {
        property: "name",
        encoded_name: "k"
      }]
    );
  }

  #[test]
  fn test_legacy_exclusion_list_feeds_class_schema() {
    let schema = SchemaRegistry::class_schema::<LegacyNote>().unwrap();
    assert_eq!(entries(&schema), vec![("body", "body"), ("title", "title")]);
    assert!(schema.is_excluded("draft"));
  }

  #[test]
  fn test_class_schema_is_memoized() {
    let first = SchemaRegistry::class_schema::<Stats>().unwrap();
    let second = SchemaRegistry::class_schema::<Stats>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    let registered = SchemaRegistry::get(TypeRef::of::<Stats>(), SchemaPurpose::CLASS).unwrap();
    assert!(Arc::ptr_eq(&first, &registered));
  }

  #[test]
  fn test_purposes_are_kept_apart() {
    let purpose = SchemaPurpose::new("schema-test");
    let custom =
      SchemaRegistry::get_or_compute(TypeRef::of::<Player>(), purpose, || Ok(Schema::from_names(["name"]))).unwrap();
    let class = SchemaRegistry::class_schema::<Player>().unwrap();
    assert_eq!(custom.len(), 1);
    assert_eq!(class.len(), 7);
  }
}
