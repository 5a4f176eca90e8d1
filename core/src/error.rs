use crate::value::ValueTypeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectionError {
  #[error("cannot determine storage of {type_name}.{property}: readable = {readable}, writable = {writable}")]
  UndeterminedStorage {
    type_name: &'static str,
    property: &'static str,
    readable: bool,
    writable: bool,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaContractError {
  #[error("schema names property `{property}` which {type_name} does not declare")]
  UnknownProperty { type_name: &'static str, property: String },
  #[error("encoded name `{encoded_name}` is used by both `{first}` and `{second}`")]
  DuplicateEncodedName {
    encoded_name: String,
    first: String,
    second: String,
  },
}

/// A decoded value did not fit the property it was assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type mismatch on {type_name}.{property}: {source}")]
pub struct TypeMismatchError {
  pub type_name: &'static str,
  pub property: String,
  #[source]
  pub source: ValueTypeError,
}

impl TypeMismatchError {
  pub fn new(type_name: &'static str, property: impl Into<String>, source: ValueTypeError) -> Self {
    Self {
      type_name,
      property: property.into(),
      source,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
  #[error("malformed archive: {0}")]
  Decode(String),
  #[error("archive holds {found}, expected {expected}")]
  ClassMismatch { expected: String, found: String },
  #[error("archive payload of {size} bytes exceeds the limit of {limit} bytes")]
  PayloadTooLarge { size: usize, limit: usize },
}

impl From<prost::DecodeError> for ArchiveError {
  fn from(err: prost::DecodeError) -> Self {
    ArchiveError::Decode(err.to_string())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
  #[error(transparent)]
  Introspection(#[from] IntrospectionError),
  #[error(transparent)]
  SchemaContract(#[from] SchemaContractError),
  #[error(transparent)]
  TypeMismatch(#[from] TypeMismatchError),
  #[error(transparent)]
  Archive(#[from] ArchiveError),
  #[error("{type_name} has no property `{property}`")]
  UnknownProperty { type_name: &'static str, property: String },
}

impl EngineError {
  pub fn unknown_property(type_name: &'static str, property: impl Into<String>) -> Self {
    EngineError::UnknownProperty {
      type_name,
      property: property.into(),
    }
  }
}

static_assertions::assert_impl_all!(EngineError: Send, Sync);
static_assertions::assert_impl_all!(IntrospectionError: Send, Sync);
