use crate::archive::archive_entry::Kind;
use crate::archive::{ArchiveConfig, ArchiveEntry, ArchivePayload};
use crate::engine::KeyValueSink;
use crate::error::ArchiveError;
use crate::value::Value;
use prost::Message;
use std::collections::BTreeMap;

/// Key/value sink tagged with the class name of the archived object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedArchive {
  class_name: String,
  values: BTreeMap<String, Value>,
}

impl KeyedArchive {
  pub fn new(class_name: impl Into<String>) -> Self {
    Self {
      class_name: class_name.into(),
      values: BTreeMap::new(),
    }
  }

  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  pub fn values(&self) -> &BTreeMap<String, Value> {
    &self.values
  }

  pub fn to_bytes(&self) -> Vec<u8> {
    let payload = ArchivePayload {
      class_name: self.class_name.clone(),
      entries: self
        .values
        .iter()
        .map(|(key, value)| ArchiveEntry {
          key: key.clone(),
          kind: Self::kind_of(value),
        })
        .collect(),
    };
    payload.encode_to_vec()
  }

  pub fn from_bytes(bytes: &[u8], config: &ArchiveConfig) -> Result<Self, ArchiveError> {
    config.check_payload_size(bytes.len())?;
    let payload = ArchivePayload::decode(bytes)?;
    let values = payload
      .entries
      .into_iter()
      .map(|entry| (entry.key, Self::value_of(entry.kind)))
      .collect();
    Ok(Self {
      class_name: payload.class_name,
      values,
    })
  }

  fn kind_of(value: &Value) -> Option<Kind> {
    match value {
      Value::Null => None,
      Value::Bool(b) => Some(Kind::BoolValue(*b)),
      Value::Int(i) => Some(Kind::IntValue(*i)),
      Value::Float(f) => Some(Kind::FloatValue(*f)),
      Value::String(s) => Some(Kind::StringValue(s.clone())),
      Value::Bytes(b) => Some(Kind::BytesValue(b.clone())),
    }
  }

  fn value_of(kind: Option<Kind>) -> Value {
    match kind {
      None => Value::Null,
      Some(Kind::BoolValue(b)) => Value::Bool(b),
      Some(Kind::IntValue(i)) => Value::Int(i),
      Some(Kind::FloatValue(f)) => Value::Float(f),
      Some(Kind::StringValue(s)) => Value::String(s),
      Some(Kind::BytesValue(b)) => Value::Bytes(b),
    }
  }
}

impl KeyValueSink for KeyedArchive {
  fn get(&self, key: &str) -> Option<Value> {
    self.values.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: Value) {
    self.values.insert(key.to_string(), value);
  }
}
