use crate::RemoteError;
use autocodable_core_rs::{KeyValueSink, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CLASS_NAME_KEY: &str = "className";
pub const OBJECT_ID_KEY: &str = "objectId";

/// A class-name tagged bag of fields.
///
/// The JSON form puts `className` and `objectId` next to the fields, so no field may use
/// either name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObject {
  class_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  object_id: Option<String>,
  #[serde(flatten)]
  fields: BTreeMap<String, Value>,
}

impl RemoteObject {
  pub fn new(class_name: impl Into<String>) -> Self {
    Self {
      class_name: class_name.into(),
      object_id: None,
      fields: BTreeMap::new(),
    }
  }

  pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
    self.object_id = Some(object_id.into());
    self
  }

  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  pub fn object_id(&self) -> Option<&str> {
    self.object_id.as_deref()
  }

  pub fn set_object_id(&mut self, object_id: Option<String>) {
    self.object_id = object_id;
  }

  pub fn field(&self, key: &str) -> Option<&Value> {
    self.fields.get(key)
  }

  pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    self.fields.insert(key.into(), value.into());
  }

  pub fn fields(&self) -> &BTreeMap<String, Value> {
    &self.fields
  }

  pub fn to_json(&self) -> Result<String, RemoteError> {
    if let Some(key) = self
      .fields
      .keys()
      .find(|key| key.as_str() == CLASS_NAME_KEY || key.as_str() == OBJECT_ID_KEY)
    {
      return Err(RemoteError::ReservedKey(key.clone()));
    }
    Ok(serde_json::to_string(self)?)
  }

  pub fn from_json(json: &str) -> Result<Self, RemoteError> {
    Ok(serde_json::from_str(json)?)
  }
}

impl KeyValueSink for RemoteObject {
  fn get(&self, key: &str) -> Option<Value> {
    self.fields.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: Value) {
    self.fields.insert(key.to_string(), value);
  }
}
