use crate::engine::KeyValueSink;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// An ordered string-keyed mapping of [`Value`]s.
///
/// Serializes to and from a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
  entries: BTreeMap<String, Value>,
}

impl Dictionary {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.entries.get(key)
  }

  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
    self.entries.insert(key.into(), value.into())
  }

  pub fn remove(&mut self, key: &str) -> Option<Value> {
    self.entries.remove(key)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }
}

impl KeyValueSink for Dictionary {
  fn get(&self, key: &str) -> Option<Value> {
    self.entries.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: Value) {
    self.entries.insert(key.to_string(), value);
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}

impl IntoIterator for Dictionary {
  type Item = (String, Value);
  type IntoIter = btree_map::IntoIter<String, Value>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl<'a> IntoIterator for &'a Dictionary {
  type Item = (&'a String, &'a Value);
  type IntoIter = btree_map::Iter<'a, String, Value>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}
