use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

/// External key/value store written by encode passes and read by decode passes.
pub trait KeyValueSink {
  fn get(&self, key: &str) -> Option<Value>;

  fn set(&mut self, key: &str, value: Value);
}

impl KeyValueSink for BTreeMap<String, Value> {
  fn get(&self, key: &str) -> Option<Value> {
    BTreeMap::get(self, key).cloned()
  }

  fn set(&mut self, key: &str, value: Value) {
    self.insert(key.to_string(), value);
  }
}

impl KeyValueSink for HashMap<String, Value> {
  fn get(&self, key: &str) -> Option<Value> {
    HashMap::get(self, key).cloned()
  }

  fn set(&mut self, key: &str, value: Value) {
    self.insert(key.to_string(), value);
  }
}
