use crate::{AutoEncoded, EngineError, IntrospectionError, Reflect, Schema, Value};
use std::env;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
  env::set_var("RUST_LOG", "autocodable_core_rs=trace");
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();
}

#[derive(Debug, Clone, Default, PartialEq, AutoEncoded)]
pub struct Player {
  pub name: String,
  pub score: i64,
  pub size: i32,
  pub size_limit: Option<u32>,
  pub ratio: f64,
  pub active: bool,
  pub avatar: Vec<u8>,
}

impl Player {
  pub fn sample() -> Self {
    Self {
      name: "ada".to_string(),
      score: 9001,
      size: -4,
      size_limit: Some(12),
      ratio: 0.25,
      active: true,
      avatar: vec![0xde, 0xad],
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct Animal {
  pub name: String,
  pub legs: u8,
  pub sound: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, AutoEncoded)]
pub struct Dog {
  #[autocodable(parent)]
  pub animal: Animal,
  pub breed: String,
  pub sound: String,
  #[autocodable(skip)]
  pub treats_given: u32,
}

/// Keeps its token out of every pass unless the user asked to be remembered.
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct Session {
  pub user: String,
  pub token: String,
  pub remember: bool,
}

impl AutoEncoded for Session {
  fn prepare_schema(&self, mut schema: Arc<Schema>) -> Arc<Schema> {
    if !self.remember {
      Arc::make_mut(&mut schema).remove_properties(["token"]);
    }
    schema
  }
}

#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct LegacyNote {
  pub title: String,
  pub body: String,
  pub draft: bool,
}

impl AutoEncoded for LegacyNote {
  fn excluded_property_names() -> Vec<String> {
    vec!["draft".to_string()]
  }
}

#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct Stats {
  pub score: i64,
  pub size: i32,
  pub size_limit: i32,
}

impl AutoEncoded for Stats {
  fn schema_for_class() -> Result<Schema, IntrospectionError> {
    Schema::minimized_for_type::<Self>()
  }
}

/// Stores its unit upper-cased and reads it back lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct Measurement {
  pub unit: String,
  pub amount: f64,
}

impl AutoEncoded for Measurement {
  fn value_to_encode(&self, property: &str) -> Result<Value, EngineError> {
    match property {
      "unit" => Ok(Value::String(self.unit.to_uppercase())),
      other => self.read_property(other),
    }
  }

  fn apply_decoded_value(&mut self, property: &str, value: Value) -> Result<(), EngineError> {
    match (property, value) {
      ("unit", Value::String(unit)) => {
        self.unit = unit.to_lowercase();
        Ok(())
      }
      (other, value) => self.write_property(other, value),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, AutoEncoded)]
pub struct Badge {
  #[autocodable(read_only)]
  pub id: i64,
  pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, AutoEncoded)]
pub struct Empty {}

/// Formerly `Account`; keeps reading archives written under that name.
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct Ledger {
  pub id: u64,
  pub entries: usize,
  pub drift: isize,
  pub currency: char,
}

impl AutoEncoded for Ledger {
  fn archive_class_name() -> &'static str {
    "Account"
  }
}
