//! Dynamic values exchanged between objects and sinks.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A property value as seen by a sink.
///
/// | Variant  | Rust types |
/// |----------|------------|
/// | `Null`   | `Option::None` |
/// | `Bool`   | `bool` |
/// | `Int`    | `i8`..`i64`, `u8`..`u64`, `isize`, `usize` |
/// | `Float`  | `f32`, `f64` |
/// | `String` | `String`, `char` |
/// | `Bytes`  | `Vec<u8>` |
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
  #[default]
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  String(String),
  Bytes(Vec<u8>),
}

impl Value {
  pub fn kind(&self) -> ValueKind {
    match self {
      Value::Null => ValueKind::Null,
      Value::Bool(_) => ValueKind::Bool,
      Value::Int(_) => ValueKind::Int,
      Value::Float(_) => ValueKind::Float,
      Value::String(_) => ValueKind::String,
      Value::Bytes(_) => ValueKind::Bytes,
    }
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Value::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      Value::Int(i) => Some(*i),
      _ => None,
    }
  }

  pub fn as_float(&self) -> Option<f64> {
    match self {
      Value::Float(f) => Some(*f),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_bytes(&self) -> Option<&[u8]> {
    match self {
      Value::Bytes(b) => Some(b),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
  Null,
  Bool,
  Int,
  Float,
  String,
  Bytes,
}

impl Display for ValueKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      ValueKind::Null => "null",
      ValueKind::Bool => "bool",
      ValueKind::Int => "int",
      ValueKind::Float => "float",
      ValueKind::String => "string",
      ValueKind::Bytes => "bytes",
    };
    f.write_str(name)
  }
}

/// Raised when a [`Value`] cannot be taken as the requested Rust type.
///
/// `expected` is the Rust type name, `found` describes what the value held.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ValueTypeError {
  pub expected: &'static str,
  pub found: String,
}

impl ValueTypeError {
  pub fn new<T>(found: impl Into<String>) -> Self {
    Self {
      expected: std::any::type_name::<T>(),
      found: found.into(),
    }
  }

  fn of<T>(value: &Value) -> Self {
    Self::new::<T>(value.kind().to_string())
  }
}

/// Reads a property into a [`Value`].
///
/// Fails only for integers that do not fit in an `i64`.
pub trait ToValue {
  fn to_value(&self) -> Result<Value, ValueTypeError>;
}

/// Builds a property from a [`Value`] without coercing across variants.
pub trait FromValue: Sized {
  fn from_value(value: Value) -> Result<Self, ValueTypeError>;
}

impl ToValue for Value {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    Ok(self.clone())
  }
}

impl FromValue for Value {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    Ok(value)
  }
}

impl ToValue for bool {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    Ok(Value::Bool(*self))
  }
}

impl FromValue for bool {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    match value {
      Value::Bool(b) => Ok(b),
      other => Err(ValueTypeError::of::<bool>(&other)),
    }
  }
}

macro_rules! int_value {
  ($($t:ty),*) => {
    $(
      impl ToValue for $t {
        fn to_value(&self) -> Result<Value, ValueTypeError> {
          i64::try_from(*self)
            .map(Value::Int)
            .map_err(|_| ValueTypeError::new::<i64>(format!("{} {} out of range", stringify!($t), self)))
        }
      }

      impl FromValue for $t {
        fn from_value(value: Value) -> Result<Self, ValueTypeError> {
          match value {
            Value::Int(i) => <$t>::try_from(i).map_err(|_| ValueTypeError::new::<$t>(format!("int {i} out of range"))),
            other => Err(ValueTypeError::of::<$t>(&other)),
          }
        }
      }
    )*
  };
}

int_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToValue for f64 {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    Ok(Value::Float(*self))
  }
}

impl FromValue for f64 {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    match value {
      Value::Float(f) => Ok(f),
      other => Err(ValueTypeError::of::<f64>(&other)),
    }
  }
}

impl ToValue for f32 {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    Ok(Value::Float(f64::from(*self)))
  }
}

impl FromValue for f32 {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    match value {
      Value::Float(f) => {
        let narrowed = f as f32;
        if f.is_finite() && narrowed.is_infinite() {
          return Err(ValueTypeError::new::<f32>(format!("float {f} out of range")));
        }
        if f.is_finite() && f64::from(narrowed) != f {
          return Err(ValueTypeError::new::<f32>(format!("float {f} not representable")));
        }
        Ok(narrowed)
      }
      other => Err(ValueTypeError::of::<f32>(&other)),
    }
  }
}

impl ToValue for char {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    Ok(Value::String(self.to_string()))
  }
}

impl FromValue for char {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    match value {
      Value::String(s) => {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
          (Some(c), None) => Ok(c),
          _ => Err(ValueTypeError::new::<char>(format!("string of {} chars", s.chars().count()))),
        }
      }
      other => Err(ValueTypeError::of::<char>(&other)),
    }
  }
}

impl ToValue for String {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    Ok(Value::String(self.clone()))
  }
}

impl FromValue for String {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    match value {
      Value::String(s) => Ok(s),
      other => Err(ValueTypeError::of::<String>(&other)),
    }
  }
}

impl ToValue for Vec<u8> {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    Ok(Value::Bytes(self.clone()))
  }
}

impl FromValue for Vec<u8> {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    match value {
      Value::Bytes(b) => Ok(b),
      other => Err(ValueTypeError::of::<Vec<u8>>(&other)),
    }
  }
}

impl<T: ToValue> ToValue for Option<T> {
  fn to_value(&self) -> Result<Value, ValueTypeError> {
    self.as_ref().map_or(Ok(Value::Null), ToValue::to_value)
  }
}

impl<T: FromValue> FromValue for Option<T> {
  fn from_value(value: Value) -> Result<Self, ValueTypeError> {
    match value {
      Value::Null => Ok(None),
      other => T::from_value(other).map(Some),
    }
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::String(value.to_string())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::String(value)
  }
}

impl From<i64> for Value {
  fn from(value: i64) -> Self {
    Value::Int(value)
  }
}

impl From<i32> for Value {
  fn from(value: i32) -> Self {
    Value::Int(i64::from(value))
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Self {
    Value::Float(value)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Value::Bool(value)
  }
}

impl From<Vec<u8>> for Value {
  fn from(value: Vec<u8>) -> Self {
    Value::Bytes(value)
  }
}
