use crate::error::EngineError;
use crate::introspect::TypeInfo;
use crate::value::Value;

/// Property-level access to a type, normally produced by `#[derive(Reflect)]`.
///
/// Manual implementations must keep `type_info` and the accessors in agreement: every
/// read-write declaration in the chain has to be readable and assignable by name.
pub trait Reflect: 'static {
  fn type_info() -> TypeInfo
  where
    Self: Sized;

  fn read_property(&self, name: &str) -> Result<Value, EngineError>;

  fn write_property(&mut self, name: &str, value: Value) -> Result<(), EngineError>;
}
