use crate::introspect::TypeRef;

/// A property of a type after its ancestors have been merged in.
///
/// `owner_type` is the most derived type declaring the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
  pub name: &'static str,
  pub owner_type: TypeRef,
}

impl PropertyDescriptor {
  pub fn new(name: &'static str, owner_type: TypeRef) -> Self {
    Self { name, owner_type }
  }
}
