use std::any::TypeId;
use std::fmt::{Display, Formatter};

/// Identity of a Rust type, usable as a cache key and as a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
  type_id: TypeId,
  type_name: &'static str,
}

impl TypeRef {
  pub fn of<T: ?Sized + 'static>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: std::any::type_name::<T>(),
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// The last path segment of the type name, without generic arguments.
  pub fn simple_name(&self) -> &'static str {
    let without_generics = self.type_name.split('<').next().unwrap_or(self.type_name);
    without_generics.rsplit("::").next().unwrap_or(without_generics)
  }
}

impl Display for TypeRef {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.type_name)
  }
}

/// A property as declared by one type, before the ancestor chain is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDeclaration {
  pub name: &'static str,
  pub readable: bool,
  pub writable: bool,
}

impl PropertyDeclaration {
  pub const fn new(name: &'static str, readable: bool, writable: bool) -> Self {
    Self {
      name,
      readable,
      writable,
    }
  }

  pub const fn read_write(name: &'static str) -> Self {
    Self::new(name, true, true)
  }

  pub const fn read_only(name: &'static str) -> Self {
    Self::new(name, true, false)
  }
}

/// Static description of a type: its own declared properties and its parent, if any.
///
/// A type without a parent ends the ancestor chain.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
  pub type_ref: TypeRef,
  pub declared: &'static [PropertyDeclaration],
  pub parent: Option<fn() -> TypeInfo>,
}

impl TypeInfo {
  pub fn new(type_ref: TypeRef, declared: &'static [PropertyDeclaration], parent: Option<fn() -> TypeInfo>) -> Self {
    Self {
      type_ref,
      declared,
      parent,
    }
  }

  pub fn parent_info(&self) -> Option<TypeInfo> {
    self.parent.map(|parent| parent())
  }
}
