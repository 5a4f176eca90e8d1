//! Remote-object representation of coded objects.
//!
//! A [`RemoteObject`] is a class-name tagged dictionary as kept by a hosted object store.
//! [`RemoteObjectBridge`] converts coded objects to and from it, refusing objects whose
//! class name does not match.

mod remote_error;
mod remote_object;
mod remote_object_bridge;

pub use self::{remote_error::*, remote_object::*, remote_object_bridge::*};
