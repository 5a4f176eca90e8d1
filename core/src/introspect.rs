//! Discovery of the properties a type exposes to coding.

mod property_descriptor;
mod property_introspector;
mod reflect;
mod type_info;

pub use self::{property_descriptor::*, property_introspector::*, reflect::*, type_info::*};
