//! Generic ordered key/value mapping and its bridge to coded objects.

#[allow(clippy::module_inception)]
mod dictionary;
mod dictionary_bridge;

pub use self::{dictionary::*, dictionary_bridge::*};
