//! Property-to-key mappings and their process-wide registry.

mod name_minimizer;
#[cfg(test)]
mod name_minimizer_test;
#[allow(clippy::module_inception)]
mod schema;
#[cfg(test)]
mod schema_test;
mod schema_registry;

pub use self::{name_minimizer::*, schema::*, schema_registry::*};
