//! Binary keyed archive used to persist coded objects.

mod archive_bridge;
mod archive_config;
mod archive_payload;
mod config_option;
mod keyed_archive;
#[cfg(test)]
mod tests;

pub use self::{archive_bridge::*, archive_config::*, archive_payload::*, config_option::*, keyed_archive::*};
