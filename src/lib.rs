//! Shared library for `gradebook`
//! Contains the core grade-tracking domain and the engine boundary used by the CLI

pub mod core;
pub mod logger;

pub use self::core::config;

/// Returns the current version of the `gradebook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
