//! Core module for common functionality across all targets

pub mod config;
pub mod extract;
pub mod gpa;
pub mod grades;
pub mod models;

/// Returns the current version of the `GpaCalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
