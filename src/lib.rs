//! Shared library for `GpaCalc`
//! Contains core functionality used by the CLI and library consumers

pub mod core;
pub mod logger;

pub use core::config;
