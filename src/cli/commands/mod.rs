//! CLI command handlers for `GpaCalc`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod import;
pub mod quick;
pub mod scale;
