//! CLI command handlers for `gradebook`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod demo;
pub mod shell;
