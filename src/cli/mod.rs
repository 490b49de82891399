//! Command-line interface for cover-scout.
//!
//! This module provides CLI commands for resolving artwork, searching
//! provider catalogs, and maintaining the local caches.

mod commands;

pub use commands::{Cli, Commands, run_command};
