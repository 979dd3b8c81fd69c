//! Brisk command-line driver.
//!
//! The `brisk` binary is a thin wrapper over [`commands::dispatch`], which
//! writes to caller-supplied streams so commands can be tested in memory.

pub mod commands;
mod error;
pub mod tracing_setup;

pub use error::CliError;
