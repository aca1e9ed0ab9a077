//! sawit-cli library
//!
//! Command parsing, dispatch and output for the `sawit` binary.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod dashboard;
pub(crate) mod defaults;
pub(crate) mod error;
pub(crate) mod harvest_commands;
pub(crate) mod identity_commands;
pub(crate) mod logger;
pub(crate) mod payroll_commands;
pub(crate) mod plantation_commands;
pub(crate) mod shipment_commands;

#[cfg(test)]
mod tests;

pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
