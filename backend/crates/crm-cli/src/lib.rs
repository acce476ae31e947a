//! crm-cli library
//!
//! Command definitions and the runner, exported for the `crm` binary and tests.

pub(crate) mod board_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod lead_commands;
pub mod logger;
pub(crate) mod runner;


pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runner::{apply_overrides, run};
