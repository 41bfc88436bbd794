//! Command-line interface.
//!
//! - `init`: write a default configuration file
//! - `start`: boot the server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, start};
pub use errors::{CliError, CliResult};
