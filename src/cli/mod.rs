//! CLI module
//!
//! Argument parsing, configuration loading, and command dispatch. All
//! boot logic lives here; `main.rs` only reports errors.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::Config;
pub use errors::{CliError, CliResult};

/// Parse command line arguments and run the selected command.
pub fn run() -> CliResult<()> {
    commands::run()
}
