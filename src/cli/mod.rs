//! Command-line handling.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use hatstore::cli::{parse_args, run_cli_command};
//!
//! if let Some(result) = run_cli_command(parse_args(std::env::args())) {
//!     // A flag was handled; exit without starting the TUI
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{help_text, parse_args, CliCommand};
pub use version::{handle_version_command, version_string, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// Returns `None` for `RunTui`. `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", help_text());
            Some(Ok(()))
        }
        CliCommand::RunTui => None,
    }
}
