//! Command-line argument parsing.

use crate::config::{ENV_CATALOG_DELAY, ENV_DETAIL_DELAY, ENV_LOG_FILE, ENV_NO_MOUSE, ENV_TICK};
use crate::logging::ENV_LOG;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments. The first flag that means something wins;
/// anything unrecognized falls through to the TUI.
///
/// ```
/// use hatstore::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hatstore".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

/// Usage text for `--help`.
pub fn help_text() -> String {
    format!(
        "\
hatstore - a tiny terminal hat shop

USAGE:
    hatstore [--version | -V | --help | -h]

KEYS:
    up/down, j/k, home/end   move the highlight
    enter or click           open an item
    esc, c or [ Close ]      close the item (clicking outside works too)
    q                        quit (closes an open item first)
    ctrl+c                   quit

ENVIRONMENT:
    {ENV_CATALOG_DELAY:<27}item list load delay (default 2000)
    {ENV_DETAIL_DELAY:<27}item detail load delay (default 2000)
    {ENV_TICK:<27}event loop tick (default 16)
    {ENV_LOG_FILE:<27}log file path
    {ENV_NO_MOUSE:<27}set to disable mouse capture
    {ENV_LOG:<27}log filter (falls back to RUST_LOG, then info)"
    )
}
