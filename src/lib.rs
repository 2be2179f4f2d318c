//! Core library entry for the `goweight` CLI.
//!
//! A run rebuilds the target with `go build -work -a`, reads every
//! `importcfg` the compiler left in its work directory, and reports the
//! on-disk size of each compiled package per dependent.

pub mod adapters;
pub mod build;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod report;
pub mod scan;

pub use error::WeightError;
pub use scan::{DependencyMap, ModuleEntry};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the weighing fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.debug);
    commands::dispatch(&cli)
}
