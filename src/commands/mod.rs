//! Command dispatch.

pub mod weigh;

use crate::cli::Cli;
use crate::config::WeightConfig;
use crate::context::ServiceContext;

/// Run a weighing for the parsed arguments against the live system,
/// printing the report on stdout.
///
/// # Errors
///
/// Returns an error string if the build, the scan or rendering fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = WeightConfig::from_cli(cli);
    let ctx = ServiceContext::live();
    let stdout = std::io::stdout();

    weigh::run_with_context(&ctx, &config, stdout.lock()).map_err(|err| err.to_string())
}
