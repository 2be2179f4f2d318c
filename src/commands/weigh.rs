//! Build, scan, report.

use std::io::Write;

use crate::build::BuildTrigger;
use crate::config::WeightConfig;
use crate::context::ServiceContext;
use crate::error::WeightError;
use crate::report::{render_json, render_text, Report};
use crate::scan::Scanner;

/// Runs one full weighing with the given context and writes the report.
///
/// Nothing is written unless the build and the scan both succeed.
///
/// # Errors
///
/// Returns the first fatal [`WeightError`] encountered.
pub fn run_with_context(
    ctx: &ServiceContext,
    config: &WeightConfig,
    out: impl Write,
) -> Result<(), WeightError> {
    let work = BuildTrigger::new(ctx.runner.as_ref(), ctx.fs.as_ref(), &config.build)
        .build_current()?;
    let modules = Scanner::new(ctx.fs.as_ref(), &config.scan).process(&work)?;
    let report = Report::new(modules);

    if config.json {
        render_json(&report, out)
    } else {
        render_text(&report, out)
    }
}
