//! Extraction of the preserved work directory from build output.

use std::path::PathBuf;

use crate::error::WeightError;

/// Finds the work directory in the combined output of a `-work` build.
pub trait DiagnosticsParser: Send + Sync {
    /// Returns the work directory announced in `output`.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::ParseFailed`] when the output does not carry
    /// the expected announcement.
    fn work_dir(&self, output: &str) -> Result<PathBuf, WeightError>;
}

/// Expects the first non-blank line to be `KEY=VALUE` (`WORK=/tmp/go-build…`
/// for the Go tool) and returns `VALUE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLineParser;

impl DiagnosticsParser for FirstLineParser {
    fn work_dir(&self, output: &str) -> Result<PathBuf, WeightError> {
        let fail = |reason: &str| WeightError::ParseFailed {
            reason: reason.to_string(),
            output: output.to_string(),
        };

        let line = output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| fail("the build produced no output"))?;

        let (key, value) =
            line.split_once('=').ok_or_else(|| fail("first line is not KEY=VALUE"))?;
        let (key, value) = (key.trim(), value.trim());

        if key.is_empty() {
            return Err(fail("first line has an empty key"));
        }
        if value.is_empty() {
            return Err(fail("first line has an empty value"));
        }

        tracing::debug!(key, value, "work directory announced");
        Ok(PathBuf::from(value))
    }
}
