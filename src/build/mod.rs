//! Build trigger: runs a full `-work` build and reports its work directory.

pub mod diagnostics;

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::error::WeightError;
use crate::ports::{CommandRunner, FileSystem};

pub use diagnostics::{DiagnosticsParser, FirstLineParser};

/// Runs the configured build once and hands back the preserved work
/// directory.
pub struct BuildTrigger<'a> {
    runner: &'a dyn CommandRunner,
    fs: &'a dyn FileSystem,
    config: &'a BuildConfig,
    parser: Box<dyn DiagnosticsParser + 'a>,
}

impl<'a> BuildTrigger<'a> {
    /// Creates a trigger using [`FirstLineParser`] for the build output.
    #[must_use]
    pub fn new(
        runner: &'a dyn CommandRunner,
        fs: &'a dyn FileSystem,
        config: &'a BuildConfig,
    ) -> Self {
        Self { runner, fs, config, parser: Box::new(FirstLineParser) }
    }

    /// Replaces the build output parser.
    #[must_use]
    pub fn with_parser(mut self, parser: impl DiagnosticsParser + 'a) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Runs the build and returns the work directory it preserved.
    ///
    /// The discarded output binary is removed as soon as the build succeeds,
    /// before its output is parsed.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::BuildSpawn`] or [`WeightError::BuildFailed`]
    /// when the build cannot run or fails, and [`WeightError::ParseFailed`]
    /// when its output does not announce a work directory.
    pub fn build_current(&self) -> Result<PathBuf, WeightError> {
        let env = merged_env(std::env::vars_os(), &self.config.env_overrides);
        let command = self.config.command_line();

        if self.config.debug {
            debug!(?env, "running with env");
        }
        info!(%command, "building");

        let output = self
            .runner
            .run(&self.config.program, &self.config.args, &env)
            .map_err(|e| WeightError::BuildSpawn {
                command: command.clone(),
                message: e.to_string(),
            })?;

        let combined = output.combined();
        if !output.success() {
            return Err(WeightError::BuildFailed {
                command,
                exit_code: output.exit_code,
                output: combined,
            });
        }

        if let Err(e) = self.fs.remove_file(&self.config.output_binary) {
            debug!(path = %self.config.output_binary.display(), error = %e, "build binary not removed");
        }

        let work = self.parser.work_dir(&combined)?;
        info!(work = %work.display(), "build finished");
        Ok(work)
    }
}

/// The inherited environment with `overrides` applied on top.
///
/// Inherited variables are kept as raw OS strings, so values that are not
/// valid UTF-8 reach the build unchanged.
#[must_use]
pub fn merged_env(
    inherited: impl IntoIterator<Item = (OsString, OsString)>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<OsString, OsString> {
    let mut env: BTreeMap<OsString, OsString> = inherited.into_iter().collect();
    env.extend(overrides.iter().map(|(k, v)| (OsString::from(k), OsString::from(v))));
    env
}
