//! Command runner port for invoking the external build tool.

use std::collections::BTreeMap;
use std::ffi::OsString;

use super::PortError;

/// The captured result of running an external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// The exit code of the process (`-1` when killed by a signal).
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns `true` when the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Standard error followed by standard output.
    ///
    /// The Go tool reports its diagnostics (including `WORK=`) on stderr, so
    /// stderr leads.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut combined = String::with_capacity(self.stderr.len() + self.stdout.len());
        combined.push_str(&self.stderr);
        combined.push_str(&self.stdout);
        combined
    }
}

/// Runs external programs to completion.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and exactly the environment in `env`,
    /// blocking until it exits. Variables are passed through byte for byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned. A program that
    /// runs and exits non-zero is not an error at this level.
    fn run(
        &self,
        program: &str,
        args: &[String],
        env: &BTreeMap<OsString, OsString>,
    ) -> Result<CommandOutput, PortError>;
}
