//! Error kinds for a weighing run.

use std::path::PathBuf;

/// Every fatal condition a run can hit.
///
/// Tolerated conditions (unrecognised `importcfg` lines, artifacts that
/// cannot be stat'ed) never surface here.
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    /// The build program could not be started at all.
    #[error("failed to start `{command}`: {message}")]
    BuildSpawn {
        /// The full command line.
        command: String,
        /// The underlying spawn error.
        message: String,
    },

    /// The build ran and exited unsuccessfully.
    #[error("`{command}` failed with exit code {exit_code}\n{output}")]
    BuildFailed {
        /// The full command line.
        command: String,
        /// Exit code reported by the process.
        exit_code: i32,
        /// Combined stderr/stdout of the build.
        output: String,
    },

    /// The build output did not start with the expected `KEY=VALUE` line.
    #[error("could not find the work directory in the build output: {reason}\n{output}")]
    ParseFailed {
        /// What was wrong with the first line.
        reason: String,
        /// The output that was parsed.
        output: String,
    },

    /// The work directory tree could not be enumerated.
    #[error("failed to search {} for {file_name} files: {message}", .root.display())]
    DiscoveryFailed {
        /// The directory being searched.
        root: PathBuf,
        /// The metadata file name being searched for.
        file_name: String,
        /// The underlying error.
        message: String,
    },

    /// A discovered metadata file could not be read.
    #[error("failed to read {}: {message}", .path.display())]
    ReadFailed {
        /// The metadata file.
        path: PathBuf,
        /// The underlying error.
        message: String,
    },

    /// The report could not be serialized or written.
    #[error("failed to render report: {0}")]
    Render(String),
}
