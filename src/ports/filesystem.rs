//! Filesystem port for the reads, stats and cleanup the weighing needs.

use std::path::{Path, PathBuf};

use super::PortError;

/// Provides the filesystem access used by the build trigger and the scanner.
///
/// Abstracting the filesystem lets the scanner run against an in-memory
/// tree in tests.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Returns the size in bytes of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be stat'ed.
    fn file_size(&self, path: &Path) -> Result<u64, PortError>;

    /// Recursively finds every file named exactly `name` under `root`,
    /// `root` itself included, in sorted order.
    ///
    /// # Errors
    ///
    /// Returns an error if any part of the tree cannot be enumerated.
    fn find_files_named(&self, root: &Path, name: &str) -> Result<Vec<PathBuf>, PortError>;

    /// Removes a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), PortError>;
}
