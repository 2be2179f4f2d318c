//! Service context bundling the port trait objects.

use crate::ports::command::CommandRunner;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects a run needs.
pub struct ServiceContext {
    /// Filesystem for discovery, reads, stats and cleanup.
    pub fs: Box<dyn FileSystem>,
    /// Runner for the build tool.
    pub runner: Box<dyn CommandRunner>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem and processes.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::command::LiveCommandRunner;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self { fs: Box::new(LiveFileSystem), runner: Box::new(LiveCommandRunner) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self { fs, runner }
    }
}
