//! Explicit configuration for the build trigger and the scanner.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::Cli;

/// Environment variable selecting the Go tool binary.
pub const GO_ENV_VAR: &str = "GOWEIGHT_GO";

/// Name of the throwaway binary the build writes.
pub const DISCARDED_BINARY: &str = "goweight-bin-target";

/// Name of the per-package metadata file emitted into the work directory.
pub const IMPORTCFG_FILE_NAME: &str = "importcfg";

/// How to invoke the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Program to execute (`go` unless overridden).
    pub program: String,
    /// Arguments passed to `program`, build tags and packages included.
    pub args: Vec<String>,
    /// Binary written by the build, removed once it finishes.
    pub output_binary: PathBuf,
    /// Variables merged over the inherited environment.
    pub env_overrides: BTreeMap<String, String>,
    /// Log the merged environment before running.
    pub debug: bool,
}

impl BuildConfig {
    /// `<program> build -o goweight-bin-target -work -a`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: ["build", "-o", DISCARDED_BINARY, "-work", "-a"]
                .into_iter()
                .map(String::from)
                .collect(),
            output_binary: PathBuf::from(DISCARDED_BINARY),
            env_overrides: BTreeMap::new(),
            debug: false,
        }
    }

    /// Default build config, honouring `GOWEIGHT_GO`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(GO_ENV_VAR).unwrap_or_else(|_| "go".to_string()))
    }

    /// Appends `-tags <tags>`.
    #[must_use]
    pub fn with_tags(mut self, tags: &str) -> Self {
        self.args.push("-tags".to_string());
        self.args.push(tags.to_string());
        self
    }

    /// Appends the package pattern to build.
    #[must_use]
    pub fn with_packages(mut self, packages: &str) -> Self {
        self.args.push(packages.to_string());
        self
    }

    /// The command line as a single printable string.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What the scanner looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// File name of the per-package metadata files.
    pub metadata_file_name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { metadata_file_name: IMPORTCFG_FILE_NAME.to_string() }
    }
}

/// Everything a run needs, derived from the command line.
#[derive(Debug, Clone)]
pub struct WeightConfig {
    /// Build trigger configuration.
    pub build: BuildConfig,
    /// Scanner configuration.
    pub scan: ScanConfig,
    /// Emit JSON instead of text.
    pub json: bool,
}

impl WeightConfig {
    /// Builds the run configuration from parsed arguments and the environment.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mut build = BuildConfig::from_env();
        if let Some(tags) = cli.tags.as_deref().filter(|t| !t.is_empty()) {
            build = build.with_tags(tags);
        }
        if let Some(packages) = cli.packages.as_deref().filter(|p| !p.is_empty()) {
            build = build.with_packages(packages);
        }
        build.env_overrides = cli.env.iter().cloned().collect();
        build.debug = cli.debug;

        Self { build, scan: ScanConfig::default(), json: cli.json }
    }
}
