//! The per-dependency record produced by the scanner.

use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use serde::Serialize;

/// One `packagefile` line of an `importcfg`, with the artifact's size.
///
/// `dir_name` and `size_human` are derived from `path` and `size` at
/// construction and can never disagree with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleEntry {
    path: String,
    #[serde(rename = "dirName")]
    dir_name: String,
    name: String,
    size: u64,
    size_human: String,
}

impl ModuleEntry {
    /// Creates an entry for package `name` compiled to `path`.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let dir_name = dir_name(&path);
        Self { path, dir_name, name: name.into(), size, size_human: human_size(size) }
    }

    /// Artifact path as reported by the build tool.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Directory holding the artifact.
    #[must_use]
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    /// Package import path.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Artifact size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Artifact size in SI units, e.g. `1.2 MB`.
    #[must_use]
    pub fn size_human(&self) -> &str {
        &self.size_human
    }
}

/// Renders a byte count with SI units.
#[must_use]
pub fn human_size(bytes: u64) -> String {
    ByteSize(bytes).display().si().to_string()
}

/// `path` with repeated separators and `.` segments collapsed, so that
/// directories reported by the build tool and found on disk compare equal.
#[must_use]
pub fn normalized(path: &Path) -> String {
    path.components().collect::<PathBuf>().to_string_lossy().into_owned()
}

fn dir_name(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => normalized(parent),
        Some(_) => ".".to_string(),
        None => path.to_string(),
    }
}
