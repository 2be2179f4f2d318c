//! Live filesystem adapter using `std::fs` and `glob`.

use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;
use crate::ports::PortError;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn file_size(&self, path: &Path) -> Result<u64, PortError> {
        Ok(std::fs::metadata(path)?.len())
    }

    fn find_files_named(&self, root: &Path, name: &str) -> Result<Vec<PathBuf>, PortError> {
        if !root.is_dir() {
            return Err(format!("{} is not a directory", root.display()).into());
        }
        let root_str = root
            .to_str()
            .ok_or_else(|| format!("{} is not valid UTF-8", root.display()))?;

        let pattern = format!(
            "{}/**/{}",
            glob::Pattern::escape(root_str.trim_end_matches('/')),
            glob::Pattern::escape(name)
        );

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn remove_file(&self, path: &Path) -> Result<(), PortError> {
        Ok(std::fs::remove_file(path)?)
    }
}
