//! Line parser for Go `importcfg` files.
//!
//! ```text
//! # import config
//! packagefile errors=/tmp/go-build558891369/b005/_pkg_.a
//! packagefile fmt=/tmp/go-build558891369/b031/_pkg_.a
//! ```

const PACKAGEFILE_PREFIX: &str = "packagefile ";

/// A recognised `packagefile <name>=<path>` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageFile<'a> {
    /// Import path of the package.
    pub name: &'a str,
    /// Path of its compiled archive.
    pub path: &'a str,
}

/// Parses one line; anything other than a `packagefile` line with a
/// non-empty name and path yields `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<PackageFile<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (name, path) = line.strip_prefix(PACKAGEFILE_PREFIX)?.split_once('=')?;
    if name.is_empty() || path.is_empty() {
        return None;
    }
    Some(PackageFile { name, path })
}

/// Every recognised line of an `importcfg`, in file order.
pub fn package_files(contents: &str) -> impl Iterator<Item = PackageFile<'_>> {
    contents.lines().filter_map(parse_line)
}
