//! Dependency scanner: turns a preserved work directory into per-package
//! dependency lists with artifact sizes.

pub mod entry;
pub mod importcfg;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::error::WeightError;
use crate::ports::FileSystem;

pub use entry::{normalized, ModuleEntry};
use importcfg::PackageFile;

/// Dependencies of every compiled unit, keyed by package name where it is
/// known and by the unit's work directory otherwise.
pub type DependencyMap = BTreeMap<String, Vec<ModuleEntry>>;

/// Scans a work directory for `importcfg` files.
pub struct Scanner<'a> {
    fs: &'a dyn FileSystem,
    config: &'a ScanConfig,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner reading through `fs`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, config: &'a ScanConfig) -> Self {
        Self { fs, config }
    }

    /// Builds the dependency map for everything compiled under `work`.
    ///
    /// Every metadata file found contributes one group, even if it lists no
    /// packages. Artifacts that cannot be stat'ed are counted as zero bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::DiscoveryFailed`] if the tree under `work`
    /// cannot be searched and [`WeightError::ReadFailed`] if a metadata file
    /// cannot be read.
    pub fn process(&self, work: &Path) -> Result<DependencyMap, WeightError> {
        let file_name = &self.config.metadata_file_name;
        let files = self.fs.find_files_named(work, file_name).map_err(|e| {
            WeightError::DiscoveryFailed {
                root: work.to_path_buf(),
                file_name: file_name.clone(),
                message: e.to_string(),
            }
        })?;
        info!(count = files.len(), work = %work.display(), "found metadata files");

        let mut groups = Vec::with_capacity(files.len());
        let mut resolved = HashMap::new();

        for file in &files {
            let contents = self.fs.read_to_string(file).map_err(|e| WeightError::ReadFailed {
                path: file.clone(),
                message: e.to_string(),
            })?;

            let entries: Vec<ModuleEntry> = importcfg::package_files(&contents)
                .map(|package| {
                    let entry = self.entry(package);
                    resolved.insert(entry.dir_name().to_string(), entry.name().to_string());
                    entry
                })
                .collect();

            let dir = normalized(file.parent().unwrap_or(work));
            debug!(%dir, deps = entries.len(), "parsed metadata file");
            groups.push((dir, entries));
        }

        Ok(rekey(groups, &resolved))
    }

    fn entry(&self, package: PackageFile<'_>) -> ModuleEntry {
        let size = self.fs.file_size(Path::new(package.path)).unwrap_or_else(|e| {
            debug!(path = package.path, error = %e, "cannot stat artifact, counting 0 bytes");
            0
        });
        ModuleEntry::new(package.name, package.path, size)
    }
}

/// Files each group under the package name its directory was compiled as,
/// falling back to the directory itself.
///
/// Groups are applied in iteration order; when two directories resolve to
/// the same name the later one replaces the earlier.
#[must_use]
pub fn rekey(
    groups: impl IntoIterator<Item = (String, Vec<ModuleEntry>)>,
    resolved: &HashMap<String, String>,
) -> DependencyMap {
    let mut map = DependencyMap::new();
    for (dir, entries) in groups {
        let key = resolved.get(&dir).cloned().unwrap_or(dir);
        if map.insert(key.clone(), entries).is_some() {
            warn!(%key, "several work directories resolve to the same package, keeping the last");
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::ports::PortError;

    #[derive(Default)]
    struct MemoryFs {
        files: BTreeMap<PathBuf, String>,
        sizes: HashMap<PathBuf, u64>,
        unreadable: Vec<PathBuf>,
    }

    impl MemoryFs {
        fn file(mut self, path: &str, contents: &str) -> Self {
            self.files.insert(PathBuf::from(path), contents.to_string());
            self
        }

        fn artifact(mut self, path: &str, size: u64) -> Self {
            self.sizes.insert(PathBuf::from(path), size);
            self
        }
    }

    impl FileSystem for MemoryFs {
        fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
            if self.unreadable.iter().any(|p| p == path) {
                return Err("permission denied".into());
            }
            self.files.get(path).cloned().ok_or_else(|| "not found".into())
        }

        fn file_size(&self, path: &Path) -> Result<u64, PortError> {
            self.sizes.get(path).copied().ok_or_else(|| "not found".into())
        }

        fn find_files_named(&self, root: &Path, name: &str) -> Result<Vec<PathBuf>, PortError> {
            if !root.starts_with("/work") {
                return Err("no such directory".into());
            }
            Ok(self
                .files
                .keys()
                .filter(|p| p.starts_with(root) && p.file_name().is_some_and(|n| n == name))
                .cloned()
                .collect())
        }

        fn remove_file(&self, _path: &Path) -> Result<(), PortError> {
            unreachable!("scanner never removes files")
        }
    }

    fn scan(fs: &MemoryFs) -> Result<DependencyMap, WeightError> {
        Scanner::new(fs, &ScanConfig::default()).process(Path::new("/work"))
    }

    fn names(entries: &[ModuleEntry]) -> Vec<&str> {
        entries.iter().map(ModuleEntry::name).collect()
    }

    #[test]
    fn groups_by_metadata_dir_and_rekeys_by_package_name() {
        let fs = MemoryFs::default()
            .file(
                "/work/b001/importcfg",
                "# import config\npackagefile example.com/app/lib=/work/b002/_pkg_.a\npackagefile fmt=/work/b003/_pkg_.a\n",
            )
            .file("/work/b002/importcfg", "# import config\npackagefile fmt=/work/b003/_pkg_.a\n")
            .file("/work/b003/importcfg", "# import config\n")
            .artifact("/work/b002/_pkg_.a", 4_000)
            .artifact("/work/b003/_pkg_.a", 900_000);

        let map = scan(&fs).unwrap();

        assert_eq!(
            map.keys().map(String::as_str).collect::<Vec<_>>(),
            ["/work/b001", "example.com/app/lib", "fmt"]
        );
        assert_eq!(names(&map["/work/b001"]), ["example.com/app/lib", "fmt"]);
        assert_eq!(names(&map["example.com/app/lib"]), ["fmt"]);
        assert!(map["fmt"].is_empty());
        assert_eq!(map["/work/b001"][0].size(), 4_000);
        assert_eq!(map["/work/b001"][1].size(), 900_000);
        assert!(!map.contains_key("/work/b002"));
    }

    #[test]
    fn missing_artifact_counts_as_zero() {
        let fs = MemoryFs::default()
            .file("/work/b001/importcfg", "packagefile gone=/stale/b9/_pkg_.a\n");

        let map = scan(&fs).unwrap();

        let entry = &map["/work/b001"][0];
        assert_eq!(entry.size(), 0);
        assert_eq!(entry.size_human(), "0 B");
        assert_eq!(entry.name(), "gone");
        assert_eq!(entry.path(), "/stale/b9/_pkg_.a");
    }

    #[test]
    fn header_only_file_keeps_its_group() {
        let fs = MemoryFs::default().file("/work/b007/importcfg", "# import config\n");
        let map = scan(&fs).unwrap();

        assert_eq!(map.len(), 1);
        assert!(map["/work/b007"].is_empty());
    }

    #[test]
    fn collision_keeps_last_directory_in_discovery_order() {
        // b010 and b020 both claim to be "dup"; b020 sorts last.
        let fs = MemoryFs::default()
            .file(
                "/work/b001/importcfg",
                "packagefile dup=/work/b010/_pkg_.a\npackagefile dup=/work/b020/_pkg_.a\n",
            )
            .file("/work/b010/importcfg", "packagefile errors=/work/b030/_pkg_.a\n")
            .file("/work/b020/importcfg", "packagefile io=/work/b040/_pkg_.a\n");

        let map = scan(&fs).unwrap();

        assert_eq!(
            map.keys().map(String::as_str).collect::<Vec<_>>(),
            ["/work/b001", "dup"]
        );
        assert_eq!(names(&map["dup"]), ["io"]);
    }

    #[test]
    fn rekeys_artifact_paths_with_doubled_separators() {
        let fs = MemoryFs::default()
            .file("/work/b001/importcfg", "packagefile net=/work//b002/_pkg_.a\n")
            .file("/work/b002/importcfg", "packagefile errors=/work/./b003/_pkg_.a\n")
            .artifact("/work//b002/_pkg_.a", 7);

        let map = scan(&fs).unwrap();

        assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["/work/b001", "net"]);
        assert_eq!(map["/work/b001"][0].path(), "/work//b002/_pkg_.a");
        assert_eq!(map["/work/b001"][0].size(), 7);
        assert_eq!(names(&map["net"]), ["errors"]);
    }

    #[test]
    fn discovery_failure_is_fatal() {
        let err = Scanner::new(&MemoryFs::default(), &ScanConfig::default())
            .process(Path::new("/elsewhere"))
            .unwrap_err();
        assert!(matches!(err, WeightError::DiscoveryFailed { .. }));
    }

    #[test]
    fn unreadable_metadata_is_fatal() {
        let mut fs = MemoryFs::default().file("/work/b001/importcfg", "");
        fs.unreadable.push(PathBuf::from("/work/b001/importcfg"));

        let err = scan(&fs).unwrap_err();
        match err {
            WeightError::ReadFailed { path, .. } => {
                assert_eq!(path, PathBuf::from("/work/b001/importcfg"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn honours_configured_file_name() {
        let fs = MemoryFs::default()
            .file("/work/b001/importcfg", "packagefile fmt=/x/_pkg_.a\n")
            .file("/work/b001/importcfg.link", "packagefile main=/y/_pkg_.a\n");
        let config = ScanConfig { metadata_file_name: "importcfg.link".to_string() };

        let map = Scanner::new(&fs, &config).process(Path::new("/work")).unwrap();
        assert_eq!(names(&map["/work/b001"]), ["main"]);
    }

    #[test]
    fn rekey_leaves_unresolved_directories() {
        let resolved = HashMap::from([("/w/b2".to_string(), "os".to_string())]);
        let groups = vec![
            ("/w/b1".to_string(), vec![ModuleEntry::new("os", "/w/b2/_pkg_.a", 1)]),
            ("/w/b2".to_string(), vec![]),
        ];

        let map = rekey(groups, &resolved);
        assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["/w/b1", "os"]);
    }

    #[test]
    fn scans_real_work_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let b1 = root.join("b1").join("_pkg_.a");
        let b2 = root.join("b2").join("_pkg_.a");
        std::fs::create_dir_all(b1.parent().unwrap()).unwrap();
        std::fs::create_dir_all(b2.parent().unwrap()).unwrap();
        std::fs::write(&b1, vec![0u8; 100]).unwrap();
        std::fs::write(&b2, vec![0u8; 250]).unwrap();

        let pkg_a = root.join("work").join("pkgA");
        std::fs::create_dir_all(&pkg_a).unwrap();
        std::fs::write(
            pkg_a.join("importcfg"),
            format!(
                "# import config\npackagefile fmt={}\npackagefile os={}",
                b1.display(),
                b2.display()
            ),
        )
        .unwrap();

        let work = root.join("work");
        let map =
            Scanner::new(&LiveFileSystem, &ScanConfig::default()).process(&work).unwrap();

        assert_eq!(map.len(), 1);
        let entries = &map[&pkg_a.to_string_lossy().into_owned()];
        assert_eq!(names(entries), ["fmt", "os"]);
        assert_eq!(entries[0].size(), 100);
        assert_eq!(entries[1].size(), 250);
        assert_eq!(entries[0].dir_name(), root.join("b1").to_string_lossy());
    }
}
