//! Source tree walking for compression.
//!
//! Produces, in listing order, one [`SourceEntry`] per file and one per
//! *empty* directory below the source. Non-empty directories are implied by
//! their children and never yield an entry of their own.

use crate::ArchiveError;
use crate::Result;
use crate::types::EntryPath;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A file or empty directory found below the compression source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Filesystem location of the entry.
    pub path: PathBuf,
    /// Path of the entry inside the archive.
    pub archive_path: EntryPath,
    /// `true` for an empty directory, `false` for a file.
    pub is_empty_dir: bool,
}

/// Walks a compression source.
///
/// Children are visited sorted by file name so archives are reproducible.
/// Symbolic links are followed; link cycles surface as I/O errors.
///
/// An archive written inside its own source is skipped when passed to
/// [`SourceWalker::excluding`], and does not count when deciding whether
/// its directory is empty.
///
/// # Examples
///
/// ```no_run
/// use svyio_core::creation::walker::SourceWalker;
/// use std::path::Path;
///
/// let walker = SourceWalker::new(Path::new("./project"));
/// for entry in walker.walk() {
///     let entry = entry?;
///     println!("would add: {}", entry.archive_path);
/// }
/// # Ok::<(), svyio_core::ArchiveError>(())
/// ```
pub struct SourceWalker<'a> {
    root: &'a Path,
    exclude: Option<&'a Path>,
}

impl<'a> SourceWalker<'a> {
    /// Creates a walker rooted at `root`, which may be a file or a directory.
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            exclude: None,
        }
    }

    /// Skips the file at `path`, which must be canonical.
    #[must_use]
    pub fn excluding(mut self, path: &'a Path) -> Self {
        self.exclude = Some(path);
        self
    }

    /// Returns an iterator over the archivable entries below the root.
    ///
    /// When the root is a file the iterator yields exactly that file, named
    /// by its base name. When the root is a directory, entry paths are
    /// relative to it. An empty root directory yields nothing.
    pub fn walk(&self) -> impl Iterator<Item = Result<SourceEntry>> + '_ {
        WalkDir::new(self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if self.is_excluded(entry.path()) => None,
                Ok(entry) => self.build_entry(&entry).transpose(),
                Err(e) => Some(Err(ArchiveError::from(e))),
            })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.is_some_and(|excluded| {
            path.file_name() == excluded.file_name()
                && fs::canonicalize(path).is_ok_and(|real| real == excluded)
        })
    }

    fn is_empty_dir(&self, path: &Path) -> Result<bool> {
        for child in fs::read_dir(path)? {
            if !self.is_excluded(&child?.path()) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn build_entry(&self, entry: &walkdir::DirEntry) -> Result<Option<SourceEntry>> {
        let path = entry.path();
        let is_root = entry.depth() == 0;

        if entry.file_type().is_dir() {
            if is_root || !self.is_empty_dir(path)? {
                return Ok(None);
            }
            return Ok(Some(SourceEntry {
                path: path.to_path_buf(),
                archive_path: self.relative_path(path)?,
                is_empty_dir: true,
            }));
        }

        let archive_path = if is_root {
            let name = path.file_name().ok_or_else(|| {
                ArchiveError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("source has no file name: {}", path.display()),
                ))
            })?;
            EntryPath::from_relative(Path::new(name))?
        } else {
            self.relative_path(path)?
        };

        Ok(Some(SourceEntry {
            path: path.to_path_buf(),
            archive_path,
            is_empty_dir: false,
        }))
    }

    fn relative_path(&self, path: &Path) -> Result<EntryPath> {
        let relative = path.strip_prefix(self.root).map_err(|_| {
            ArchiveError::Io(std::io::Error::other(format!(
                "path {} is not under source {}",
                path.display(),
                self.root.display()
            )))
        })?;
        EntryPath::from_relative(relative)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collect(walker: &SourceWalker<'_>) -> Result<Vec<SourceEntry>> {
        walker.walk().collect()
    }

    fn names(entries: &[SourceEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| {
                if e.is_empty_dir {
                    e.archive_path.directory_name()
                } else {
                    e.archive_path.to_string()
                }
            })
            .collect()
    }

    #[test]
    fn test_walk_single_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("report.txt");
        fs::write(&file, "data").unwrap();

        let entries = collect(&SourceWalker::new(&file)).unwrap();
        assert_eq!(names(&entries), vec!["report.txt"]);
        assert_eq!(entries[0].path, file);
    }

    #[test]
    fn test_walk_directory_relative_to_source() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("sub/b.txt"), "b").unwrap();
        fs::write(root.join("sub/deeper/c.txt"), "c").unwrap();

        let entries = collect(&SourceWalker::new(&root)).unwrap();
        assert_eq!(
            names(&entries),
            vec!["a.txt", "sub/b.txt", "sub/deeper/c.txt"]
        );
    }

    #[test]
    fn test_walk_only_empty_directories_yield_entries() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::create_dir_all(root.join("full/nested_empty")).unwrap();
        fs::write(root.join("full/file.txt"), "x").unwrap();

        let entries = collect(&SourceWalker::new(&root)).unwrap();
        assert_eq!(
            names(&entries),
            vec!["empty/", "full/file.txt", "full/nested_empty/"]
        );
    }

    #[test]
    fn test_walk_empty_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let entries = collect(&SourceWalker::new(temp.path())).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_walk_missing_root_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let result = collect(&SourceWalker::new(&missing));
        assert!(matches!(result, Err(ArchiveError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_symlink_cycle_errors() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("loop");
        fs::create_dir(&root).unwrap();
        std::os::unix::fs::symlink(&root, root.join("self")).unwrap();

        let result = collect(&SourceWalker::new(&root));
        assert!(result.is_err());
    }

    #[test]
    fn test_walk_skips_excluded_archive() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        fs::create_dir_all(root.join("out")).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("out/project.zip"), "PK").unwrap();
        let archive = fs::canonicalize(root.join("out/project.zip")).unwrap();

        let entries = collect(&SourceWalker::new(&root).excluding(&archive)).unwrap();

        // The directory holding only the archive counts as empty.
        assert_eq!(names(&entries), vec!["a.txt", "out/"]);
    }

    #[test]
    fn test_walk_exclusion_matches_by_real_path() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("a/same.zip"), "1").unwrap();
        fs::write(root.join("b/same.zip"), "2").unwrap();
        let archive = fs::canonicalize(root.join("b/same.zip")).unwrap();

        let entries = collect(&SourceWalker::new(&root).excluding(&archive)).unwrap();

        assert_eq!(names(&entries), vec!["a/same.zip", "b/"]);
    }
}
