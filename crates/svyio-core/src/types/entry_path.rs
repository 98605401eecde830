//! Forward-slash separated archive entry path.

use crate::ArchiveError;
use crate::Result;
use std::fmt;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// A relative path inside an archive, always separated by `/`.
///
/// The same type is used in both directions: [`EntryPath::from_relative`]
/// builds one from a host path while compressing, and [`EntryPath::parse`]
/// validates a raw entry name read from an archive while decompressing.
///
/// An `EntryPath` never starts with `/`, never ends with `/`, and never
/// contains empty, `.` or `..` segments.
///
/// # Examples
///
/// ```
/// use svyio_core::types::EntryPath;
/// use std::path::Path;
///
/// let path = EntryPath::from_relative(Path::new("docs/readme.txt"))?;
/// assert_eq!(path.as_str(), "docs/readme.txt");
/// assert_eq!(path.directory_name(), "docs/readme.txt/");
/// # Ok::<(), svyio_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryPath(String);

impl EntryPath {
    /// Builds an entry path from a path relative to the archive root.
    ///
    /// Host separators are replaced with `/`. Segments that are not valid
    /// UTF-8 are converted lossily, with invalid bytes replaced by `U+FFFD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, absolute, or contains `..`.
    pub fn from_relative(path: &Path) -> Result<Self> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_string_lossy()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ArchiveError::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("not a relative archive path: {}", path.display()),
                    )));
                }
            }
        }

        if segments.is_empty() {
            return Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("empty archive path: {}", path.display()),
            )));
        }

        Ok(Self(segments.join("/")))
    }

    /// Validates a raw entry name read from an archive.
    ///
    /// A single trailing `/` (directory marker) is accepted and dropped.
    /// Every segment must be a plain name on the host platform, so names
    /// that are absolute, contain `..`, or carry a drive prefix are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::UnsafeEntryPath`] if the name would resolve
    /// outside the extraction target or is empty.
    pub fn parse(name: &str) -> Result<Self> {
        let unsafe_path = || ArchiveError::UnsafeEntryPath {
            name: name.to_string(),
        };

        if name.starts_with('/') {
            return Err(unsafe_path());
        }

        let mut segments = Vec::new();
        for segment in name.split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(_)), None) => segments.push(segment),
                _ => return Err(unsafe_path()),
            }
        }

        if segments.is_empty() {
            return Err(unsafe_path());
        }

        Ok(Self(segments.join("/")))
    }

    /// Returns the entry path as a `/`-separated string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name used for a directory marker entry (with trailing `/`).
    #[must_use]
    pub fn directory_name(&self) -> String {
        format!("{}/", self.0)
    }

    /// Returns the last segment of the path.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Resolves the entry below `base` using the host separator.
    #[must_use]
    pub fn to_native(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.extend(self.0.split('/'));
        path
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
