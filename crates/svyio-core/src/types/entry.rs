//! Archive entry description used while compressing.

use crate::types::EntryPath;
use std::path::PathBuf;

/// Size and CRC32 of a file, computed before its entry header is written.
///
/// Stored (uncompressed) entries must declare both values up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoredDigest {
    /// Content length in bytes.
    pub size: u64,
    /// CRC32 (IEEE) of the content.
    pub crc32: u32,
}

/// How an entry is represented in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Zero-length directory marker, written only for empty directories.
    Directory,

    /// File content compressed with DEFLATE.
    Deflated,

    /// File content written without compression.
    ///
    /// The digest was computed over the source file before the entry was
    /// started.
    Stored(StoredDigest),
}

impl EntryKind {
    /// Returns `true` if this is a directory marker.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// One entry of an archive being written.
///
/// # Examples
///
/// ```
/// use svyio_core::types::{ArchiveEntry, EntryKind, EntryPath};
/// use std::path::{Path, PathBuf};
///
/// let entry = ArchiveEntry {
///     path: EntryPath::from_relative(Path::new("empty"))?,
///     source: PathBuf::from("/data/project/empty"),
///     kind: EntryKind::Directory,
/// };
/// assert_eq!(entry.zip_name(), "empty/");
/// # Ok::<(), svyio_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path relative to the archive root.
    pub path: EntryPath,
    /// Filesystem location the entry is read from.
    pub source: PathBuf,
    /// Directory marker, deflated or stored file.
    pub kind: EntryKind,
}

impl ArchiveEntry {
    /// Returns the name written to the archive.
    ///
    /// Directory markers carry a trailing `/`.
    #[must_use]
    pub fn zip_name(&self) -> String {
        if self.kind.is_directory() {
            self.path.directory_name()
        } else {
            self.path.as_str().to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_entry_kind_predicates() {
        let stored = EntryKind::Stored(StoredDigest { size: 5, crc32: 1 });
        assert!(!stored.is_directory());
        assert!(EntryKind::Directory.is_directory());
        assert!(!EntryKind::Deflated.is_directory());
    }

    #[test]
    fn test_file_zip_name_has_no_trailing_slash() {
        let entry = ArchiveEntry {
            path: EntryPath::from_relative(Path::new("dir/a.txt")).unwrap(),
            source: PathBuf::from("/src/dir/a.txt"),
            kind: EntryKind::Deflated,
        };
        assert_eq!(entry.zip_name(), "dir/a.txt");
    }
}
