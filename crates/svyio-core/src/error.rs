//! Error types for archive and file I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while compressing, decompressing or reading files.
///
/// Apart from [`ArchiveError::NotFound`] and
/// [`ArchiveError::InvalidCompressionLevel`], every variant belongs to the I/O
/// failure family: a stream could not be opened, read or written, or a
/// required delete/create step failed.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file or directory to operate on does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The zip reader or writer rejected the archive data.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// An existing target could not be removed before writing.
    #[error("failed to delete existing target {path}: {source}")]
    DeleteFailed {
        /// The target that could not be removed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stored entry's content changed between checksumming and writing.
    #[error(
        "stored entry {path} changed while archiving: expected {expected_size} bytes (crc {expected_crc:#010x}), wrote {actual_size} bytes (crc {actual_crc:#010x})"
    )]
    StoredEntryMismatch {
        /// Source file of the entry.
        path: PathBuf,
        /// Size recorded before the entry was started.
        expected_size: u64,
        /// CRC32 recorded before the entry was started.
        expected_crc: u32,
        /// Number of bytes actually written.
        actual_size: u64,
        /// CRC32 of the bytes actually written.
        actual_crc: u32,
    },

    /// Compression level outside the supported 1-9 range.
    #[error("invalid compression level {level}, must be 1-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// An archive entry name would resolve outside the extraction target.
    #[error("unsafe entry path in archive: {name}")]
    UnsafeEntryPath {
        /// The raw entry name.
        name: String,
    },
}

impl ArchiveError {
    /// Returns `true` if the operation failed because its input does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use svyio_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::NotFound {
    ///     path: PathBuf::from("missing.zip"),
    /// };
    /// assert!(err.is_not_found());
    ///
    /// let err = ArchiveError::InvalidArchive("bad header".to_string());
    /// assert!(!err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for every failure in the I/O family: everything except
    /// a missing input or a rejected configuration.
    #[must_use]
    pub const fn is_io_failure(&self) -> bool {
        !matches!(
            self,
            Self::NotFound { .. } | Self::InvalidCompressionLevel { .. }
        )
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use svyio_core::ArchiveError;
    ///
    /// let err = ArchiveError::InvalidArchive("bad header".to_string());
    /// assert_eq!(err.context(), Some("bad header"));
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidArchive(msg) => Some(msg),
            Self::UnsafeEntryPath { name } => Some(name),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Self::Io(e),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

impl From<walkdir::Error> for ArchiveError {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        match err.into_io_error() {
            Some(e) => Self::Io(e),
            None => Self::Io(std::io::Error::other(format!("walkdir error: {message}"))),
        }
    }
}
