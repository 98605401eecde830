//! Configuration for compress operations.

use crate::ArchiveError;
use crate::Result;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

/// Configuration for [`compress`](crate::compress).
///
/// # Examples
///
/// ```
/// use svyio_core::CompressConfig;
///
/// let config = CompressConfig::default()
///     .with_target("/tmp/out.zip")
///     .with_store_uncompressed(["photo.jpg", "movie.mp4"])
///     .with_compression_level(9);
/// assert!(config.is_stored_name("photo.jpg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressConfig {
    /// Where the archive is written.
    ///
    /// `None` writes next to the source, named `<source>.zip`.
    ///
    /// Default: `None`.
    pub target: Option<PathBuf>,

    /// Base file names (not paths) written without compression.
    ///
    /// Default: empty.
    pub store_uncompressed: BTreeSet<String>,

    /// DEFLATE level (1-9) for compressed entries.
    ///
    /// `None` uses the zip writer's default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            target: None,
            store_uncompressed: BTreeSet::new(),
            compression_level: Some(6),
        }
    }
}

impl CompressConfig {
    /// Creates a new `CompressConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive location.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the base file names to store uncompressed.
    #[must_use]
    pub fn with_store_uncompressed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store_uncompressed = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the compression level is not in the range 1-9.
    /// Use `validate()` for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }

    /// Returns `true` if a file with this base name is stored uncompressed.
    #[must_use]
    pub fn is_stored_name(&self, file_name: &str) -> bool {
        self.store_uncompressed.contains(file_name)
    }

    /// Resolves the archive location for `source`.
    ///
    /// Returns the configured target, or `source` with `.zip` appended to its
    /// full name (`report.pdf` becomes `report.pdf.zip`). Trailing separators
    /// and `.` segments are dropped first, so `project/` becomes
    /// `project.zip` next to the directory rather than inside it.
    #[must_use]
    pub fn resolve_target(&self, source: &Path) -> PathBuf {
        self.target.clone().unwrap_or_else(|| {
            let mut name = source.components().collect::<PathBuf>().into_os_string();
            name.push(".zip");
            PathBuf::from(name)
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is set but not in range 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
