//! Configuration for decompress operations.

use crate::extraction::target::default_target;
use std::path::Path;
use std::path::PathBuf;

/// Configuration for [`decompress`](crate::decompress).
///
/// # Examples
///
/// ```
/// use svyio_core::DecompressConfig;
/// use std::path::{Path, PathBuf};
///
/// let config = DecompressConfig::default().with_target("/tmp/unpacked");
/// assert_eq!(
///     config.resolve_target(Path::new("/data/bundle.zip")),
///     PathBuf::from("/tmp/unpacked")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecompressConfig {
    /// Directory the archive is extracted into.
    ///
    /// `None` derives a fresh directory from the archive name, see
    /// [`default_target`].
    ///
    /// Default: `None`.
    pub target: Option<PathBuf>,
}

impl DecompressConfig {
    /// Creates a new `DecompressConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extraction directory.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Resolves the extraction directory for `archive`.
    #[must_use]
    pub fn resolve_target(&self, archive: &Path) -> PathBuf {
        self.target
            .clone()
            .unwrap_or_else(|| default_target(archive))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_decompress_config_default() {
        assert_eq!(DecompressConfig::default().target, None);
        assert_eq!(DecompressConfig::new(), DecompressConfig::default());
    }

    #[test]
    fn test_resolve_target_without_explicit_target() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("bundle.zip");
        assert_eq!(
            DecompressConfig::default().resolve_target(&archive),
            temp.path().join("bundle")
        );
    }
}
