//! Archive service façade.

use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::api;
use crate::creation::CompressConfig;
use crate::extraction::DecompressConfig;

/// Compresses and decompresses zip archives with shared settings.
///
/// The service holds no state besides its settings; it is cheap to clone
/// and safe to share between threads. Concurrent calls must target distinct
/// filesystem paths.
///
/// # Examples
///
/// ```no_run
/// use svyio_core::ArchiveService;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let service = ArchiveService::new();
/// let archive = service.compress("/data/site", None, &["logo.png"])?;
/// if let Some(dir) = service.decompress(&archive, Some(Path::new("/tmp/site")))? {
///     println!("restored into {}", dir.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveService {
    compression_level: Option<u8>,
}

impl Default for ArchiveService {
    fn default() -> Self {
        Self {
            compression_level: CompressConfig::default().compression_level,
        }
    }
}

impl ArchiveService {
    /// Creates a service with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the DEFLATE level used for compressed entries.
    ///
    /// # Panics
    ///
    /// Panics if the compression level is not in the range 1-9.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }

    /// Compresses `source` into a zip archive.
    ///
    /// `target` defaults to `<source>.zip`. Files whose base name appears in
    /// `store_uncompressed` are written without compression. See
    /// [`compress`](crate::compress) for failure behavior.
    pub fn compress<P: AsRef<Path>>(
        &self,
        source: P,
        target: Option<&Path>,
        store_uncompressed: &[&str],
    ) -> Result<PathBuf> {
        let config = CompressConfig {
            target: target.map(Path::to_path_buf),
            store_uncompressed: store_uncompressed.iter().map(|s| (*s).to_string()).collect(),
            compression_level: self.compression_level,
        };
        api::compress(source, &config)
    }

    /// Decompresses `archive` into a directory.
    ///
    /// `target` defaults to a fresh directory named after the archive.
    /// Returns `Ok(None)` if the archive could not be extracted; see
    /// [`decompress`](crate::decompress).
    pub fn decompress<P: AsRef<Path>>(
        &self,
        archive: P,
        target: Option<&Path>,
    ) -> Result<Option<PathBuf>> {
        let config = DecompressConfig {
            target: target.map(Path::to_path_buf),
        };
        api::decompress(archive, &config)
    }
}
