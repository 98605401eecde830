//! High-level public API for compressing and decompressing zip archives.
//!
//! The two operations fail differently. [`compress`] logs and propagates
//! every failure. [`decompress`] logs I/O failures and reports them as
//! `Ok(None)`, so callers must check the returned option. Both return
//! [`ArchiveError::NotFound`] before touching the filesystem when their
//! input does not exist.

use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::error;

use crate::ArchiveError;
use crate::Result;
use crate::creation::CompressConfig;
use crate::creation::zip::create_zip;
use crate::extraction::DecompressConfig;
use crate::extraction::zip::extract_zip;

/// Compresses a file or directory into a zip archive.
///
/// The archive is written to `config.target`, or to `<source>.zip` when no
/// target is set. An existing archive at that location is deleted first.
/// Directory sources are archived relative to the directory itself, so
/// `project/a.txt` becomes the entry `a.txt`; a file source becomes a single
/// entry named after the file.
///
/// Returns the absolute path of the written archive.
///
/// # Errors
///
/// Returns [`ArchiveError::NotFound`] if `source` does not exist and
/// [`ArchiveError::InvalidCompressionLevel`] for a bad configuration; neither
/// is logged. Every other failure is logged at error level with the source
/// path and returned. A partially written archive may remain on disk.
///
/// # Examples
///
/// ```no_run
/// use svyio_core::CompressConfig;
/// use svyio_core::compress;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CompressConfig::default().with_store_uncompressed(["video.mp4"]);
/// let archive = compress("/data/project", &config)?;
/// println!("wrote {}", archive.display());
/// # Ok(())
/// # }
/// ```
pub fn compress<P: AsRef<Path>>(source: P, config: &CompressConfig) -> Result<PathBuf> {
    let source = source.as_ref();
    config.validate()?;

    if !source.exists() {
        return Err(ArchiveError::NotFound {
            path: source.to_path_buf(),
        });
    }

    let result = std::path::absolute(source)
        .and_then(|absolute| std::path::absolute(config.resolve_target(&absolute)))
        .map_err(ArchiveError::from)
        .and_then(|target| create_zip(source, &target, config).map(|entries| (target, entries)));

    match result {
        Ok((target, entries)) => {
            debug!(
                "zipped \"{}\" into \"{}\" ({entries} entries)",
                source.display(),
                target.display()
            );
            Ok(target)
        }
        Err(e) => {
            error!("Error zipping file \"{}\": {e}", source.display());
            Err(e)
        }
    }
}

/// Decompresses a zip archive into a directory.
///
/// The archive is extracted into `config.target`, or into a fresh directory
/// named after the archive (see
/// [`default_target`](crate::extraction::target::default_target)). The
/// directory is created if needed.
///
/// Returns `Ok(Some(target))` with the absolute extraction directory on
/// success and `Ok(None)` if the archive could not be read or extracted.
///
/// # Errors
///
/// Returns [`ArchiveError::NotFound`] if `archive` does not exist. All other
/// failures are logged once at error level and reported as `Ok(None)`;
/// entries extracted before the failure are left in place.
///
/// # Examples
///
/// ```no_run
/// use svyio_core::DecompressConfig;
/// use svyio_core::decompress;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// match decompress("/data/bundle.zip", &DecompressConfig::default())? {
///     Some(dir) => println!("extracted to {}", dir.display()),
///     None => eprintln!("bundle.zip could not be extracted"),
/// }
/// # Ok(())
/// # }
/// ```
pub fn decompress<P: AsRef<Path>>(
    archive: P,
    config: &DecompressConfig,
) -> Result<Option<PathBuf>> {
    let archive = archive.as_ref();

    if !archive.exists() {
        return Err(ArchiveError::NotFound {
            path: archive.to_path_buf(),
        });
    }

    let result = std::path::absolute(config.resolve_target(archive))
        .map_err(ArchiveError::from)
        .and_then(|target| extract_zip(archive, &target).map(|entries| (target, entries)));

    match result {
        Ok((target, entries)) => {
            debug!(
                "unzipped \"{}\" into \"{}\" ({entries} entries)",
                archive.display(),
                target.display()
            );
            Ok(Some(target))
        }
        Err(e) => {
            error!("Failed to unzip file \"{}\": {e}", archive.display());
            Ok(None)
        }
    }
}
