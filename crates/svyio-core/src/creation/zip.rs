//! ZIP archive creation.
//!
//! Writes every [`SourceEntry`] of a source tree into a zip archive. Files
//! whose base name is listed in
//! [`CompressConfig::store_uncompressed`](crate::CompressConfig) are written
//! without compression after their size and CRC32 have been computed; all
//! other files are deflated.

use crate::ArchiveError;
use crate::Result;
use crate::copy::copy_stream;
use crate::creation::checksum::ChecksumWriter;
use crate::creation::checksum::digest_file;
use crate::creation::checksum::verify_digest;
use crate::creation::config::CompressConfig;
use crate::creation::walker::SourceEntry;
use crate::creation::walker::SourceWalker;
use crate::types::ArchiveEntry;
use crate::types::EntryKind;
use log::trace;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Entries at or above this size need ZIP64 headers.
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Writes `source` (a file or a directory tree) to a new zip archive at
/// `target`.
///
/// An existing `target` is deleted first. Missing parent directories of
/// `target` are created. When `target` lies inside `source` it is left out
/// of the archive. Returns the number of entries written.
///
/// On failure the zip writer and any open file are dropped, which closes
/// them on a best-effort basis; a partially written archive may remain.
///
/// # Examples
///
/// ```no_run
/// use svyio_core::CompressConfig;
/// use svyio_core::creation::zip::create_zip;
/// use std::path::Path;
///
/// let config = CompressConfig::default().with_store_uncompressed(["logo.png"]);
/// let entries = create_zip(Path::new("site"), Path::new("site.zip"), &config)?;
/// println!("wrote {entries} entries");
/// # Ok::<(), svyio_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `target` exists and cannot be deleted
/// - the archive file cannot be created
/// - any source file cannot be read, or the archive cannot be written
/// - a stored file changes between checksumming and writing
pub fn create_zip(source: &Path, target: &Path, config: &CompressConfig) -> Result<usize> {
    remove_existing(target)?;
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(target)?;
    let real_target = fs::canonicalize(target)?;
    let walker = SourceWalker::new(source).excluding(&real_target);
    let (mut out, entries) = write_entries(ZipWriter::new(BufWriter::new(file)), &walker, config)?;
    out.flush()?;
    Ok(entries)
}

/// Writes every entry and finishes the archive, handing back the inner
/// writer exactly once.
fn write_entries<W: Write + Seek>(
    mut zip: ZipWriter<W>,
    walker: &SourceWalker<'_>,
    config: &CompressConfig,
) -> Result<(W, usize)> {
    let deflated = deflated_options(config);
    let mut entries = 0;

    for source_entry in walker.walk() {
        let entry = plan_entry(&source_entry?, config)?;
        write_entry(&mut zip, &entry, deflated)?;
        entries += 1;
    }

    Ok((zip.finish()?, entries))
}

/// Turns a walked source entry into an archive entry.
///
/// For stored files the digest is computed here, immediately before the
/// entry is written.
fn plan_entry(entry: &SourceEntry, config: &CompressConfig) -> Result<ArchiveEntry> {
    let kind = if entry.is_empty_dir {
        EntryKind::Directory
    } else if config.is_stored_name(entry.archive_path.file_name()) {
        EntryKind::Stored(digest_file(&entry.path)?)
    } else {
        EntryKind::Deflated
    };

    Ok(ArchiveEntry {
        path: entry.archive_path.clone(),
        source: entry.path.clone(),
        kind,
    })
}

fn write_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &ArchiveEntry,
    deflated: SimpleFileOptions,
) -> Result<()> {
    let name = entry.zip_name();

    match entry.kind {
        EntryKind::Directory => {
            trace!("adding directory entry {name}");
            zip.add_directory(name, deflated)?;
        }
        EntryKind::Deflated => {
            let file = File::open(&entry.source)?;
            let size = file.metadata()?.len();
            trace!("adding deflated entry {name} ({size} bytes)");
            zip.start_file(name, deflated.large_file(size >= ZIP64_THRESHOLD))?;
            copy_stream(file, zip)?;
        }
        EntryKind::Stored(digest) => {
            let file = File::open(&entry.source)?;
            trace!(
                "adding stored entry {name} ({} bytes, crc {:#010x})",
                digest.size, digest.crc32
            );
            let options = SimpleFileOptions::default()
                .compression_method(CompressionMethod::Stored)
                .large_file(digest.size >= ZIP64_THRESHOLD);
            zip.start_file(name, options)?;

            let mut writer = ChecksumWriter::new(&mut *zip);
            copy_stream(file, &mut writer)?;
            verify_digest(&entry.source, digest, writer.digest())?;
        }
    }

    Ok(())
}

fn deflated_options(config: &CompressConfig) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(config.compression_level.map(i64::from))
}

fn remove_existing(target: &Path) -> Result<()> {
    match fs::remove_file(target) {
        Ok(()) => {
            trace!("deleted existing archive {}", target.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ArchiveError::DeleteFailed {
            path: target.to_path_buf(),
            source,
        }),
    }
}
