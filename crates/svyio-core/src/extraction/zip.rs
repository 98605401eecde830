//! ZIP archive extraction.

use crate::Result;
use crate::copy::copy_stream;
use crate::types::EntryPath;
use log::trace;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use zip::ZipArchive;

/// Extracts every entry of `archive` into `target`, in stored order.
///
/// `target` is created first if it does not exist. Directory entries create
/// directories; file entries create their parent directories and stream their
/// decompressed bytes to disk. Returns the number of entries extracted.
///
/// # Errors
///
/// Returns an error if:
/// - `target` cannot be created
/// - the archive cannot be opened or is not a valid zip archive
/// - an entry name would resolve outside `target`
/// - an entry fails to decompress (including CRC mismatches) or cannot be
///   written
pub fn extract_zip(archive: &Path, target: &Path) -> Result<usize> {
    fs::create_dir_all(target)?;

    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;

    for index in 0..zip.len() {
        let entry = zip.by_index(index)?;
        let entry_path = EntryPath::parse(entry.name())?;
        let output = entry_path.to_native(target);

        if entry.is_dir() {
            trace!("creating directory {}", output.display());
            fs::create_dir_all(&output)?;
            continue;
        }

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }

        trace!("extracting {entry_path} to {}", output.display());
        let mut writer = BufWriter::new(File::create(&output)?);
        copy_stream(entry, &mut writer)?;
        writer.flush()?;
    }

    Ok(zip.len())
}
