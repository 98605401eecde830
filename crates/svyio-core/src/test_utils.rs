//! Test utilities for building and inspecting archives.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::fs::File;
use std::io::Cursor;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipArchive;

/// Everything a test wants to know about one entry of a written archive.
#[derive(Debug, Clone)]
pub struct ZipEntrySummary {
    /// Raw entry name.
    pub name: String,
    /// Compression method recorded in the header.
    pub method: CompressionMethod,
    /// Declared uncompressed size.
    pub size: u64,
    /// Declared CRC32.
    pub crc32: u32,
    /// Whether the entry is a directory marker.
    pub is_dir: bool,
    /// Decompressed content.
    pub data: Vec<u8>,
}

/// Reads every entry of the archive at `path`, in stored order.
#[must_use]
pub fn read_zip_entries(path: &Path) -> Vec<ZipEntrySummary> {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let mut data = Vec::new();
            entry.read_to_end(&mut data).unwrap();
            ZipEntrySummary {
                name: entry.name().to_string(),
                method: entry.compression(),
                size: entry.size(),
                crc32: entry.crc32(),
                is_dir: entry.is_dir(),
                data,
            }
        })
        .collect()
}

/// Creates an in-memory ZIP archive from a list of `(name, content)` pairs.
///
/// Names ending in `/` are added as directory markers. Files are stored
/// uncompressed.
#[must_use]
pub fn create_test_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for &(name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(name, options).unwrap();
        } else {
            zip.start_file(name, options).unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

/// Writes `create_test_zip(entries)` to `path`.
pub fn write_test_zip(path: &Path, entries: &[(&str, &str)]) {
    fs::write(path, create_test_zip(entries)).unwrap();
}

/// Creates files (and their parents) below `root`.
///
/// Paths ending in `/` create empty directories.
pub fn build_tree(root: &Path, entries: &[(&str, &str)]) {
    fs::create_dir_all(root).unwrap();
    for &(name, data) in entries {
        let path = root.join(name);
        if name.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, data).unwrap();
        }
    }
}
