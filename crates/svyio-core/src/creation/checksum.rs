//! CRC32 bookkeeping for stored entries.
//!
//! A stored entry declares its size and CRC32 before its data. The digest is
//! computed by streaming the file through [`copy_stream`] into a
//! [`ChecksumWriter`] that discards the bytes, and the same writer type wraps
//! the archive stream while the entry data is written so both sides can be
//! compared afterwards.

use crate::ArchiveError;
use crate::Result;
use crate::copy::copy_stream;
use crate::types::StoredDigest;
use crc32fast::Hasher;
use std::fs::File;
use std::io::Write;
use std::io::{self};
use std::path::Path;

/// Writer adapter that checksums and counts every byte passed through it.
pub struct ChecksumWriter<W> {
    inner: W,
    hasher: Hasher,
    size: u64,
}

impl<W: Write> ChecksumWriter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Hasher::new(),
            size: 0,
        }
    }

    /// Returns the digest of everything written so far.
    #[must_use]
    pub fn digest(&self) -> StoredDigest {
        StoredDigest {
            size: self.size,
            crc32: self.hasher.clone().finalize(),
        }
    }
}

impl<W: Write> Write for ChecksumWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Computes the size and CRC32 of a file's full content.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn digest_file(path: &Path) -> Result<StoredDigest> {
    let file = File::open(path)?;
    let mut sink = ChecksumWriter::new(io::sink());
    copy_stream(file, &mut sink)?;
    Ok(sink.digest())
}

/// Checks that the bytes actually written match the precomputed digest.
///
/// # Errors
///
/// Returns [`ArchiveError::StoredEntryMismatch`] if size or CRC differ.
pub fn verify_digest(path: &Path, expected: StoredDigest, actual: StoredDigest) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(ArchiveError::StoredEntryMismatch {
        path: path.to_path_buf(),
        expected_size: expected.size,
        expected_crc: expected.crc32,
        actual_size: actual.size,
        actual_crc: actual.crc32,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_checksum_writer_known_value() {
        // CRC32 (IEEE) of "123456789" is the standard check value.
        let mut out = Vec::new();
        let mut writer = ChecksumWriter::new(&mut out);
        writer.write_all(b"123456789").unwrap();
        let digest = writer.digest();
        assert_eq!(digest.size, 9);
        assert_eq!(digest.crc32, 0xCBF4_3926);
        assert_eq!(out, b"123456789");
    }

    #[test]
    fn test_checksum_writer_empty() {
        let writer = ChecksumWriter::new(io::sink());
        assert_eq!(writer.digest(), StoredDigest { size: 0, crc32: 0 });
    }

    #[test]
    fn test_digest_file_matches_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        let content: Vec<u8> = (0..50_000u32).map(|i| (i % 256) as u8).collect();
        fs::write(&path, &content).unwrap();

        let digest = digest_file(&path).unwrap();
        assert_eq!(digest.size, content.len() as u64);
        assert_eq!(digest.crc32, crc32fast::hash(&content));
    }

    #[test]
    fn test_digest_file_missing() {
        let temp = TempDir::new().unwrap();
        let result = digest_file(&temp.path().join("missing"));
        assert!(matches!(result, Err(ArchiveError::Io(_))));
    }

    #[test]
    fn test_verify_digest_mismatch() {
        let expected = StoredDigest { size: 4, crc32: 1 };
        let actual = StoredDigest { size: 5, crc32: 2 };
        assert!(verify_digest(Path::new("a"), expected, expected).is_ok());
        let err = verify_digest(Path::new("a"), expected, actual).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::StoredEntryMismatch {
                expected_size: 4,
                actual_size: 5,
                ..
            }
        ));
    }
}
