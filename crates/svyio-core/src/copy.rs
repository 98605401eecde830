//! Streaming copy primitive shared by compression and decompression.
//!
//! Every file's bytes move through [`copy_stream`]: into a zip writer while
//! compressing, out of a zip entry reader while decompressing, and into a
//! checksum sink while precomputing stored entries.
//!
//! The source is taken by value and dropped (closed) when the copy returns.
//! The destination is only borrowed and is never closed here, because it may
//! be an aggregate stream such as a [`zip::ZipWriter`] spanning many files.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::Result;

/// Size of the intermediate copy buffer (16 KiB).
pub const COPY_BUFFER_SIZE: usize = 16 * 1024;

/// Fixed-size intermediate buffer for [`copy_stream`].
///
/// Reads accumulate in the buffer until it is full, at which point the whole
/// buffer is written out. Whatever is left after end-of-stream is drained by
/// [`CopyBuffer::drain`].
#[derive(Debug)]
struct CopyBuffer {
    buf: [u8; COPY_BUFFER_SIZE],
    filled: usize,
}

impl CopyBuffer {
    fn new() -> Self {
        Self {
            buf: [0u8; COPY_BUFFER_SIZE],
            filled: 0,
        }
    }

    /// Reads once from `reader` into the free part of the buffer.
    ///
    /// Returns `Ok(0)` at end-of-stream. Interrupted reads are retried.
    fn fill<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<usize> {
        loop {
            match reader.read(&mut self.buf[self.filled..]) {
                Ok(n) => {
                    self.filled += n;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Writes every pending byte to `writer` and empties the buffer.
    ///
    /// Returns the number of bytes written.
    fn drain<W: Write + ?Sized>(&mut self, writer: &mut W) -> io::Result<usize> {
        let pending = self.filled;
        if pending > 0 {
            writer.write_all(&self.buf[..pending])?;
            self.filled = 0;
        }
        Ok(pending)
    }

    fn is_full(&self) -> bool {
        self.filled == COPY_BUFFER_SIZE
    }
}

/// Copies everything from `source` to `dest` through a local 16 KiB buffer.
///
/// `source` is consumed and closed before this function returns, whether the
/// copy succeeds or not. `dest` is left open and unflushed; flushing and
/// closing it is the caller's responsibility.
///
/// Returns the total number of bytes copied.
///
/// # Errors
///
/// Returns an error if reading from `source` or writing to `dest` fails.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use svyio_core::copy::copy_stream;
///
/// let mut out = Vec::new();
/// let copied = copy_stream(Cursor::new(b"hello".to_vec()), &mut out)?;
/// assert_eq!(copied, 5);
/// assert_eq!(out, b"hello");
/// # Ok::<(), svyio_core::ArchiveError>(())
/// ```
pub fn copy_stream<R: Read, W: Write + ?Sized>(mut source: R, dest: &mut W) -> Result<u64> {
    let mut buffer = CopyBuffer::new();
    let mut total: u64 = 0;

    loop {
        if buffer.fill(&mut source)? == 0 {
            break;
        }
        if buffer.is_full() {
            total += buffer.drain(dest)? as u64;
        }
    }

    // End-of-stream leaves a partially filled buffer behind.
    total += buffer.drain(dest)? as u64;

    drop(source);
    Ok(total)
}
