//! Line-oriented reading of text files.

use crate::ArchiveError;
use crate::Result;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::ops::ControlFlow;
use std::path::Path;

/// Streams the lines of a UTF-8 text file to `callback`, without reading the
/// whole file into memory.
///
/// Lines are passed without their terminator (`\n` or `\r\n`). Return
/// [`ControlFlow::Break`] from the callback to stop reading early. Returns the
/// number of lines passed to the callback.
///
/// # Errors
///
/// Returns [`ArchiveError::NotFound`] if `path` does not exist or is not a
/// regular file, and an I/O error naming the file if reading fails or the
/// content is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use std::ops::ControlFlow;
/// use svyio_core::text::read_lines;
///
/// let mut header = None;
/// read_lines("data.csv", |line| {
///     header = Some(line.to_string());
///     ControlFlow::Break(())
/// })?;
/// # Ok::<(), svyio_core::ArchiveError>(())
/// ```
pub fn read_lines<P, F>(path: P, mut callback: F) -> Result<u64>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> ControlFlow<()>,
{
    let path = path.as_ref();
    let reader = open_regular_file(path)?;

    let mut delivered = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| read_error(path, &e))?;
        delivered += 1;
        if callback(&line).is_break() {
            break;
        }
    }

    Ok(delivered)
}

/// Counts the lines of a file.
///
/// A final line without a terminator counts as a line; an empty file has
/// zero lines. The content does not need to be valid UTF-8.
///
/// # Errors
///
/// Returns [`ArchiveError::NotFound`] if `path` does not exist or is not a
/// regular file, and an I/O error naming the file if reading fails.
pub fn line_count<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let mut reader = open_regular_file(path)?;

    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| read_error(path, &e))?;
        if read == 0 {
            break;
        }
        count += 1;
    }

    Ok(count)
}

fn open_regular_file(path: &Path) -> Result<BufReader<File>> {
    if !path.is_file() {
        return Err(ArchiveError::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(BufReader::new(File::open(path)?))
}

fn read_error(path: &Path, e: &std::io::Error) -> ArchiveError {
    ArchiveError::Io(std::io::Error::new(
        e.kind(),
        format!("error reading file \"{}\": {e}", path.display()),
    ))
}
