//! Writing text to files.

use crate::Result;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Whether writes extend or replace an existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Add to the end of the file, creating it if missing.
    #[default]
    Append,
    /// Replace the file's content, creating it if missing.
    Truncate,
}

/// Writes `text` followed by a newline.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
///
/// # Examples
///
/// ```no_run
/// use svyio_core::text::{WriteMode, write_text};
///
/// write_text("app.log", "started", WriteMode::Append)?;
/// # Ok::<(), svyio_core::ArchiveError>(())
/// ```
pub fn write_text<P: AsRef<Path>>(path: P, text: &str, mode: WriteMode) -> Result<()> {
    write_lines(path, [text], mode)
}

/// Writes each line followed by a newline.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn write_lines<P, I, S>(path: P, lines: I, mode: WriteMode) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(open(path.as_ref(), mode)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn open(path: &Path, mode: WriteMode) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Append => options.append(true),
        WriteMode::Truncate => options.write(true).truncate(true),
    };
    options.open(path)
}
