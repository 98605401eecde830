//! Default extraction directory naming.

use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

/// Returns the directory an archive is extracted into when no target is
/// given.
///
/// The archive path with its trailing extension stripped is used when it does
/// not exist yet. Otherwise `-1`, `-2`, … is appended and the first free
/// candidate wins, so repeated extractions never overwrite each other.
///
/// # Examples
///
/// ```no_run
/// use svyio_core::extraction::target::default_target;
/// use std::path::{Path, PathBuf};
///
/// // With /data/bundle already present:
/// assert_eq!(
///     default_target(Path::new("/data/bundle.zip")),
///     PathBuf::from("/data/bundle-1")
/// );
/// ```
#[must_use]
pub fn default_target(archive: &Path) -> PathBuf {
    let base = archive.with_extension("");
    if !base.exists() {
        return base;
    }

    (1u64..)
        .map(|n| with_suffix(&base, n))
        .find(|candidate| !candidate.exists())
        .unwrap_or(base)
}

fn with_suffix(base: &Path, n: u64) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!("-{n}"));
    PathBuf::from(name)
}
