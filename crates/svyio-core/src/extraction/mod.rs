//! Archive extraction: unpacking a zip archive into a directory.

pub mod config;
pub mod target;
pub mod zip;

pub use config::DecompressConfig;
pub use target::default_target;
