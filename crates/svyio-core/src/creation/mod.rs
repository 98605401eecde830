//! Archive creation: walking a source and writing it as a zip archive.

pub mod checksum;
pub mod config;
pub mod walker;
pub mod zip;

pub use config::CompressConfig;
pub use walker::SourceEntry;
pub use walker::SourceWalker;
