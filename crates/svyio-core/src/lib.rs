//! Zip/unzip and text file helpers built on a streaming copy primitive.
//!
//! `svyio-core` compresses files and directory trees into zip archives and
//! extracts them again. Every file's bytes move through one 16 KiB streaming
//! copy routine ([`copy::copy_stream`]). Files can be stored uncompressed by
//! base name, in which case their size and CRC32 are computed before the
//! entry is written.
//!
//! # Examples
//!
//! ```no_run
//! use svyio_core::{CompressConfig, DecompressConfig, compress, decompress};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = compress("/data/project", &CompressConfig::default())?;
//! match decompress(&archive, &DecompressConfig::default())? {
//!     Some(dir) => println!("extracted to {}", dir.display()),
//!     None => eprintln!("extraction failed, see log"),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod copy;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod service;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main API types
pub use api::compress;
pub use api::decompress;
pub use creation::CompressConfig;
pub use error::ArchiveError;
pub use error::Result;
pub use extraction::DecompressConfig;
pub use service::ArchiveService;

pub use types::ArchiveEntry;
pub use types::EntryKind;
pub use types::EntryPath;
pub use types::StoredDigest;
