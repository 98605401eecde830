//! Data model shared by compression and decompression.

pub mod entry;
pub mod entry_path;

pub use entry::ArchiveEntry;
pub use entry::EntryKind;
pub use entry::StoredDigest;
pub use entry_path::EntryPath;
