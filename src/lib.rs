//! `fs-handles` separates an untyped path from a typed, pre-validated handle.
//!
//! A [`File`] was observed to exist and not be a directory when it was
//! built; a [`Directory`] was observed to exist and be one. The filesystem
//! stays a shared resource outside the crate's control, so the observation
//! is advisory: every handle operation re-checks existence first and reports
//! [`Error::NotFound`] once the entry has disappeared. No metadata is cached
//! between calls and no locking is performed.
//!
//! [`File`] handles are produced exclusively by [`FileBuilder`], which
//! accepts a path, joined segments, or a `file://` URI, and applies one of
//! three intents: open an existing file, create a new one, or create it only
//! if absent. Handles expose blocking content I/O ([`File::reader`],
//! [`File::writer`]), attribute snapshots ([`File::metadata`]), streaming
//! digests and MACs ([`File::hash`], [`File::hmac`]), an atomic
//! replace-existing move, and deletion.
//!
//! Readers and writers handed out by a handle are plain [`std::fs::File`]
//! values owned by the caller, including their closing.

mod builder;
mod directory;
mod error;
mod file;
mod hashing;
mod metadata;
mod open_options;
mod platform;

pub use builder::{FileBuilder, PathExt};
pub use directory::Directory;
pub use error::{Error, Result};
pub use file::File;
pub use hashing::{Digest, Hmac};
pub use metadata::FileMetadata;
pub use open_options::{WriteOption, WriteOptions};
