use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::builder::FileBuilder;
use crate::error::{Error, Result};
use crate::file::File;

/// An immutable snapshot of one directory entry's attributes.
///
/// Captured with symlinks unfollowed, so a symlink describes itself rather
/// than its target; the target path is recorded alongside. The record never
/// re-checks the filesystem after capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    is_regular_file: bool,
    symlink_target: Option<PathBuf>,
    created_at: Option<SystemTime>,
    last_modified_at: Option<SystemTime>,
    last_accessed_at: Option<SystemTime>,
}

impl FileMetadata {
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        self.is_regular_file
    }

    /// The raw target path recorded for a symlink, without any I/O.
    #[must_use]
    pub fn symlink_target_path(&self) -> Option<&Path> {
        self.symlink_target.as_deref()
    }

    /// Opens the symlink target as a fresh [`File`] handle.
    ///
    /// Returns `Ok(None)` when the inspected entry was not a symlink, and
    /// [`Error::NotFound`] when the target has since disappeared.
    pub fn symlink_target(&self) -> Result<Option<File>> {
        match &self.symlink_target {
            Some(target) => FileBuilder::from_path(target)?.open().map(Some),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn created_at(&self) -> Option<SystemTime> {
        self.created_at
    }

    #[must_use]
    pub fn last_modified_at(&self) -> Option<SystemTime> {
        self.last_modified_at
    }

    #[must_use]
    pub fn last_accessed_at(&self) -> Option<SystemTime> {
        self.last_accessed_at
    }
}

pub(crate) fn read(path: &Path) -> Result<FileMetadata> {
    let meta = fs::symlink_metadata(path)
        .map_err(|err| Error::from_io("symlink_metadata", path, err))?;
    let symlink_target = if meta.file_type().is_symlink() {
        Some(fs::read_link(path).map_err(|err| Error::from_io("read_link", path, err))?)
    } else {
        None
    };
    // The three timestamps come from three distinct attribute sources and
    // are not interchangeable.
    Ok(FileMetadata {
        is_regular_file: meta.is_file(),
        symlink_target,
        created_at: file_time(path, "metadata.created", meta.created())?,
        last_modified_at: file_time(path, "metadata.modified", meta.modified())?,
        last_accessed_at: file_time(path, "metadata.accessed", meta.accessed())?,
    })
}

/// Normalizes one platform file time.
///
/// The epoch sentinel and "unsupported on this platform" both read as
/// unknown; any other attribute failure surfaces as an I/O error.
fn file_time(
    path: &Path,
    op: &'static str,
    value: std::io::Result<SystemTime>,
) -> Result<Option<SystemTime>> {
    match value {
        Ok(time) if time == UNIX_EPOCH => Ok(None),
        Ok(time) => Ok(Some(time)),
        Err(err) if err.kind() == ErrorKind::Unsupported => Ok(None),
        Err(err) => Err(Error::io(op, path, err)),
    }
}
