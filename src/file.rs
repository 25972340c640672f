use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::hashing::{self, Digest, Hmac};
use crate::metadata::{self, FileMetadata};
use crate::open_options::WriteOptions;
use crate::platform;

/// A validated handle to an existing, non-directory filesystem entry.
///
/// Handles come from [`crate::FileBuilder`], which observed the path to
/// exist and not be a directory. The filesystem remains a shared resource,
/// so that observation is advisory: every operation re-checks existence
/// first and reports [`Error::NotFound`] once the entry has disappeared.
/// The path is the handle's only state; nothing is cached across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Opens a writer over this file.
    ///
    /// The `Create` and `CreateNew` flags are stripped from `options`
    /// before opening (see [`crate::WriteOption`]); everything else is
    /// forwarded verbatim.
    pub fn writer(&self, options: WriteOptions) -> Result<fs::File> {
        self.ensure_exists()?;
        options
            .without_creation_flags()
            .to_std()
            .open(&self.path)
            .map_err(|err| Error::from_io("open_for_write", &self.path, err))
    }

    /// Opens a reader over this file.
    pub fn reader(&self) -> Result<fs::File> {
        self.ensure_exists()?;
        fs::File::open(&self.path).map_err(|err| Error::from_io("open", &self.path, err))
    }

    /// Returns the final path component as text.
    ///
    /// For `Path::new("home").join("downloads").join("file.txt")` the name
    /// is `file.txt`. The builder guarantees a final component exists, so a
    /// failure here is an internal-state error.
    pub fn name(&self) -> Result<String> {
        let name = self.path.file_name().ok_or_else(|| {
            Error::InternalState(format!(
                "file handle for {} lost its final component",
                self.path.display()
            ))
        })?;
        Ok(name.to_string_lossy().into_owned())
    }

    /// Returns the byte length of this file, or `-1` when the entry is not
    /// a regular file and its size is therefore unspecified.
    pub fn size(&self) -> Result<i64> {
        self.ensure_exists()?;
        let meta = fs::metadata(&self.path)
            .map_err(|err| Error::from_io("metadata", &self.path, err))?;
        if !meta.is_file() {
            return Ok(-1);
        }
        i64::try_from(meta.len()).map_err(|_| {
            Error::InternalState(format!("file length {} overflows i64", meta.len()))
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Takes an attribute snapshot without following symlinks.
    ///
    /// If the entry is itself a symlink, the snapshot additionally records
    /// the link's target path.
    pub fn metadata(&self) -> Result<FileMetadata> {
        self.ensure_exists()?;
        metadata::read(&self.path)
    }

    /// Streams this file's content through `digest` and returns the result.
    pub fn hash(&self, digest: Digest) -> Result<Box<[u8]>> {
        let mut reader = self.reader()?;
        hashing::hash_reader(&mut reader, digest).map_err(|err| Error::io("read", &self.path, err))
    }

    /// Streams this file's content through the keyed MAC `algorithm`.
    pub fn hmac(&self, algorithm: Hmac, key: &[u8]) -> Result<Box<[u8]>> {
        let mut reader = self.reader()?;
        hashing::hmac_reader(&mut reader, algorithm, key)
            .map_err(|err| Error::io("read", &self.path, err))
    }

    /// Moves or renames this file to `destination`, atomically where the
    /// platform allows, replacing any existing entry at `destination`.
    ///
    /// The handle keeps its original path; once the move succeeds, further
    /// operations on it report [`Error::NotFound`].
    pub fn atomic_move(&self, destination: impl AsRef<Path>) -> Result<()> {
        self.ensure_exists()?;
        platform::rename_replace(&self.path, destination.as_ref())
            .map_err(|err| Error::io("rename", &self.path, err))
    }

    /// Deletes this file.
    pub fn delete(&self) -> Result<()> {
        self.ensure_exists()?;
        fs::remove_file(&self.path)
            .map_err(|err| Error::from_io("remove_file", &self.path, err))
    }

    fn ensure_exists(&self) -> Result<()> {
        let exists = self
            .path
            .try_exists()
            .map_err(|err| Error::io("try_exists", &self.path, err))?;
        if exists {
            Ok(())
        } else {
            Err(Error::NotFound(self.path.clone()))
        }
    }
}
