use std::path::{Path, PathBuf};

use thiserror::Error;

/// The failure kinds observable at the crate boundary.
///
/// Platform I/O errors never leak untranslated; [`Error::from_io`] is the
/// single adapter from `std::io::Error` into this taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or disallowed input, rejected before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A path that was expected to exist no longer resolves.
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The builder's `create` intent found the target path occupied.
    #[error("path already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Any other platform I/O failure, with the original cause attached.
    #[error("io error during {op} on {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An invariant breach the builder should have made impossible.
    #[error("internal state error: {0}")]
    InternalState(String),
}

impl Error {
    pub(crate) fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Translates a platform error into the boundary taxonomy.
    ///
    /// Callers that must not report `NotFound` for a missing path (the
    /// builder's `create` intent, where a missing parent is an ordinary
    /// I/O failure) use [`Error::io`] directly instead.
    pub(crate) fn from_io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            _ => Self::io(op, path, source),
        }
    }

    pub(crate) fn directory_not_file(path: &Path) -> Self {
        Self::InvalidArgument(format!(
            "path {} is a directory; use `Directory` instead of `File`",
            path.display()
        ))
    }

    pub(crate) fn zero_element_path(path: &Path) -> Self {
        Self::InvalidArgument(format!("path {} has no final component", path.display()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
