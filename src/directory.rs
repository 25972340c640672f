use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A validated handle to an existing directory.
///
/// The counterpart of [`crate::File`] for directory paths. It carries no
/// operations beyond identity; it exists so callers can type-distinguish a
/// path known to resolve to a directory from an untyped one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    /// Opens an existing directory.
    ///
    /// Unlike the file builder, a trailing-less path such as `/` is
    /// accepted; directories may legitimately lack a final component.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("path must not be empty".to_string()));
        }
        let exists = path
            .try_exists()
            .map_err(|err| Error::io("try_exists", &path, err))?;
        if !exists {
            return Err(Error::NotFound(path));
        }
        if !path.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "path {} is not a directory; use `File` instead",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the final path component as text, or `None` for roots such
    /// as `/` that have no final component.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}
