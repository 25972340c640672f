use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::file::File;

/// The validation policy a builder applies when producing a [`File`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    /// The path must already exist.
    Open,
    /// A new regular file must be created at the path.
    Create,
    /// Open the path if it exists, create it otherwise.
    CreateIfAbsent,
}

/// The only constructor path for [`File`] handles.
///
/// A builder carries an untyped path; one of the intent methods
/// ([`open`](Self::open), [`create`](Self::create),
/// [`create_if_absent`](Self::create_if_absent)) turns it into a validated
/// handle. Every intent runs the same validator: the path must exist, must
/// not be a directory, and must have a final component.
///
/// Zero-element paths (no final component, e.g. `/`) are rejected by the
/// entry points themselves, before any filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBuilder {
    path: PathBuf,
}

impl FileBuilder {
    /// Builds from a native path or anything convertible into one.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::checked(path.into())
    }

    /// Builds from one or more segments joined into a path.
    pub fn from_segments<I>(segments: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut path = PathBuf::new();
        let mut any = false;
        for segment in segments {
            path.push(segment.as_ref());
            any = true;
        }
        if !any {
            return Err(Error::InvalidArgument(
                "at least one path segment is required".to_string(),
            ));
        }
        Self::checked(path)
    }

    /// Builds from an RFC 8089 `file://` URI.
    pub fn from_file_uri(uri: &str) -> Result<Self> {
        let parsed = url::Url::parse(uri)
            .map_err(|err| Error::InvalidArgument(format!("invalid uri {uri:?}: {err}")))?;
        if parsed.scheme() != "file" {
            return Err(Error::InvalidArgument(format!(
                "expected a file:// uri, got scheme {:?}",
                parsed.scheme()
            )));
        }
        let path = parsed.to_file_path().map_err(|()| {
            Error::InvalidArgument(format!("uri {uri:?} does not name a local path"))
        })?;
        Self::checked(path)
    }

    fn checked(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("path must not be empty".to_string()));
        }
        if path.file_name().is_none() {
            return Err(Error::zero_element_path(&path));
        }
        Ok(Self { path })
    }

    /// Opens this already-existing file.
    pub fn open(self) -> Result<File> {
        self.build(Intent::Open)
    }

    /// Creates this not-yet-existing file.
    pub fn create(self) -> Result<File> {
        self.build(Intent::Create)
    }

    /// Creates this file if absent, opens it otherwise.
    ///
    /// Losing a creation race to another actor surfaces the underlying
    /// error rather than retrying.
    pub fn create_if_absent(self) -> Result<File> {
        self.build(Intent::CreateIfAbsent)
    }

    fn build(self, intent: Intent) -> Result<File> {
        match intent {
            Intent::Open => {}
            Intent::Create => create_empty(&self.path)?,
            Intent::CreateIfAbsent => {
                let exists = self
                    .path
                    .try_exists()
                    .map_err(|err| Error::io("try_exists", &self.path, err))?;
                if !exists {
                    create_empty(&self.path)?;
                }
            }
        }
        validate(self.path)
    }
}

/// Creates an empty regular file, failing if the path is occupied.
///
/// `create_new` makes the occupancy check and the creation one atomic step.
fn create_empty(path: &Path) -> Result<()> {
    match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(Error::AlreadyExists(path.to_path_buf()))
        }
        // A missing parent directory lands here as a plain I/O failure;
        // the handle's own path was never claimed to exist.
        Err(err) => Err(Error::io("create", path, err)),
    }
}

/// The shared validator applied by every intent after any creation step.
fn validate(path: PathBuf) -> Result<File> {
    let exists = path
        .try_exists()
        .map_err(|err| Error::io("try_exists", &path, err))?;
    if !exists {
        return Err(Error::NotFound(path));
    }
    if path.is_dir() {
        return Err(Error::directory_not_file(&path));
    }
    // Entry points already reject these; kept so a handle can never be
    // built from a path without a name.
    if path.file_name().is_none() {
        return Err(Error::zero_element_path(&path));
    }
    Ok(File::new(path))
}

/// Builder entry point hanging directly off [`Path`].
pub trait PathExt {
    /// Wraps this path in a [`FileBuilder`].
    fn build_file(&self) -> Result<FileBuilder>;
}

impl PathExt for Path {
    fn build_file(&self) -> Result<FileBuilder> {
        FileBuilder::from_path(self)
    }
}
