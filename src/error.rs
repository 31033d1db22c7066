//! Error types for listing failures

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A failure while listing.
///
/// Collaborator failures are never suppressed: a failure reading one
/// entry's metadata or one directory's children aborts the remainder of
/// that listing call and propagates to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{0}': No such file or directory")]
    NotFound(PathBuf),
    #[error("cannot open directory '{0}': Permission denied")]
    AccessDenied(PathBuf),
    #[error("unsupported listing request: {0}")]
    Unsupported(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify an I/O error against the path that produced it.
    pub(crate) fn for_path(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Error::AccessDenied(path.to_path_buf()),
            _ => Error::Io(err),
        }
    }

    /// Process exit code for this error: 1 for missing-path and
    /// permission problems, 2 for anything else, matching `ls`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound(_) | Error::AccessDenied(_) => 1,
            Error::Unsupported(_) | Error::Io(_) => 2,
        }
    }
}
