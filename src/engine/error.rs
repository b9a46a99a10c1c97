use crate::{algorithm, hasher};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// A per-file failure. Captured into the file's [`FileDigest`](super::FileDigest)
/// by the walker instead of aborting the run.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Unknown algorithm identifier: {0}")]
    UnsupportedAlgorithm(String),
    #[error("Fail to access {0}: {1}")]
    Io(PathBuf, io::Error),
    #[error("Access denied to {0}: {1}")]
    AccessDenied(PathBuf, io::Error),
    #[error("Reading IO error: {0}")]
    ReadingIo(io::Error),
    #[error("Operation has been aborted")]
    Interrupted,
    #[error("Hasher error: {0}")]
    Hasher(#[from] hasher::E),
}

impl FileError {
    /// Short machine-readable classification of the failure, for callers that
    /// render error entries next to digests.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedAlgorithm(..) => "unsupported-algorithm",
            Self::Io(..) | Self::ReadingIo(..) => "io",
            Self::AccessDenied(..) => "access-denied",
            Self::Interrupted => "interrupted",
            Self::Hasher(..) => "hasher",
        }
    }

    /// Classifies an IO error against the path it happened on.
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Self::AccessDenied(path.to_path_buf(), err)
        } else {
            Self::Io(path.to_path_buf(), err)
        }
    }

    /// Attaches a path to a pathless reading error.
    pub(crate) fn localize(self, path: &Path) -> Self {
        match self {
            Self::ReadingIo(err) => Self::from_io(path, err),
            other => other,
        }
    }
}

impl From<algorithm::E> for FileError {
    fn from(err: algorithm::E) -> Self {
        let algorithm::E::Unsupported(name) = err;
        Self::UnsupportedAlgorithm(name)
    }
}
