use crate::algorithm;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal, run-level errors. Everything that happens to a single file during
/// a run is captured into its `FileDigest` instead; only problems with the
/// traversal root itself (or an abort request) surface through `E`.
#[derive(Error, Debug)]
pub enum E {
    #[error("Unknown algorithm identifier: {0}")]
    UnsupportedAlgorithm(String),
    #[error("Path {0} cannot be used as a traversal root. Only files and folders are supported")]
    InvalidRoot(PathBuf),
    #[error("IO: {0}")]
    IO(#[from] io::Error),
    #[error("Operation has been aborted")]
    Aborted,
}

impl From<algorithm::E> for E {
    fn from(err: algorithm::E) -> Self {
        let algorithm::E::Unsupported(name) = err;
        E::UnsupportedAlgorithm(name)
    }
}
