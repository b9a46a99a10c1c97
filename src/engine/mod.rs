mod error;

use crate::{algorithm::Algorithm, breaker::Breaker};
pub use error::FileError;
use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::Path,
};

/// The number of bytes requested from the source per read. Memory consumption
/// of a hashing run stays proportional to this constant, independent of the
/// stream length.
pub const CHUNK_SIZE: usize = 4096;

/// A computed digest: a fixed-length byte sequence, rendered as lowercase
/// hexadecimal via `Display` or [`Digest::to_hex`]. For a given algorithm and
/// byte content the digest is deterministic and stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hexadecimal rendering, `2 × digest length` characters long.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// The outcome of hashing one file: a digest, or a typed per-file failure.
pub type FileDigest = Result<Digest, FileError>;

/// Calculates the digest of a sequential byte source. The source is read to
/// the end in chunks of [`CHUNK_SIZE`] bytes; each chunk is absorbed into the
/// incremental hasher of the given algorithm. The source is only read, never
/// seeked or mutated.
///
/// # Parameters
///
/// - `source`: Any sequential byte source.
/// - `algorithm`: The digest function to apply.
/// - `breaker`: Checked between chunk reads; a tripped breaker stops the
///   calculation with [`FileError::Interrupted`].
///
/// # Returns
///
/// - `Ok(Digest)` with the digest of the whole stream.
/// - `Err(FileError)` if a read fails or the run is aborted. Never a partial
///   or zero-length digest.
pub fn stream<R: Read>(source: R, algorithm: Algorithm, breaker: &Breaker) -> FileDigest {
    stream_sized(source, algorithm, CHUNK_SIZE, breaker)
}

/// Same as [`stream`], but with an explicit chunk size. The resulting digest
/// does not depend on the chunk size.
pub(crate) fn stream_sized<R: Read>(
    mut source: R,
    algorithm: Algorithm,
    chunk: usize,
    breaker: &Breaker,
) -> FileDigest {
    let mut hasher = algorithm.hasher();
    let mut buffer = vec![0u8; chunk];
    loop {
        if breaker.is_aborted() {
            return Err(FileError::Interrupted);
        }
        match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(bytes) => hasher.absorb(&buffer[..bytes]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(FileError::ReadingIo(err)),
        }
    }
    hasher.finish()?;
    Ok(Digest(hasher.hash()?.to_vec()))
}

/// Opens the file and streams its content through [`stream`]. Open and read
/// failures are reported against the file's path; permission problems are
/// classified as [`FileError::AccessDenied`].
pub fn file<P: AsRef<Path>>(path: P, algorithm: Algorithm, breaker: &Breaker) -> FileDigest {
    let path = path.as_ref();
    let source = File::open(path).map_err(|err| FileError::from_io(path, err))?;
    stream(source, algorithm, breaker).map_err(|err| err.localize(path))
}

/// Calculates the digest of a single file.
///
/// # Parameters
///
/// - `path`: The file to hash.
/// - `algorithm`: The digest function to apply.
///
/// # Returns
///
/// - `Ok(Digest)` with the file's digest.
/// - `Err(FileError)` if the file cannot be opened or read.
pub fn hash_file<P: AsRef<Path>>(path: P, algorithm: Algorithm) -> FileDigest {
    file(path, algorithm, &Breaker::new())
}

/// Same as [`hash_file`], but takes the algorithm as a string identifier, as
/// held by callers that populate a selection control from [`Algorithm::ALL`].
/// The identifier is validated before any filesystem access; an unknown
/// identifier fails with [`FileError::UnsupportedAlgorithm`] even if the path
/// does not exist.
pub fn hash_file_named<P: AsRef<Path>>(path: P, name: &str) -> FileDigest {
    let algorithm = name.parse::<Algorithm>()?;
    hash_file(path, algorithm)
}
