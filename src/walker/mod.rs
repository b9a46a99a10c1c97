use crate::{
    algorithm::Algorithm,
    breaker::Breaker,
    engine::{self, FileDigest, FileError},
    error::E,
};
use log::{debug, warn};
use std::{
    fs, io,
    path::{Path, PathBuf},
    slice,
    time::Instant,
};

/// The outcome of one hashing run: an ordered sequence of
/// `(relative path, FileDigest)` pairs plus the number of regular files
/// visited. Entries are sorted by relative path, so two runs over an unchanged
/// tree produce identical sequences.
///
/// Ownership moves to the caller when [`Walker::run`] returns; the walker holds
/// no reference to it afterwards.
#[derive(Debug, Default)]
pub struct Traversal {
    /// One entry per regular file reachable from the root (and, for folders
    /// that could not be read, one error entry per folder). Paths are relative
    /// to the traversal root.
    pub entries: Vec<(PathBuf, FileDigest)>,
    /// The number of regular files visited during the run.
    pub visited: usize,
}

impl Traversal {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (PathBuf, FileDigest)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Traversal {
    type Item = &'a (PathBuf, FileDigest);
    type IntoIter = slice::Iter<'a, (PathBuf, FileDigest)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// `Walker` hashes every regular file reachable from a root path and reports
/// one result per file.
///
/// The root is resolved once, when the `Walker` is created: a root that is
/// neither a file nor a folder is rejected with [`E::InvalidRoot`], and that is
/// the only fatal filesystem error of a run. Everything that happens to a
/// single file afterwards (vanished between enumeration and hashing, access
/// denied, a read error mid-stream) is captured into that file's entry, and
/// the run continues with the remaining files. One unreadable file never stops
/// the batch.
///
/// Traversal policy:
/// - folders are processed via an explicit stack, so tree depth does not grow
///   the call stack;
/// - entries of each folder are sorted by name, and the resulting entries are
///   sorted by relative path, so the output order is deterministic;
/// - symlinks are skipped, not followed; as a consequence a finite tree cannot
///   produce a traversal cycle;
/// - hidden files are included; sockets, devices and other special entries are
///   skipped.
///
/// The run is interruptible: `breaker()` hands out a token that can be shared
/// with another thread; a tripped breaker stops the run with [`E::Aborted`] at
/// the next chunk or file boundary.
///
/// # Example
///
/// ```no_run
/// use fsdigest::{Algorithm, Walker};
///
/// let mut walker = Walker::new("/tmp/some/folder", Algorithm::Sha256).unwrap();
/// let traversal = walker.run().unwrap();
/// for (path, outcome) in &traversal {
///     match outcome {
///         Ok(digest) => println!("{digest}  {}", path.display()),
///         Err(err) => println!("[{}] {}  {}", err.kind(), err, path.display()),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    algorithm: Algorithm,
    breaker: Breaker,
    /// Resolved once at construction; a root that changes kind mid-run is
    /// reported per-entry, not re-validated.
    folder: bool,
}

impl Walker {
    /// Creates a new `Walker` for the given root and algorithm.
    ///
    /// # Errors
    ///
    /// - `E::InvalidRoot` if the root does not exist or is neither a file nor
    ///   a folder.
    /// - `E::IO` if the root's metadata cannot be read for another reason.
    pub fn new<P: AsRef<Path>>(root: P, algorithm: Algorithm) -> Result<Self, E> {
        let root = root.as_ref().to_path_buf();
        let md = fs::metadata(&root).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                E::InvalidRoot(root.clone())
            } else {
                E::IO(err)
            }
        })?;
        if !md.is_file() && !md.is_dir() {
            return Err(E::InvalidRoot(root));
        }
        Ok(Self {
            root,
            algorithm,
            breaker: Breaker::new(),
            folder: md.is_dir(),
        })
    }

    /// Returns the run's cancellation token. Aborting is one-way; to hash
    /// again after an abort, create a new `Walker`.
    pub fn breaker(&self) -> Breaker {
        self.breaker.clone()
    }

    /// Performs the traversal and hashes every regular file found.
    ///
    /// # Returns
    ///
    /// - `Ok(Traversal)` once every reachable file has been visited. Per-file
    ///   failures are inside the entries; the run itself still succeeds.
    /// - `Err(E::Aborted)` if the breaker was tripped.
    pub fn run(&mut self) -> Result<Traversal, E> {
        let now = Instant::now();
        let mut entries: Vec<(PathBuf, FileDigest)> = Vec::new();
        let mut visited = 0;
        if self.folder {
            let mut pending: Vec<PathBuf> = vec![self.root.clone()];
            while let Some(folder) = pending.pop() {
                self.process(&folder, &mut pending, &mut entries, &mut visited)?;
            }
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        } else {
            if self.breaker.is_aborted() {
                return Err(E::Aborted);
            }
            let name = self
                .root
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| self.root.clone());
            let outcome = engine::file(&self.root, self.algorithm, &self.breaker);
            if matches!(outcome, Err(FileError::Interrupted)) {
                return Err(E::Aborted);
            }
            entries.push((name, outcome));
            visited = 1;
        }
        debug!(
            "hashed {} files ({} entries) with {} in {}µs / {}ms / {}s; root: {}",
            visited,
            entries.len(),
            self.algorithm,
            now.elapsed().as_micros(),
            now.elapsed().as_millis(),
            now.elapsed().as_secs(),
            self.root.display()
        );
        Ok(Traversal { entries, visited })
    }

    /// Processes one folder: files are hashed immediately, subfolders are
    /// pushed onto the pending stack. A folder that cannot be read contributes
    /// one error entry and the run continues.
    fn process(
        &self,
        folder: &Path,
        pending: &mut Vec<PathBuf>,
        entries: &mut Vec<(PathBuf, FileDigest)>,
        visited: &mut usize,
    ) -> Result<(), E> {
        if self.breaker.is_aborted() {
            return Err(E::Aborted);
        }
        let read = match fs::read_dir(folder) {
            Ok(read) => read,
            Err(err) => {
                let err = FileError::from_io(folder, err);
                warn!("entry: {}; error: {err}", folder.display());
                entries.push((self.relative(folder), Err(err)));
                return Ok(());
            }
        };
        let mut children: Vec<(PathBuf, fs::FileType)> = Vec::new();
        for el in read {
            let el = match el {
                Ok(el) => el,
                Err(err) => {
                    let err = FileError::from_io(folder, err);
                    warn!("entry: {}; error: {err}", folder.display());
                    entries.push((self.relative(folder), Err(err)));
                    continue;
                }
            };
            match el.file_type() {
                Ok(file_type) => children.push((el.path(), file_type)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    // Vanished between enumeration and the metadata call
                    continue;
                }
                Err(err) => {
                    let path = el.path();
                    let err = FileError::from_io(&path, err);
                    warn!("entry: {}; error: {err}", path.display());
                    entries.push((self.relative(&path), Err(err)));
                }
            }
        }
        children.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (path, file_type) in children {
            if self.breaker.is_aborted() {
                return Err(E::Aborted);
            }
            if file_type.is_symlink() {
                continue;
            }
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() {
                *visited += 1;
                let outcome = engine::file(&path, self.algorithm, &self.breaker);
                if matches!(outcome, Err(FileError::Interrupted)) {
                    return Err(E::Aborted);
                }
                if let Err(ref err) = outcome {
                    warn!("entry: {}; error: {err}", path.display());
                }
                entries.push((self.relative(&path), outcome));
            }
            // Sockets, devices and other special entries are skipped
        }
        Ok(())
    }

    fn relative(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => path.to_path_buf(),
        }
    }
}

/// Hashes every regular file reachable from `root` with the given algorithm.
/// A `root` pointing to a single file yields a one-entry traversal carrying
/// the file's own name as the relative path.
pub fn hash_tree<P: AsRef<Path>>(root: P, algorithm: Algorithm) -> Result<Traversal, E> {
    Walker::new(root, algorithm)?.run()
}

/// Same as [`hash_tree`], but takes the algorithm as a string identifier. The
/// identifier is validated before the root is resolved; an unknown identifier
/// fails with [`E::UnsupportedAlgorithm`] even if the root does not exist.
pub fn hash_tree_named<P: AsRef<Path>>(root: P, name: &str) -> Result<Traversal, E> {
    let algorithm = name.parse::<Algorithm>()?;
    hash_tree(root, algorithm)
}
