pub mod blake;
pub mod rustcrypto;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum E {
    #[error("Hashing not finished")]
    NotFinished,
    #[error("Hashing already finished")]
    AlreadyFinished,
}

/// A trait that defines the behavior of an incremental hasher. One instance
/// serves exactly one stream; `Algorithm::hasher()` creates a fresh instance
/// per file.
///
/// The engine drives an instance as follows:
/// - Add stream content chunk by chunk (with method `absorb(..)`).
/// - Finalize the calculation once the stream is exhausted (with method `finish()`).
/// - Request the digest bytes (with method `hash()`).
/// - Drop the instance.
pub trait Hasher: Send {
    /// Absorbs data into the hasher. This method processes the input data and
    /// updates the hasher state. It might be called multiple times during the
    /// reading of a stream.
    ///
    /// # Parameters
    ///
    /// - `data`: A reference to a slice of bytes to be absorbed by the hasher.
    fn absorb(&mut self, data: &[u8]);

    /// Finalizes the hashing process. This method should be called after all
    /// data has been absorbed, and only once.
    ///
    /// # Returns
    ///
    /// - `Ok(())` on success.
    /// - `Err(E::AlreadyFinished)` if called a second time.
    fn finish(&mut self) -> Result<(), E>;

    /// Retrieves the computed digest. This method should be called after
    /// `finish()`.
    ///
    /// # Returns
    ///
    /// - `Ok(&[u8])` containing the digest bytes if hashing is finished.
    /// - `Err(E::NotFinished)` otherwise.
    fn hash(&self) -> Result<&[u8], E>;
}
