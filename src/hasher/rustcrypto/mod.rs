use super::{Hasher, E};
use digest::Digest;

/// Hasher backed by any RustCrypto `digest::Digest` implementation. All
/// registered algorithms except BLAKE3 go through this wrapper.
pub struct RustCrypto<D: Digest + Send> {
    hasher: Option<D>,
    hash: Option<Vec<u8>>,
}

pub type Md5 = RustCrypto<md5::Md5>;
pub type Sha1 = RustCrypto<sha1::Sha1>;
pub type Sha256 = RustCrypto<sha2::Sha256>;
pub type Sha512 = RustCrypto<sha2::Sha512>;
pub type Sha3_512 = RustCrypto<sha3::Sha3_512>;

impl<D: Digest + Send> Default for RustCrypto<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + Send> RustCrypto<D> {
    pub fn new() -> Self {
        RustCrypto {
            hasher: Some(D::new()),
            hash: None,
        }
    }
}

impl<D: Digest + Send> Hasher for RustCrypto<D> {
    fn absorb(&mut self, data: &[u8]) {
        if let Some(hasher) = self.hasher.as_mut() {
            hasher.update(data);
        }
    }

    fn finish(&mut self) -> Result<(), E> {
        let Some(hasher) = self.hasher.take() else {
            return Err(E::AlreadyFinished);
        };
        self.hash = Some(hasher.finalize().to_vec());
        Ok(())
    }

    fn hash(&self) -> Result<&[u8], E> {
        self.hash.as_deref().ok_or(E::NotFinished)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut hasher = Sha256::new();
        assert_eq!(hasher.hash(), Err(E::NotFinished));
        hasher.absorb(b"abc");
        assert!(hasher.finish().is_ok());
        assert_eq!(hasher.finish(), Err(E::AlreadyFinished));
        assert_eq!(hasher.hash().map(<[u8]>::len), Ok(32));
    }
}
