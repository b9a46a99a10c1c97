mod error;

use crate::hasher::{blake, rustcrypto, Hasher};
pub use error::E;
use std::{fmt, str::FromStr};

/// The closed set of digest functions registered with the engine. Each variant
/// maps to exactly one concrete hasher; identifiers that are not listed here
/// are rejected with [`E::Unsupported`] before any IO happens.
///
/// The set can be enumerated at runtime with [`Algorithm::ALL`], e.g. to
/// populate a selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Sha3_512,
    Blake3,
}

impl Algorithm {
    /// All registered algorithms, in registration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Sha3_512,
        Algorithm::Blake3,
    ];

    /// The canonical lowercase identifier of the algorithm. `FromStr` accepts
    /// exactly these names (case-insensitive).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Sha3_512 => "sha3-512",
            Self::Blake3 => "blake3",
        }
    }

    /// Creates a fresh incremental hasher for the algorithm. One hasher serves
    /// exactly one stream.
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            Self::Md5 => Box::new(rustcrypto::Md5::new()),
            Self::Sha1 => Box::new(rustcrypto::Sha1::new()),
            Self::Sha256 => Box::new(rustcrypto::Sha256::new()),
            Self::Sha512 => Box::new(rustcrypto::Sha512::new()),
            Self::Sha3_512 => Box::new(rustcrypto::Sha3_512::new()),
            Self::Blake3 => Box::new(blake::Blake::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = E;

    fn from_str(ident: &str) -> Result<Self, Self::Err> {
        Ok(match ident.to_ascii_lowercase().as_str() {
            "md5" => Self::Md5,
            "sha1" => Self::Sha1,
            "sha256" => Self::Sha256,
            "sha512" => Self::Sha512,
            "sha3-512" => Self::Sha3_512,
            "blake3" => Self::Blake3,
            _ => return Err(E::Unsupported(ident.to_string())),
        })
    }
}
