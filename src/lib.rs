#![doc = include_str!("../README.md")]

pub mod algorithm;
mod breaker;
pub mod engine;
mod error;
pub mod hasher;
#[cfg(test)]
pub(crate) mod test;
pub mod walker;

pub use algorithm::Algorithm;
pub use breaker::Breaker;
pub use engine::{hash_file, hash_file_named, Digest, FileDigest, FileError};
pub use error::E;
pub use hasher::Hasher;
pub use walker::{hash_tree, hash_tree_named, Traversal, Walker};
