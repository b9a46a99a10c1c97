use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum E {
    #[error("Unknown algorithm identifier: {0}")]
    Unsupported(String),
}
