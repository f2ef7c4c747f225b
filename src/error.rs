use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when configuring or running a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input length is zero or not a power of two.
    #[error("input length must be a power of 2, got {0}")]
    InvalidLength(usize),
    /// The input does not match the size of a [`Configuration`](struct.Configuration.html).
    #[error("input length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
