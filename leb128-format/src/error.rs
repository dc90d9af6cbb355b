//! Error types for LEB128 decoding

use thiserror::Error;

/// LEB128 error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Leb128Error {
    /// Input is empty or ends before a terminating group.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
    /// Encoded value does not fit the target integer width.
    #[error("Overflow: {0}")]
    Overflow(String),
}

impl Leb128Error {
    pub(crate) fn empty() -> Self {
        Leb128Error::InvalidEncoding("empty input".to_string())
    }

    pub(crate) fn unterminated(len: usize) -> Self {
        Leb128Error::InvalidEncoding(format!(
            "no terminating group in {} byte(s)",
            len
        ))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Leb128Error>;
