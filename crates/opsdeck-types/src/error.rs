use std::fmt;

/// Result type for opsdeck-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the schema layer
#[derive(Debug)]
pub enum Error {
    /// Caller supplied an out-of-domain value (zero page, unknown enum token)
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
