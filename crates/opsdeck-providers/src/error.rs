use std::fmt;

/// Result type for opsdeck-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the directory layer
#[derive(Debug)]
pub enum Error {
    /// Directory not found in the registry
    Directory(String),

    /// The backing data source failed to answer
    Unavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Directory(msg) => write!(f, "Directory error: {}", msg),
            Error::Unavailable(msg) => write!(f, "Directory unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
