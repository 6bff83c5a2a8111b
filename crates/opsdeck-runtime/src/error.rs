use std::fmt;

/// Result type for opsdeck-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Directory layer error
    Directory(opsdeck_providers::Error),

    /// Schema layer error
    Schema(opsdeck_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Rejected mock credentials
    InvalidCredentials,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Directory(err) => write!(f, "Directory error: {}", err),
            Error::Schema(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidCredentials => write!(f, "Invalid credentials"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Directory(err) => Some(err),
            Error::Schema(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::InvalidCredentials => None,
        }
    }
}

impl From<opsdeck_providers::Error> for Error {
    fn from(err: opsdeck_providers::Error) -> Self {
        Error::Directory(err)
    }
}

impl From<opsdeck_types::Error> for Error {
    fn from(err: opsdeck_types::Error) -> Self {
        Error::Schema(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
