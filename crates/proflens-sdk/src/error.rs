use std::fmt;

/// Result type for proflens-sdk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can surface through the facade
#[derive(Debug)]
pub enum Error {
    /// A stored trace payload failed to decode
    Trace(proflens_trace::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Trace(err) => write!(f, "Trace error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Trace(err) => Some(err),
        }
    }
}

impl From<proflens_trace::Error> for Error {
    fn from(err: proflens_trace::Error) -> Self {
        Error::Trace(err)
    }
}
