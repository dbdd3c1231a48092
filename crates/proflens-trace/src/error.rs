use std::fmt;

/// Result type for proflens-trace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a trace payload
#[derive(Debug)]
pub enum Error {
    /// Payload is not a well-formed serialized trace message
    Malformed(prost::DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Malformed(err) => write!(f, "Malformed trace payload: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Malformed(err) => Some(err),
        }
    }
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Error::Malformed(err)
    }
}
