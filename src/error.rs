use std::io;
use thiserror::Error;

/// Custom result type for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Oxford Face SDK
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A call violated one of the API's preconditions. Never worth retrying.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Local IO failure while reading an image file
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),

    /// Network-level failure before a response was obtained (DNS, timeout,
    /// connection reset). Idempotent operations may be retried by the caller.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response shape contradicts the operation's contract
    #[error("Invalid data format: {0}")]
    InvalidData(String),

    /// The service answered with a non-2xx status
    #[error("Service error (HTTP {status}): {message}")]
    Service {
        /// HTTP status code returned by the service
        status: u16,
        /// Service-specific error code, e.g. `FaceListNotFound`
        code: Option<String>,
        /// Human-readable error message
        message: String,
    },
}

impl Error {
    /// Status code of the service response, when the error came from one.
    ///
    /// Useful to tell a 404 from a 429 without destructuring the variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use std::io;

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();

        match error {
            Error::IOError(_) => {} // Success
            _ => panic!("Expected IOError variant"),
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: Error = json_error.into();

        match error {
            Error::JsonError(_) => {} // Success
            _ => panic!("Expected JsonError variant"),
        }
    }

    #[test]
    fn test_status_accessor() {
        let error = Error::Service {
            status: 429,
            code: Some("RateLimitExceeded".to_string()),
            message: "Rate limit is exceeded.".to_string(),
        };
        assert_eq!(error.status(), Some(429));

        let error = Error::InvalidRequest("bad call".to_string());
        assert_eq!(error.status(), None);
    }
}
