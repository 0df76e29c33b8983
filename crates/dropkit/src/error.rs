//! Error types for asynchronous item fetching.

use std::fmt;
use std::io;

/// Errors produced by an item-fetch operation.
///
/// The binder never interprets the transport behind a fetch; these
/// variants exist so callers can classify failures when rendering them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The underlying transport failed (connection refused, DNS, I/O).
    Transport(String),
    /// The fetch timed out.
    Timeout,
    /// The fetch was cancelled before completing.
    Cancelled,
    /// The response arrived but could not be decoded into items.
    Decode(String),
    /// The data source reported an error status.
    Status {
        /// The status code reported by the source.
        code: u16,
        /// Optional message accompanying the status.
        message: Option<String>,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Transport error: {msg}"),
            Self::Timeout => write!(f, "Fetch timed out"),
            Self::Cancelled => write!(f, "Fetch was cancelled"),
            Self::Decode(msg) => write!(f, "Decode error: {msg}"),
            Self::Status { code, message } => {
                if let Some(msg) = message {
                    write!(f, "Status {code}: {msg}")
                } else {
                    write!(f, "Status {code}")
                }
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<io::Error> for FetchError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut => Self::Timeout,
            io::ErrorKind::InvalidData => Self::Decode(err.to_string()),
            _ => Self::Transport(err.to_string()),
        }
    }
}

/// A specialized Result type for item-fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FetchError::Transport("connection refused".into()).to_string(),
            "Transport error: connection refused"
        );
        assert_eq!(FetchError::Timeout.to_string(), "Fetch timed out");
        assert_eq!(
            FetchError::Status {
                code: 503,
                message: Some("unavailable".into())
            }
            .to_string(),
            "Status 503: unavailable"
        );
        assert_eq!(
            FetchError::Status {
                code: 404,
                message: None
            }
            .to_string(),
            "Status 404"
        );
    }

    #[test]
    fn test_from_io_error() {
        let err = io::Error::new(io::ErrorKind::TimedOut, "slow");
        assert_eq!(FetchError::from(err), FetchError::Timeout);

        let err = io::Error::new(io::ErrorKind::InvalidData, "bad payload");
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));

        let err = io::Error::new(io::ErrorKind::ConnectionRefused, "nope");
        assert!(matches!(FetchError::from(err), FetchError::Transport(_)));
    }
}
