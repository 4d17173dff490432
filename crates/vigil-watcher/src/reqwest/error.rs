//! Error types for reqwest-based watch execution.

use thiserror::Error;

/// Result type alias for reqwest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reqwest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The cluster answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code from the cluster.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
}

impl From<Error> for crate::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    crate::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    crate::Error::network_error()
                        .with_message("Connection failed")
                        .with_source(e)
                } else {
                    crate::Error::network_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Serde(e) => crate::Error::serialization()
                .with_message(e.to_string())
                .with_source(e),
            Error::Status { status, body } => {
                let base = match status {
                    401 | 403 => crate::Error::authentication(),
                    404 => crate::Error::not_found(),
                    429 | 503 => crate::Error::service_unavailable(),
                    _ => crate::Error::external_error(),
                };
                base.with_message(format!("cluster returned status {status}: {body}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn status_error(status: u16) -> crate::Error {
        Error::Status {
            status,
            body: String::new(),
        }
        .into()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_error(401).kind(), ErrorKind::Authentication);
        assert_eq!(status_error(403).kind(), ErrorKind::Authentication);
        assert_eq!(status_error(404).kind(), ErrorKind::NotFound);
        assert_eq!(status_error(429).kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(status_error(503).kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(status_error(500).kind(), ErrorKind::ExternalError);
        assert_eq!(status_error(400).kind(), ErrorKind::ExternalError);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(status_error(503).is_retryable());
        assert!(!status_error(404).is_retryable());
    }

    #[test]
    fn test_serde_maps_to_serialization() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: crate::Error = Error::Serde(serde_err).into();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }
}
