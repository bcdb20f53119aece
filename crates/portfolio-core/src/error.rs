//! Error types for the portfolio app

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A required form field is empty or whitespace-only.
    /// Handled at the form, never reaches a data source.
    #[error("{0}")]
    Validation(String),

    /// Non-success HTTP status or unreachable endpoint.
    /// `status` is `None` when the request never got a response
    /// (connect failure, timeout).
    #[error("Transport error{}: {message}", status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The mock store was built without the requested collection
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error (preference store)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::CollectionNotFound("projects".to_string());
        assert_eq!(format!("{}", err), "Collection not found: projects");
    }

    #[test]
    fn test_transport_display_with_status() {
        let err = PortfolioError::Transport {
            status: Some(503),
            message: "projects request failed".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Transport error (HTTP 503): projects request failed"
        );
    }

    #[test]
    fn test_transport_display_without_status() {
        let err = PortfolioError::Transport {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(format!("{}", err), "Transport error: connection refused");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
