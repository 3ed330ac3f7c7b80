/*
[INPUT]:  Error sources (credentials, transport, HTTP status, decoding)
[OUTPUT]: Structured error type shared by every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Poloniex adapter
#[derive(Error, Debug)]
pub enum PoloniexError {
    /// Missing or unusable configuration, raised before any I/O
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network, timeout or TLS failure, passed through from reqwest
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-200 response; the body is discarded
    #[error("{code} {reason}")]
    Status { code: u16, reason: String },

    /// 200 response whose body is not JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl PoloniexError {
    /// Build a status error using the standard reason phrase for `status`.
    pub fn status(status: StatusCode) -> Self {
        Self::status_with_reason(status, None)
    }

    /// Build a status error from the reason phrase the server sent,
    /// falling back to the standard phrase when there is none.
    pub fn status_with_reason(status: StatusCode, reason: Option<&[u8]>) -> Self {
        let reason = match reason {
            Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        };
        PoloniexError::Status {
            code: status.as_u16(),
            reason,
        }
    }

    /// Check if the error was raised locally for missing configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, PoloniexError::Config(_))
    }

    /// HTTP status code, for status errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PoloniexError::Status { code, .. } => Some(*code),
            PoloniexError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PoloniexError::Http(err) if err.is_timeout())
    }
}

/// Result type alias for Poloniex operations
pub type Result<T> = std::result::Result<T, PoloniexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PoloniexError::status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "500 Internal Server Error");
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_status_error_prefers_server_reason() {
        let err = PoloniexError::status_with_reason(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some(b"Exchange Down"),
        );
        assert_eq!(err.to_string(), "500 Exchange Down");
    }

    #[test]
    fn test_status_error_unknown_reason() {
        let err = PoloniexError::status(StatusCode::from_u16(599).unwrap());
        assert_eq!(err.to_string(), "599 ");
    }

    #[test]
    fn test_error_is_config_error() {
        assert!(PoloniexError::Config("missing".into()).is_config_error());
        assert!(!PoloniexError::status(StatusCode::FORBIDDEN).is_config_error());
        assert!(!PoloniexError::Config("missing".into()).is_timeout());
    }
}
