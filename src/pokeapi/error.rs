//! Retrieval outcome errors.

use thiserror::Error;

/// Why a species lookup did not produce a `SpeciesInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    /// Upstream answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Connection, DNS, URL or body read failure.
    #[error("{0}")]
    Transport(String),

    /// The configured upstream timeout elapsed.
    #[error("{0}")]
    Timeout(String),

    /// A 2xx body that does not decode into `SpeciesInfo`.
    #[error("unexpected species payload: {0}")]
    Schema(String),
}

impl RetrievalError {
    /// True for failures of the upstream exchange itself (not its payload).
    pub fn is_upstream(&self) -> bool {
        !matches!(self, RetrievalError::Schema(_))
    }

    /// Short machine-readable kind, used in logs, metrics and error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            RetrievalError::Status { status: 404, .. } => "not_found",
            RetrievalError::Status { .. } => "upstream_status",
            RetrievalError::Transport(_) => "upstream_unreachable",
            RetrievalError::Timeout(_) => "upstream_timeout",
            RetrievalError::Schema(_) => "invalid_payload",
        }
    }
}

impl From<reqwest::Error> for RetrievalError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if let Some(status) = err.status() {
            RetrievalError::Status { status: status.as_u16(), message }
        } else if err.is_timeout() {
            RetrievalError::Timeout(message)
        } else {
            RetrievalError::Transport(message)
        }
    }
}

impl From<serde_json::Error> for RetrievalError {
    fn from(err: serde_json::Error) -> Self {
        RetrievalError::Schema(err.to_string())
    }
}

/// Result type for species retrieval.
pub type RetrievalResult<T> = Result<T, RetrievalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RetrievalError::Status {
            status: 404,
            message: "HTTP status client error (404 Not Found) for url (http://x/)".into(),
        };
        assert_eq!(err.to_string(), "HTTP status client error (404 Not Found) for url (http://x/)");

        let err = RetrievalError::Schema("missing field `generation`".into());
        assert_eq!(err.to_string(), "unexpected species payload: missing field `generation`");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(RetrievalError::Status { status: 404, message: String::new() }.kind(), "not_found");
        assert_eq!(RetrievalError::Status { status: 500, message: String::new() }.kind(), "upstream_status");
        assert_eq!(RetrievalError::Transport(String::new()).kind(), "upstream_unreachable");
        assert_eq!(RetrievalError::Timeout(String::new()).kind(), "upstream_timeout");
        assert_eq!(RetrievalError::Schema(String::new()).kind(), "invalid_payload");
    }

    #[test]
    fn test_schema_is_not_upstream() {
        assert!(RetrievalError::Transport("refused".into()).is_upstream());
        assert!(RetrievalError::Timeout("elapsed".into()).is_upstream());
        assert!(!RetrievalError::Schema("bad".into()).is_upstream());
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<crate::pokeapi::SpeciesInfo>("{}").unwrap_err();
        assert!(matches!(RetrievalError::from(err), RetrievalError::Schema(_)));
    }
}
