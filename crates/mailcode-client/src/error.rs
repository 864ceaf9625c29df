//! Error types for client operations

use thiserror::Error;

/// Errors from client operations.
///
/// One variant per failure class a caller can meaningfully branch on:
/// endpoint construction, transport, service rejection, and JSON shape
/// mismatch. Retry and backoff policy belongs to the caller; nothing here
/// is recovered from internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The base URL and path did not combine into a valid URL.
    #[error("invalid endpoint from base `{base}` and path `{path}`: {reason}")]
    InvalidEndpoint {
        /// Base URL the client was constructed with.
        base: String,
        /// Path passed to the call.
        path: String,
        /// Parse failure description.
        reason: String,
    },

    /// Network-level failure: connect, TLS, timeout, or reading the
    /// response body. Whatever the transport surfaces, unretried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-200 status. Carries the raw response
    /// body as diagnostic text; status codes are not interpreted beyond
    /// 200 meaning success.
    #[error("service rejected request with status {status}: {body}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A request body failed to serialize, or a response body did not match
    /// the expected shape (e.g. the credential returned by authorization).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of a service rejection, if that is what this error is.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_display_includes_status_and_body() {
        let err = Error::Rejected {
            status: 400,
            body: "bad email".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"), "got: {msg}");
        assert!(msg.contains("bad email"), "got: {msg}");
    }

    #[test]
    fn status_helper_only_answers_for_rejections() {
        let rejected = Error::Rejected {
            status: 401,
            body: "code expired".into(),
        };
        assert_eq!(rejected.status(), Some(401));

        let invalid = Error::InvalidEndpoint {
            base: "not a url".into(),
            path: "/auth/".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(invalid.status(), None);
    }

    #[test]
    fn decode_failure_is_distinct_from_rejection() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.status(), None);
    }
}
