//! Errors returned by [`crate::ApiClient`].

use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to the remote service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 or 403: the token is missing, expired, or lacks the required role.
    #[error("not authorized (HTTP {status})")]
    Unauthorized {
        status: u16,
        message: Option<String>,
    },

    /// Any other non-success status.
    #[error("request failed with HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// An authenticated endpoint was called without a stored token.
    #[error("not signed in")]
    MissingToken,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Error body shapes the service is known to send.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-success response from its status code and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        match status {
            401 | 403 => ApiError::Unauthorized { status, message },
            _ => ApiError::Status { status, message },
        }
    }

    /// Whether the caller must drop the session and send the user to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. } | ApiError::MissingToken)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } | ApiError::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// The server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message, .. } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Text for a status banner: the server's message or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Rejections from a third-party service say nothing about our session.
    pub fn third_party(self) -> Self {
        match self {
            ApiError::Unauthorized { status, message } => ApiError::Status { status, message },
            other => other,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::from_status(status.as_u16(), "")
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        for status in [401, 403] {
            let err = ApiError::from_status(status, "");
            assert!(err.is_auth_failure(), "{status} should be an auth failure");
            assert_eq!(err.status(), Some(status));
        }
        assert!(ApiError::MissingToken.is_auth_failure());
    }

    #[test]
    fn test_other_statuses_are_not_auth_failures() {
        for status in [400, 404, 409, 500, 502] {
            assert!(!ApiError::from_status(status, "").is_auth_failure());
        }
        assert!(!ApiError::Network("offline".into()).is_auth_failure());
    }

    #[test]
    fn test_server_message_extraction() {
        let err = ApiError::from_status(400, r#"{"message":"User already exists"}"#);
        assert_eq!(err.server_message(), Some("User already exists"));
        assert_eq!(err.user_message("Signup failed"), "User already exists");

        let err = ApiError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(err.server_message(), Some("boom"));
    }

    #[test]
    fn test_fallback_message() {
        let html = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(html.server_message(), None);
        assert_eq!(html.user_message("Server Error"), "Server Error");

        let blank = ApiError::from_status(400, r#"{"message":"   "}"#);
        assert_eq!(blank.server_message(), None);

        assert_eq!(
            ApiError::Network("offline".into()).user_message("Server Error"),
            "Server Error"
        );
    }

    #[test]
    fn test_third_party_rejection_keeps_session() {
        let err = ApiError::from_status(401, r#"{"error":"bad key"}"#).third_party();
        assert!(!err.is_auth_failure());
        assert_eq!(err.status(), Some(401));
        assert!(ApiError::MissingToken.third_party().is_auth_failure());
    }
}
