use serde_json::Value;
use thiserror::Error;

/// Failure of a single API round trip
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced an HTTP response
    #[error("Network error: {message}")]
    Transport { message: String },

    /// 401 or 403; the stored session has already been dealt with
    #[error("{message}")]
    Unauthorized {
        status: u16,
        data: Option<Value>,
        message: String,
    },

    /// Any other non-2xx response
    #[error("{message}")]
    Status {
        status: u16,
        data: Option<Value>,
        message: String,
    },

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Auth,
    Status,
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Unauthorized { .. } => FetchErrorKind::Auth,
            FetchError::Status { .. } => FetchErrorKind::Status,
            FetchError::Encode(_) | FetchError::Decode(_) => FetchErrorKind::Decode,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Unauthorized { status, .. } | FetchError::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Parsed JSON body of the failed response, if it had one.
    pub fn data(&self) -> Option<&Value> {
        match self {
            FetchError::Unauthorized { data, .. } | FetchError::Status { data, .. } => {
                data.as_ref()
            }
            _ => None,
        }
    }

    /// Whether a screen may substitute its local mirror for this failure.
    ///
    /// Auth failures are excluded: the session is gone and the user is being
    /// sent to the login page.
    pub fn allows_mock_fallback(&self) -> bool {
        !matches!(self.kind(), FetchErrorKind::Auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_policy() {
        let transport = FetchError::Transport { message: "offline".into() };
        let server = FetchError::Status { status: 500, data: None, message: "500 Internal Server Error".into() };
        let auth = FetchError::Unauthorized { status: 401, data: None, message: "401 Unauthorized".into() };
        let decode = FetchError::Decode("expected array".into());

        assert!(transport.allows_mock_fallback());
        assert!(server.allows_mock_fallback());
        assert!(decode.allows_mock_fallback());
        assert!(!auth.allows_mock_fallback());
        assert_eq!(auth.kind(), FetchErrorKind::Auth);
    }

    #[test]
    fn test_accessors() {
        let err = FetchError::Status {
            status: 422,
            data: Some(json!({"message": "bad"})),
            message: "bad".into(),
        };
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.data(), Some(&json!({"message": "bad"})));
        assert_eq!(err.to_string(), "bad");
        assert_eq!(FetchError::Decode("x".into()).status(), None);
    }
}
