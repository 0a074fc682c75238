use thiserror::Error;

/// Transport failures talking to the network API.
///
/// These never reach the user raw: session loading maps any of them to a
/// signed-out store, and forms show [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            other => ApiError::Status(other),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Invalid email or password.",
            ApiError::Network(_) => "The server could not be reached. Try again later.",
            ApiError::Status(status) if *status >= 500 => "The server failed to respond. Try again later.",
            _ => "Something went wrong. Try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(502), ApiError::Status(502));
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = ApiError::Decode("expected value at line 1 column 1".into());
        assert!(!err.user_message().contains("line 1"));
        assert_eq!(
            ApiError::Status(503).user_message(),
            "The server failed to respond. Try again later."
        );
    }
}
