use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("login required")]
    Unauthorized,

    #[error("{message} ({code})")]
    Rejected { code: String, message: String },

    #[error("response did not contain a result")]
    MissingResult,

    #[error("failed to encode request part: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the view should drop the session and send the user to login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Short message suitable for an inline error or notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Status { message, .. } | ApiError::Rejected { message, .. }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            ApiError::Unauthorized => "Please log in to continue.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Rejected {
            code: "POST404".to_string(),
            message: "Post not found".to_string(),
        };
        assert_eq!(err.user_message(), "Post not found");
        assert_eq!(err.to_string(), "Post not found (POST404)");

        let blank = ApiError::Status {
            status: 500,
            message: " ".to_string(),
        };
        assert_eq!(blank.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::MissingResult.is_unauthorized());
    }
}
