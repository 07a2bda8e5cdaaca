use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ec_core::server::payload::chatbot::generation_response::GenerationResponse;
use thiserror::Error;
use tracing::error;

pub type ResultAPI = std::result::Result<Json<GenerationResponse>, crate::error::ErrorBackend>;
pub type Result<T> = std::result::Result<T, crate::error::ErrorBackend>;

pub const MESSAGE_FAILED_PREFIX: &str = "Failed to generate response: ";
pub const MESSAGE_FAILED_UNKNOWN: &str = "Failed to generate response due to an unknown error.";

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] ec_core::error::ErrorCore),

    #[error("Please provide scenario (minimum 10 characters).")]
    InvalidScenario,

    #[error("Missing {0} environment variable.")]
    MissingCredential(&'static str),

    #[error("Gemini API error: {}", .message.as_deref().unwrap_or("Unknown error"))]
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Invalid response format from Gemini API")]
    InvalidResponseFormat,

    #[error("{0}")]
    InvalidRequestBody(#[from] serde_json::Error),

    #[error("Cannot read property 'text' of a null request body")]
    NullRequestBody,

    #[error("{0}")]
    RequestBodyRejected(#[from] BytesRejection),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    IO(#[from] std::io::Error),
}

/// How a failure surfaces to the caller of the chatbot endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Upstream,
    Format,
    Unknown,
}

impl ErrorBackend {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorBackend::InvalidScenario => ErrorKind::Validation,
            ErrorBackend::MissingCredential(_) => ErrorKind::Configuration,
            ErrorBackend::Upstream { .. } => ErrorKind::Upstream,
            ErrorBackend::InvalidResponseFormat => ErrorKind::Format,
            ErrorBackend::Core(_)
            | ErrorBackend::InvalidRequestBody(_)
            | ErrorBackend::NullRequestBody
            | ErrorBackend::RequestBodyRejected(_)
            | ErrorBackend::Http(_)
            | ErrorBackend::IO(_) => ErrorKind::Unknown,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::InvalidScenario => StatusCode::BAD_REQUEST,
            ErrorBackend::Upstream { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Upstream | ErrorKind::Format => self.to_string(),
            ErrorKind::Configuration | ErrorKind::Unknown => {
                let description = self.to_string();
                if description.trim().is_empty() {
                    MESSAGE_FAILED_UNKNOWN.to_string()
                } else {
                    format!("{MESSAGE_FAILED_PREFIX}{description}")
                }
            }
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();

        match self.kind() {
            ErrorKind::Validation => tracing::warn!("Rejected request: {}", message),
            _ => error!("ErrorBackend occurred ({:?}, {}): {}", self.kind(), status, message),
        }

        (status, Json(GenerationResponse::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = ErrorBackend::InvalidScenario.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Please provide scenario (minimum 10 characters)." })
        );
    }

    #[tokio::test]
    async fn test_missing_credential_response_names_variable() {
        let response = ErrorBackend::MissingCredential("GEMINI_API_KEY").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to generate response: Missing GEMINI_API_KEY environment variable." })
        );
    }

    #[tokio::test]
    async fn test_upstream_error_keeps_status() {
        let err = ErrorBackend::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: Some("Quota exceeded".into()),
        };
        assert_eq!(err.kind(), ErrorKind::Upstream);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Gemini API error: Quota exceeded" })
        );
    }

    #[test]
    fn test_upstream_error_without_message() {
        let err = ErrorBackend::Upstream {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(err.public_message(), "Gemini API error: Unknown error");
    }

    #[test]
    fn test_format_error_message() {
        let err = ErrorBackend::InvalidResponseFormat;
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Invalid response format from Gemini API");
    }

    #[test]
    fn test_malformed_body_is_prefixed() {
        let json_err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err = ErrorBackend::from(json_err);
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.public_message().starts_with(MESSAGE_FAILED_PREFIX));
    }

    #[test]
    fn test_failure_without_description_uses_generic_message() {
        let err = ErrorBackend::from(std::io::Error::other(""));
        assert_eq!(err.public_message(), MESSAGE_FAILED_UNKNOWN);
    }
}
