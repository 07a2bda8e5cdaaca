use crate::config::GeminiConfig;
use crate::error::{ErrorBackend, Result};
use ec_core::server::payload::gemini::generate_content_request::{
    GenerateContentRequest, GenerationConfig,
};
use ec_core::server::payload::gemini::generate_content_response::{
    GeminiErrorResponse, GenerateContentResponse,
};
use reqwest::{Client, Response};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: Arc<GeminiConfig>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        GeminiClient {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            max_output_tokens: self.config.max_output_tokens,
            temperature: self.config.temperature,
        }
    }

    async fn handle_response(&self, res: Response) -> Result<GenerateContentResponse> {
        let status = res.status();
        let body = res.bytes().await.map_err(|e| e.without_url())?;

        if !status.is_success() {
            let message = serde_json::from_slice::<GeminiErrorResponse>(&body)
                .ok()
                .and_then(|payload| payload.message().map(str::to_string));
            error!(
                "Gemini API error {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ErrorBackend::Upstream { status, message });
        }

        serde_json::from_slice::<GenerateContentResponse>(&body).map_err(|e| {
            error!("Gemini API returned an unreadable body: {}", e);
            ErrorBackend::InvalidResponseFormat
        })
    }

    /// Sends one `generateContent` call. The credential is checked before any
    /// network traffic happens.
    pub async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let api_key = self.config.api_key()?;
        let url = self.config.generate_content_url();
        let payload = GenerateContentRequest::from_prompt(prompt, self.generation_config());

        debug!("Calling Gemini model {}", self.config.model);
        let result = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
            // the url carries the key
            .map_err(|e| e.without_url())?;

        self.handle_response(result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::MockGemini;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_generate_content_sends_prompt_and_key() {
        let mock = MockGemini::start(
            StatusCode::OK,
            json!({ "candidates": [{ "content": { "parts": [{ "text": "hello" }] } }] }),
        )
        .await;
        let client = GeminiClient::new(mock.config("test-key"));

        let response = client.generate_content("a prompt").await.unwrap();
        assert_eq!(response.first_text(), Some("hello"));

        let captured = mock.last_request().await.unwrap();
        assert_eq!(captured.path, "/v1beta/models/gemini-1.5-flash:generateContent");
        assert_eq!(captured.query.as_deref(), Some("key=test-key"));
        assert_eq!(
            captured.body,
            json!({
                "contents": [{ "parts": [{ "text": "a prompt" }] }],
                "generationConfig": { "maxOutputTokens": 150, "temperature": 0.3 }
            })
        );
    }

    #[tokio::test]
    async fn test_upstream_error_message_is_extracted() {
        let mock = MockGemini::start(
            StatusCode::FORBIDDEN,
            json!({ "error": { "code": 403, "message": "API key not valid." } }),
        )
        .await;
        let client = GeminiClient::new(mock.config("bad-key"));

        let err = client.generate_content("a prompt").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.public_message(), "Gemini API error: API key not valid.");
    }

    #[tokio::test]
    async fn test_upstream_error_with_unreadable_body() {
        let mock = MockGemini::start_raw(StatusCode::SERVICE_UNAVAILABLE, "upstream down").await;
        let client = GeminiClient::new(mock.config("key"));

        let err = client.generate_content("a prompt").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.public_message(), "Gemini API error: Unknown error");
    }

    #[tokio::test]
    async fn test_success_with_unreadable_body_is_format_error() {
        let mock = MockGemini::start_raw(StatusCode::OK, "<html>not json</html>").await;
        let client = GeminiClient::new(mock.config("key"));

        let err = client.generate_content("a prompt").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_sending() {
        let mock = MockGemini::start(StatusCode::OK, json!({})).await;
        let client = GeminiClient::new(mock.config_without_key());

        let err = client.generate_content("a prompt").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(mock.last_request().await.is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_hides_key() {
        // nothing listens on the discard port of localhost
        let config = GeminiConfig::default()
            .with_api_key("do-not-leak")
            .with_api_base("http://127.0.0.1:9/v1beta");
        let client = GeminiClient::new(config);

        let err = client.generate_content("a prompt").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(!err.public_message().contains("do-not-leak"));
    }
}
