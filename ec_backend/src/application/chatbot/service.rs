use crate::clients::gemini::GeminiClient;
use crate::domain::scenario::value_object::Scenario;
use crate::error::Result;
use crate::use_cases::chatbot::generate_reply_use_case::GenerateReplyUseCase;
use ec_core::server::payload::chatbot::generation_response::GenerationSuccess;
use serde_json::Value;
use tracing::info;

#[derive(Clone, Debug)]
pub struct ChatbotService {
    gemini: GeminiClient,
}

impl ChatbotService {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    /// Runs one proxy round trip for a raw request body.
    pub async fn reply(&self, body: &[u8]) -> Result<GenerationSuccess> {
        let body: Value = serde_json::from_slice(body)?;
        let scenario = Scenario::from_request_body(&body)?;

        info!(
            "Generating reply for a scenario of {} chars",
            scenario.as_str().chars().count()
        );
        let use_case = GenerateReplyUseCase::new(self.gemini.clone());
        let success = use_case.generate(&scenario).await?;
        info!("Reply generated ({} chars)", success.response.chars().count());
        Ok(success)
    }
}
