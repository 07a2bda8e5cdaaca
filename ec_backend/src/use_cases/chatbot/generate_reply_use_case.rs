use crate::clients::gemini::GeminiClient;
use crate::domain::scenario::value_object::Scenario;
use crate::error::{ErrorBackend, Result};
use ec_core::server::payload::chatbot::generation_response::{GenerationSuccess, GenerationUsage};
use ec_core::server::payload::gemini::generate_content_response::GenerateContentResponse;
use tracing::debug;

pub struct GenerateReplyUseCase {
    gemini: GeminiClient,
}

impl GenerateReplyUseCase {
    pub fn new(gemini: GeminiClient) -> Self {
        GenerateReplyUseCase { gemini }
    }

    pub async fn generate(&self, scenario: &Scenario) -> Result<GenerationSuccess> {
        let prompt = scenario.to_prompt();
        let response = self.gemini.generate_content(&prompt).await?;
        let success = to_generation_success(&response)?;
        if let Some(usage) = &success.usage {
            debug!(
                "Gemini usage: prompt={} candidates={} total={}",
                usage.prompt_tokens, usage.candidates_tokens, usage.total_tokens
            );
        }
        Ok(success)
    }
}

/// Maps an upstream body onto the local success shape. Usage is always
/// reported, missing counters become 0.
pub fn to_generation_success(response: &GenerateContentResponse) -> Result<GenerationSuccess> {
    let text = response
        .first_text()
        .ok_or(ErrorBackend::InvalidResponseFormat)?;

    let usage = response.usage_metadata.unwrap_or_default();
    Ok(GenerationSuccess {
        response: text.trim().to_string(),
        usage: Some(GenerationUsage {
            prompt_tokens: usage.prompt_token_count.unwrap_or(0),
            candidates_tokens: usage.candidates_token_count.unwrap_or(0),
            total_tokens: usage.total_token_count.unwrap_or(0),
        }),
    })
}
