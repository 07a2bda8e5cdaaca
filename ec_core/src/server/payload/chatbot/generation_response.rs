use serde::{Deserialize, Serialize};

/// Token counters reported by the generation api.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationUsage {
    pub prompt_tokens: u64,
    pub candidates_tokens: u64,
    pub total_tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationSuccess {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<GenerationUsage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationError {
    pub error: String,
}

/// Either variant goes over the wire as a bare object; a body carrying
/// `error` is always read back as [`GenerationResponse::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Error(GenerationError),
    Success(GenerationSuccess),
}

impl GenerationResponse {
    pub fn error(error: impl Into<String>) -> Self {
        GenerationResponse::Error(GenerationError {
            error: error.into(),
        })
    }
}

impl From<GenerationSuccess> for GenerationResponse {
    fn from(success: GenerationSuccess) -> Self {
        GenerationResponse::Success(success)
    }
}
