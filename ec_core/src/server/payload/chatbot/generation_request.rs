use serde::{Deserialize, Serialize};

/// Body accepted by the chatbot endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationRequest {
    pub text: String,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        GenerationRequest { text: text.into() }
    }
}
