use crate::error::{ErrorBackend, Result};
use serde_json::Value;

/// Minimum length a scenario must keep once trimmed, in UTF-16 code units
/// (what a browser reports as the string length).
pub const MIN_SCENARIO_CHARS: usize = 10;

const PROMPT_PREAMBLE: &str = "You are a helpful assistant that can help me with what I am feeling. \
Here is what I've been going through (Limit your response to 150 tokens): \n\n";

/// User text that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario(String);

impl Scenario {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().encode_utf16().count() < MIN_SCENARIO_CHARS {
            return Err(ErrorBackend::InvalidScenario);
        }
        Ok(Scenario(text))
    }

    /// Pulls `text` out of a request body; a missing or non-string field is
    /// rejected like a short one. A `null` document has no field to read and
    /// is not a validation failure.
    pub fn from_request_body(body: &Value) -> Result<Self> {
        if body.is_null() {
            return Err(ErrorBackend::NullRequestBody);
        }
        match body.get("text") {
            Some(Value::String(text)) => Scenario::new(text.as_str()),
            _ => Err(ErrorBackend::InvalidScenario),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_prompt(&self) -> String {
        format!("{PROMPT_PREAMBLE}{}", self.0)
    }
}
