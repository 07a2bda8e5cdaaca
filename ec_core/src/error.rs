use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnvValue { name: &'static str, value: String },
}
