use crate::error::{ErrorBackend, Result};
use ec_core::error::ErrorCore;
use ec_core::server::default_config::{
    DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MAX_OUTPUT_TOKENS, DEFAULT_GEMINI_MODEL,
    DEFAULT_GEMINI_TEMPERATURE, DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT,
    DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use std::env;
use std::fmt;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings of the upstream generation api.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

// keeps the key out of debug logs
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            max_output_tokens: DEFAULT_GEMINI_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_GEMINI_TEMPERATURE,
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// The credential, or a configuration error naming the missing variable.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(ErrorBackend::MissingCredential(GEMINI_API_KEY_ENV))
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub gemini: GeminiConfig,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source; blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = var("SERVER_BACKEND_HOST").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
        let port = var("SERVER_BACKEND_PORT").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ErrorCore::InvalidEnvValue {
                name: "SERVER_BACKEND_PORT",
                value: port.clone(),
            })?;
        let protocol =
            var("SERVER_BACKEND_PROTOCOL").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));

        let defaults = GeminiConfig::default();
        let gemini = GeminiConfig {
            api_key: var(GEMINI_API_KEY_ENV),
            api_base: var("GEMINI_API_BASE").unwrap_or(defaults.api_base),
            model: var("GEMINI_MODEL").unwrap_or(defaults.model),
            ..defaults
        };

        Ok(BackendConfig {
            host,
            port,
            protocol,
            gemini,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
