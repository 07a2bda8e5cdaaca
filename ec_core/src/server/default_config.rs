pub const DEFAULT_SERVER_BACKEND_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

/// Base url the terminal client talks to when nothing else is configured.
pub const DEFAULT_SERVER_BACKEND_URL: &str = "http://localhost:3000";

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_MAX_OUTPUT_TOKENS: u32 = 150;
pub const DEFAULT_GEMINI_TEMPERATURE: f32 = 0.3;
