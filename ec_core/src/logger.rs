use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `CHATBOT_DEBUG=true` turns on debug
/// output and everything else logs at info.
pub fn init_tracing() {
    let chatbot_debug = env::var("CHATBOT_DEBUG").unwrap_or_else(|_| "false".to_string());
    let default_level = default_level(&chatbot_debug);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a subscriber may already be installed (tests, embedding binaries)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn default_level(chatbot_debug: &str) -> &'static str {
    if chatbot_debug.eq_ignore_ascii_case("true") || chatbot_debug == "1" {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level("true"), "debug");
        assert_eq!(default_level("TRUE"), "debug");
        assert_eq!(default_level("1"), "debug");
        assert_eq!(default_level("false"), "info");
        assert_eq!(default_level(""), "info");
    }
}
