use crate::application::chatbot::service::ChatbotService;
use crate::clients::gemini::GeminiClient;
use crate::config::GeminiConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub service_chatbot: ChatbotService,
}

impl AppState {
    pub fn new(gemini_config: GeminiConfig) -> Self {
        let gemini = GeminiClient::new(gemini_config);
        AppState {
            service_chatbot: ChatbotService::new(gemini),
        }
    }
}
