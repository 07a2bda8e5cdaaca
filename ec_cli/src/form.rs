use crate::error::Result;
use ec_core::server::payload::chatbot::generation_request::GenerationRequest;
use ec_core::server::payload::chatbot::generation_response::GenerationResponse;
use std::fmt;

pub const SAMPLE_SCENARIO: &str = "I have so much homework and exams coming up. I feel like I'm drowning and I don't know where to start. My parents keep asking about my grades and I'm afraid to tell them.";

pub const MESSAGE_UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Something able to deliver a scenario to the chatbot endpoint.
pub trait ScenarioTransport {
    fn send_scenario(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse>>;
}

/// What the form currently shows. `Loading` is the only state that refuses
/// a new submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormState::Idle => Ok(()),
            FormState::Loading => write!(f, "Responding..."),
            FormState::Success(text) => write!(f, "{text}"),
            FormState::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatbotForm {
    input: String,
    state: FormState,
}

impl ChatbotForm {
    pub fn new() -> Self {
        ChatbotForm::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn load_sample(&mut self) {
        self.input = SAMPLE_SCENARIO.to_string();
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state != FormState::Loading && !self.input.trim().is_empty()
    }

    /// Moves to `Loading` and hands out the request to send, or `None` while
    /// a submission is in flight or the input is blank.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if !self.can_submit() {
            return None;
        }
        self.state = FormState::Loading;
        Some(GenerationRequest::new(self.input.clone()))
    }

    pub fn finish_submit(&mut self, result: Result<GenerationResponse>) -> &FormState {
        self.state = match result {
            Ok(GenerationResponse::Success(success)) => FormState::Success(success.response),
            Ok(GenerationResponse::Error(error)) => FormState::Error(error.error),
            Err(err) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    FormState::Error(MESSAGE_UNKNOWN_ERROR.to_string())
                } else {
                    FormState::Error(message)
                }
            }
        };
        &self.state
    }

    pub async fn submit<T: ScenarioTransport>(&mut self, transport: &T) -> &FormState {
        let Some(request) = self.begin_submit() else {
            return &self.state;
        };
        let result = transport.send_scenario(&request).await;
        self.finish_submit(result)
    }
}
