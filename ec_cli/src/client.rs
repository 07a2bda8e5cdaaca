use crate::error::{ErrorCli, Result};
use crate::form::ScenarioTransport;
use ec_core::error::ErrorCore;
use ec_core::server::payload::chatbot::generation_request::GenerationRequest;
use ec_core::server::payload::chatbot::generation_response::GenerationResponse;
use ec_core::server::routes::{BackendApiChatbot, BackendApiPing, backend_api_url};
use reqwest::{Client, Response, StatusCode};

pub struct CliClient {
    client: Client,
    base_url: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url: base_url.to_string(),
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> ErrorCli {
        if e.is_connect() {
            ErrorCli::ConnectionRefused(self.base_url.clone())
        } else {
            ErrorCli::Http(e)
        }
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        match res.map_err(|e| self.map_send_error(e))?.error_for_status() {
            Ok(res) => {
                let text = res.text().await?;
                Ok(text)
            }
            Err(e) => Err(self.map_send_error(e)),
        }
    }

    pub async fn ping(&self) -> Result<String> {
        let url = backend_api_url(&self.base_url, &BackendApiPing::Ping.path());
        let result = self.client.get(&url).send().await;
        self.handle_response(result).await
    }

    /// Posts a scenario. Error bodies come back as
    /// [`GenerationResponse::Error`], not as `Err`.
    pub async fn send_scenario(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let url = backend_api_url(&self.base_url, &BackendApiChatbot::Generate.path());
        let res = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let status = res.status();
        let body = res.text().await?;
        parse_generation_response(status, &body)
    }
}

impl ScenarioTransport for CliClient {
    async fn send_scenario(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        CliClient::send_scenario(self, request).await
    }
}

/// Any status is accepted as long as the body has the chatbot shape.
pub fn parse_generation_response(status: StatusCode, body: &str) -> Result<GenerationResponse> {
    match serde_json::from_str::<GenerationResponse>(body) {
        Ok(response) => Ok(response),
        Err(_) if !status.is_success() => Err(ErrorCli::UnexpectedStatus(status.as_u16())),
        Err(e) => Err(ErrorCli::Core(ErrorCore::from(e))),
    }
}
