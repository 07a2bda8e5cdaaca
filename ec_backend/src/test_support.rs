use crate::config::GeminiConfig;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What the mock saw of the last call.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
}

/// Stand-in for the Gemini api, bound to an ephemeral local port.
pub struct MockGemini {
    base_url: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
}

async fn answer(State(state): State<MockState>, uri: Uri, body: Bytes) -> Response {
    let body_json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    *state.captured.lock().await = Some(CapturedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body: body_json,
    });
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
        .into_response()
}

impl MockGemini {
    pub async fn start(status: StatusCode, body: Value) -> Self {
        Self::start_raw(status, &body.to_string()).await
    }

    pub async fn start_raw(status: StatusCode, body: &str) -> Self {
        let captured = Arc::new(Mutex::new(None));
        let state = MockState {
            status,
            body: body.to_string(),
            captured: captured.clone(),
        };
        let router = Router::new().fallback(answer).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockGemini {
            base_url: format!("http://{addr}/v1beta"),
            captured,
        }
    }

    pub fn config(&self, api_key: &str) -> GeminiConfig {
        self.config_without_key().with_api_key(api_key)
    }

    pub fn config_without_key(&self) -> GeminiConfig {
        GeminiConfig::default().with_api_base(self.base_url.clone())
    }

    pub async fn last_request(&self) -> Option<CapturedRequest> {
        self.captured.lock().await.clone()
    }
}
