use crate::config::BackendConfig;
use crate::error::{ErrorBackend, Result};
use crate::server::app_state::AppState;
use crate::server::{chatbot, form, ping};
use ec_core::server::routes::{BACKEND_API_PREFIX, print_all_backend_api_paths};
use http::StatusCode;
use std::sync::Arc;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info, warn};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Assembles the api routes, the form pages and the tracing layer.
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(chatbot::route::routes())
        .merge(ping::route::routes())
        .with_state(app_state.clone());

    let routes_pages = form::route::routes().with_state(app_state);

    axum::Router::new()
        .nest(BACKEND_API_PREFIX, routes_api)
        .merge(routes_pages)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the HTTP server.
///
/// # Behavior
/// - Serves `/api/empathic-chatbot`, `/api/ping`, and the form at `/` and `/chatbot`.
/// - Adds tracing for incoming requests and failures.
/// - Binds to the configured host/port and serves until the process stops.
///
/// A missing `GEMINI_API_KEY` does not stop the server; every chatbot call
/// then answers with a configuration error.
#[tokio::main]
pub async fn http_server_backend(config: BackendConfig) -> Result<()> {
    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set, chatbot requests will fail");
    }
    let app_state = Arc::new(AppState::new(config.gemini.clone()));
    let router = build_router(app_state);

    print_all_backend_api_paths();

    let address = config.bind_address();
    let protocol = &config.protocol;
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{address}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {address}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
