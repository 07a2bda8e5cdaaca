use crate::server::app_state::AppState;
use crate::server::chatbot::controller::generate_reply_handler;
use axum::routing::post;
use ec_core::server::routes::BackendApiChatbot;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiChatbot::Generate.path().as_str(),
        post(generate_reply_handler),
    )
}
