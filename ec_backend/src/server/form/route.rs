use crate::server::{app_state::AppState, form::controller::chatbot_page};
use axum::routing::get;
use ec_core::server::routes::BackendPage;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(BackendPage::Index.path().as_str(), get(chatbot_page))
        .route(BackendPage::Chatbot.path().as_str(), get(chatbot_page))
}
