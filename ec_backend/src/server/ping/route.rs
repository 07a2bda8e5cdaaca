use crate::server::{app_state::AppState, ping::controller::ping};
use axum::routing::get;
use ec_core::server::routes::BackendApiPing;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(BackendApiPing::Ping.path().as_str(), get(ping))
}
