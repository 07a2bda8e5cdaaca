use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use ec_core::server::payload::chatbot::generation_response::GenerationResponse;
use std::sync::Arc;

/// The body is taken raw: a malformed document or one that cannot be
/// buffered is a 500 with its description, a missing or non-string `text`
/// is a 400.
pub async fn generate_reply_handler(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ResultAPI {
    let body = body?;
    let success = state.service_chatbot.reply(&body).await?;
    Ok(Json(GenerationResponse::from(success)))
}
