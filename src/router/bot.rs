use axum::{body::Bytes, extract::State, http::HeaderMap, routing::get, Json, Router};
use serde_json::{json, Value};

use super::not_found;
use crate::{auth, commands, discord::payloads::InteractionResponse, error::AppError, BotState};

pub fn bot_router() -> Router<BotState> {
    Router::new()
        .route("/", get(root).post(interactions))
        .route("/register", get(register))
        .fallback(not_found)
}

async fn root(State(state): State<BotState>) -> String {
    format!("👋 {}", state.config.discord_application_id)
}

/// Discord's interactions endpoint. The signature is checked against the
/// raw body before anything is parsed.
async fn interactions(
    State(state): State<BotState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, AppError> {
    if !auth::verify_interaction(&state.config.discord_public_key, &headers, &body) {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(commands::dispatch(&body, &state).await?))
}

async fn register(
    State(state): State<BotState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    if !auth::verify_shared_secret(&headers, &state.config.auth_token) {
        return Err(AppError::Unauthorized);
    }

    state
        .discord
        .register_commands(
            &state.config.discord_application_id,
            &state.config.discord_token,
            &state.commands.declarations(),
        )
        .await
        .map_err(AppError::Registration)?;

    Ok(Json(json!({ "status": "ok" })))
}
