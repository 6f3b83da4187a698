use axum::{body::Bytes, extract::State, http::HeaderMap, routing::post, Router};

use super::not_found;
use crate::{auth, error::AppError, relay, WebhookState};

pub fn webhook_router() -> Router<WebhookState> {
    Router::new()
        .route("/", post(incident_event))
        .fallback(not_found)
}

async fn incident_event(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, AppError> {
    if !auth::verify_shared_secret(&headers, &state.config.auth_token) {
        return Err(AppError::Unauthorized);
    }

    relay::relay_event(&body, &state).await?;
    Ok("OK")
}
