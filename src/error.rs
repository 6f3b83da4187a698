use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::discord::payloads::InteractionResponse;

/// Failure of an outbound call to Discord or Better Uptime.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream responded with {status}: {body}")]
    Status { status: u16, body: String },
}

impl ApiError {
    /// Body text reported back to callers of `/register`.
    pub fn detail(&self) -> String {
        match self {
            Self::Http(err) => err.to_string(),
            Self::Status { body, .. } => body.clone(),
        }
    }
}

/// Turns a non-2xx response into [`ApiError::Status`] carrying its body.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Every way a request can end without the happy-path response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("request body is empty")]
    MissingBody,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown interaction type {0}")]
    UnknownInteractionType(u8),

    #[error("event type `{0}` is not an incident")]
    NotAnIncident(String),

    #[error("failed to fetch incident: {0}")]
    FetchIncident(#[source] ApiError),

    #[error("discord webhook failed: {0}")]
    Delivery(#[source] ApiError),

    #[error("command registration failed: {0}")]
    Registration(#[source] ApiError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => {
                warn!("rejected unauthorized request");
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
            Self::MalformedInput(reason) => {
                warn!(%reason, "rejected malformed request");
                (StatusCode::BAD_REQUEST, reason).into_response()
            }
            Self::MissingBody => (StatusCode::BAD_REQUEST, "No body").into_response(),
            Self::UnknownCommand(name) => {
                warn!(command = %name, "unknown command");
                (
                    StatusCode::BAD_REQUEST,
                    Json(InteractionResponse::message("Unknown command")),
                )
                    .into_response()
            }
            Self::UnknownInteractionType(kind) => {
                warn!(kind, "unknown interaction type");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Unknown interaction type" })),
                )
                    .into_response()
            }
            Self::NotAnIncident(_) => (StatusCode::BAD_REQUEST, "Not an incident").into_response(),
            Self::FetchIncident(err) => {
                error!(error = %err, "failed to fetch incident");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch incident").into_response()
            }
            Self::Delivery(err) => {
                error!(error = %err, "discord webhook failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Webhook failed").into_response()
            }
            Self::Registration(err) => {
                error!(error = %err, "failed to register commands");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "status": "error", "error": err.detail() })),
                )
                    .into_response()
            }
        }
    }
}
