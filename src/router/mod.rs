mod bot;
mod webhook;

use axum::http::StatusCode;

pub use bot::bot_router;
pub use webhook::webhook_router;

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found.")
}
