use axum::Router;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::server_addr;

/// Loads `.env` when present and installs the log subscriber.
pub fn init() {
    let dotenv = dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env file"),
        Err(_) => info!(".env file not found, ignoring..."),
    }
}

pub async fn serve(router: Router) -> std::io::Result<()> {
    let addr = server_addr();
    info!(
        "running {} v{} on {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await
}
