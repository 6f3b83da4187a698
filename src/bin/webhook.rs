use incident_bot::{config::WebhookConfig, router, server, WebhookState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::init();

    let state = WebhookState::new(WebhookConfig::from_env()?)?;
    server::serve(router::webhook_router().with_state(state)).await?;

    Ok(())
}
