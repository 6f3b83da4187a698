use incident_bot::{config::BotConfig, router, server, BotState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::init();

    let state = BotState::new(BotConfig::from_env()?)?;
    server::serve(router::bot_router().with_state(state)).await?;

    Ok(())
}
