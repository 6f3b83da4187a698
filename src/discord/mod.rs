pub mod command;
pub mod embed;
pub mod payloads;

use reqwest::header::AUTHORIZATION;
use tracing::info;

use crate::error::{ensure_success, ApiError};
use command::ApplicationCommand;
use embed::WebhookMessage;

/// Client for the Discord REST API.
#[derive(Debug, Clone, Default)]
pub struct DiscordApp {
    client: reqwest::Client,
    api_url: String,
}

impl DiscordApp {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Overwrites the application's global commands with `commands`.
    pub async fn register_commands(
        &self,
        application_id: &str,
        token: &str,
        commands: &[ApplicationCommand],
    ) -> Result<(), ApiError> {
        let url = format!("{}/applications/{}/commands", self.api_url, application_id);

        let res = self
            .client
            .put(url)
            .header(AUTHORIZATION, format!("Bot {token}"))
            .json(commands)
            .send()
            .await?;
        ensure_success(res).await?;

        info!(count = commands.len(), "registered global commands");
        Ok(())
    }
}

/// A fixed Discord execute-webhook URL.
#[derive(Debug, Clone, Default)]
pub struct DiscordWebhook {
    client: reqwest::Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub async fn send(&self, message: &WebhookMessage) -> Result<(), ApiError> {
        let res = self.client.post(&self.url).json(message).send().await?;
        ensure_success(res).await?;
        Ok(())
    }
}
