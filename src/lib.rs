pub mod auth;
pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod relay;
pub mod router;
pub mod server;
pub mod uptime;

use std::sync::Arc;

use commands::CommandRegistry;
use config::{BotConfig, ConfigError, WebhookConfig};
use discord::{DiscordApp, DiscordWebhook};
use uptime::UptimeClient;

/// Shared per-process state of the slash-command bot.
#[derive(Clone)]
pub struct BotState {
    pub config: Arc<BotConfig>,
    pub discord: DiscordApp,
    pub uptime: UptimeClient,
    pub commands: Arc<CommandRegistry>,
}

impl BotState {
    pub fn new(config: BotConfig) -> Result<Self, ConfigError> {
        let discord = DiscordApp::new(config.discord_api_url.clone());
        let uptime = UptimeClient::new(&config.uptime_api_url, &config.uptime_token)?;

        Ok(Self {
            config: Arc::new(config),
            discord,
            uptime,
            commands: Arc::new(CommandRegistry::standard()),
        })
    }
}

/// Shared per-process state of the incident relay.
#[derive(Clone)]
pub struct WebhookState {
    pub config: Arc<WebhookConfig>,
    pub webhook: DiscordWebhook,
    pub uptime: UptimeClient,
}

impl WebhookState {
    pub fn new(config: WebhookConfig) -> Result<Self, ConfigError> {
        let webhook = DiscordWebhook::new(config.discord_webhook_url.clone());
        let uptime = UptimeClient::new(&config.uptime_api_url, &config.uptime_token)?;

        Ok(Self {
            config: Arc::new(config),
            webhook,
            uptime,
        })
    }
}
