//! Environment-supplied configuration for both services.
//!
//! Every value is read once at start. Tests build configs through
//! [`BotConfig::from_lookup`] / [`WebhookConfig::from_lookup`] instead of
//! touching the process environment.

use std::env;

use ed25519_dalek::VerifyingKey;
use thiserror::Error;

pub const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
pub const DEFAULT_UPTIME_API_URL: &str = "https://betteruptime.com/api/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    Missing(&'static str),

    #[error("DISCORD_PUBLIC_KEY is not a valid hex encoded ed25519 key")]
    InvalidPublicKey,

    #[error("{0} is not a valid header value")]
    InvalidHeader(&'static str),

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn optional<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Parses a hex encoded ed25519 public key, as shown on the Discord
/// developer portal.
pub fn parse_public_key(hex_key: &str) -> Result<VerifyingKey, ConfigError> {
    let bytes: [u8; 32] = hex::decode(hex_key.trim())
        .map_err(|_| ConfigError::InvalidPublicKey)?
        .try_into()
        .map_err(|_| ConfigError::InvalidPublicKey)?;

    VerifyingKey::from_bytes(&bytes).map_err(|_| ConfigError::InvalidPublicKey)
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Shared secret guarding `GET /register`.
    pub auth_token: String,
    pub discord_token: String,
    pub discord_public_key: VerifyingKey,
    pub discord_application_id: String,
    pub discord_api_url: String,
    pub uptime_token: String,
    pub uptime_api_url: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            auth_token: required(&lookup, "AUTH_TOKEN")?,
            discord_token: required(&lookup, "DISCORD_TOKEN")?,
            discord_public_key: parse_public_key(&required(&lookup, "DISCORD_PUBLIC_KEY")?)?,
            discord_application_id: required(&lookup, "DISCORD_APPLICATION_ID")?,
            discord_api_url: optional(&lookup, "DISCORD_API_URL", DEFAULT_DISCORD_API_URL),
            uptime_token: required(&lookup, "BETTER_UPTIME_AUTH_TOKEN")?,
            uptime_api_url: optional(&lookup, "BETTER_UPTIME_API_URL", DEFAULT_UPTIME_API_URL),
        })
    }
}

/// The three per-state message templates posted as the message content.
#[derive(Debug, Clone, Default)]
pub struct MessageTemplates {
    pub new_incident: String,
    pub updated: String,
    pub resolved: String,
}

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub auth_token: String,
    pub uptime_token: String,
    pub uptime_api_url: String,
    pub discord_webhook_url: String,
    pub templates: MessageTemplates,
}

impl WebhookConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            auth_token: required(&lookup, "AUTH_TOKEN")?,
            uptime_token: required(&lookup, "BETTER_UPTIME_AUTH_TOKEN")?,
            uptime_api_url: optional(&lookup, "BETTER_UPTIME_API_URL", DEFAULT_UPTIME_API_URL),
            discord_webhook_url: required(&lookup, "DISCORD_WEBHOOK_URL")?,
            templates: MessageTemplates {
                new_incident: required(&lookup, "DISCORD_NEW_INCIDENT_MESSAGE")?,
                updated: required(&lookup, "DISCORD_INCIDENT_UPDATE_MESSAGE")?,
                resolved: required(&lookup, "DISCORD_INCIDENT_RESOLVED_MESSAGE")?,
            },
        })
    }
}

/// Listen address, `IP:PORT`.
pub fn server_addr() -> String {
    format!(
        "{}:{}",
        env::var("IP").unwrap_or("0.0.0.0".to_string()),
        env::var("PORT").unwrap_or("3000".to_string())
    )
}
