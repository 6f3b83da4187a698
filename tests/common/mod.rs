//! Shared fixtures for router tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
};
use ed25519_dalek::{Signer, SigningKey};
use incident_bot::{
    config::{BotConfig, WebhookConfig},
    BotState, WebhookState,
};
use serde_json::Value;

pub const AUTH_TOKEN: &str = "register-secret";
pub const UPTIME_TOKEN: &str = "uptime-token";
pub const APPLICATION_ID: &str = "1001";
pub const TIMESTAMP: &str = "1700000000";

pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[11u8; 32])
}

pub fn bot_state(uptime_url: &str, discord_url: &str) -> BotState {
    let public_key = hex::encode(signing_key().verifying_key().to_bytes());
    let config = BotConfig::from_lookup(|key| {
        let value = match key {
            "AUTH_TOKEN" => AUTH_TOKEN.to_string(),
            "DISCORD_TOKEN" => "bot-token".to_string(),
            "DISCORD_PUBLIC_KEY" => public_key.clone(),
            "DISCORD_APPLICATION_ID" => APPLICATION_ID.to_string(),
            "DISCORD_API_URL" => discord_url.to_string(),
            "BETTER_UPTIME_AUTH_TOKEN" => UPTIME_TOKEN.to_string(),
            "BETTER_UPTIME_API_URL" => uptime_url.to_string(),
            _ => return None,
        };
        Some(value)
    })
    .expect("bot config");

    BotState::new(config).expect("bot state")
}

pub fn webhook_state(uptime_url: &str, webhook_url: &str) -> WebhookState {
    let config = WebhookConfig::from_lookup(|key| {
        let value = match key {
            "AUTH_TOKEN" => AUTH_TOKEN.to_string(),
            "BETTER_UPTIME_AUTH_TOKEN" => UPTIME_TOKEN.to_string(),
            "BETTER_UPTIME_API_URL" => uptime_url.to_string(),
            "DISCORD_WEBHOOK_URL" => webhook_url.to_string(),
            "DISCORD_NEW_INCIDENT_MESSAGE" => "@here new incident".to_string(),
            "DISCORD_INCIDENT_UPDATE_MESSAGE" => "incident acknowledged".to_string(),
            "DISCORD_INCIDENT_RESOLVED_MESSAGE" => "incident resolved".to_string(),
            _ => return None,
        };
        Some(value)
    })
    .expect("webhook config");

    WebhookState::new(config).expect("webhook state")
}

/// `POST /` signed the way Discord signs interactions.
pub fn signed_interaction(body: &str) -> Request<Body> {
    let mut message = TIMESTAMP.as_bytes().to_vec();
    message.extend_from_slice(body.as_bytes());
    let signature = hex::encode(signing_key().sign(&message).to_bytes());

    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header("X-Signature-Ed25519", signature)
        .header("X-Signature-Timestamp", TIMESTAMP)
        .body(Body::from(body.to_string()))
        .expect("request build")
}

pub fn command_body(name: &str, options: Value) -> String {
    serde_json::json!({
        "id": "900",
        "type": 2,
        "token": "interaction-token",
        "version": 1,
        "guild_id": "10",
        "channel_id": "20",
        "member": {
            "user": { "id": "4242", "username": "ferris", "discriminator": "0001" },
            "roles": []
        },
        "data": { "id": "77", "name": name, "options": options }
    })
    .to_string()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body extraction")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf8 body")
}
