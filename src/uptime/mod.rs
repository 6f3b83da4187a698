//! Better Uptime REST client.

pub mod incident;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{
    config::ConfigError,
    error::{ensure_success, ApiError},
};
use incident::{Incident, NewIncident};

#[derive(Debug, Clone)]
pub struct UptimeClient {
    client: reqwest::Client,
    api_url: String,
}

impl UptimeClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ConfigError::InvalidHeader("BETTER_UPTIME_AUTH_TOKEN"))?,
        );

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()?,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_incident(&self, id: &str) -> Result<Incident, ApiError> {
        let res = self
            .client
            .get(format!("{}/incidents/{}", self.api_url, id))
            .send()
            .await?;

        Ok(ensure_success(res).await?.json().await?)
    }

    pub async fn create_incident(&self, incident: &NewIncident) -> Result<(), ApiError> {
        let res = self
            .client
            .post(format!("{}/incidents", self.api_url))
            .json(incident)
            .send()
            .await?;
        ensure_success(res).await?;

        Ok(())
    }
}
