// HTTP repository implementation for priority zones
use crate::application::zone_repository::{ZoneAck, ZonePayload, ZoneRepository};
use crate::infrastructure::config::BackendSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpZoneRepository {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl HttpZoneRepository {
    pub fn new(url: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            token,
        }
    }

    pub fn from_settings(settings: &BackendSettings) -> Self {
        Self::new(settings.zone_url(), settings.token.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ZoneRepository for HttpZoneRepository {
    async fn create_or_update(&self, payload: &ZonePayload) -> Result<ZoneAck> {
        let mut request = self
            .client
            .post(&self.url)
            .header("Accept", "application/json")
            .json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to send priority zone to backend")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Priority zone request failed with status {}: {}", status, body);
        }

        // The store may answer with an empty body or plain text.
        let body = response
            .text()
            .await
            .context("Failed to read priority zone response")?;
        let ack = serde_json::from_str::<ZoneAck>(&body).unwrap_or_default();

        tracing::debug!("Backend acknowledged zone {:?} as {:?}", payload.id, ack.id);
        Ok(ack)
    }
}
