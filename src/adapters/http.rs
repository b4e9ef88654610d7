use crate::domain::model::HttpMethod;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

pub const CAMPAIGN_ID_PARAM: &str = "campaign_id";

/// Thin client for the dealership configuration webhook. One request per
/// call, no retries.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
    method: HttpMethod,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>, method: HttpMethod, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            method,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.webhook_url(),
            config.http_method(),
            Duration::from_secs(config.timeout_secs()),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the response body as text. JSON responses are decoded and
    /// re-serialised; anything else is passed through untouched.
    pub async fn fetch(&self, campaign_id: &str) -> Result<String> {
        tracing::debug!(
            "Making {:?} request to: {}?{}={}",
            self.method,
            self.url,
            CAMPAIGN_ID_PARAM,
            campaign_id
        );

        let response = self
            .client
            .request(self.method.into(), &self.url)
            .query(&[(CAMPAIGN_ID_PARAM, campaign_id)])
            .send()
            .await?;

        tracing::debug!("Webhook response status: {}", response.status());
        let response = response.error_for_status()?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase().starts_with("application/json"))
            .unwrap_or(false);

        let body = response.text().await?;
        tracing::debug!("Received {} bytes (json: {})", body.len(), is_json);

        if is_json {
            let value: serde_json::Value = serde_json::from_str(&body)?;
            Ok(serde_json::to_string(&value)?)
        } else {
            Ok(body)
        }
    }
}
