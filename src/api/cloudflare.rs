use super::{client::PurgeApiClient, models::*};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
    email: String,
    api_key: String,
}

#[async_trait]
impl PurgeApiClient for CloudflareClient {
    async fn purge_cache(&self, zone_id: &str, request: &PurgeRequest) -> Result<PurgeResponse> {
        let response = self
            .client
            .post(format!("{}/zones/{}/purge_cache", self.base_url, zone_id))
            .headers(self.build_headers()?)
            .body(serde_json::to_string(request)?)
            .send()
            .await?;

        // Cloudflare answers rejected purges with a 4xx and the usual envelope,
        // so the body is parsed whatever the status.
        let status = response.status();
        let text = response.text().await?;
        let purge_response: PurgeResponse = serde_json::from_str(&text).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse purge response ({}): {}. Response: {}",
                status,
                e,
                text
            )
        })?;

        if purge_response.success {
            debug!(target: "cf_purge", "Purge accepted: result={:?}", purge_response.result);
        } else {
            debug!(
                target: "cf_purge",
                "Purge rejected ({}): errors={:?} messages={:?}",
                status,
                purge_response.errors,
                purge_response.messages
            );
        }

        Ok(purge_response)
    }
}

impl CloudflareClient {
    pub fn new(email: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: API_BASE_URL.to_string(),
            email,
            api_key,
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Auth-Email",
            HeaderValue::from_str(&self.email).context("E-mail is not a valid header value")?,
        );
        headers.insert(
            "X-Auth-Key",
            HeaderValue::from_str(&self.api_key).context("API key is not a valid header value")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}
