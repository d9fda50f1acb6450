use crate::api::{PurgeApiClient, PurgeRequest};
use crate::config::{self, Config};
use log::{debug, error, info};
use serde::Serialize;

// Cloudflare rejects file purges with more than 30 URLs.
pub const CHUNK_SIZE: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurgeOutcome {
    pub overall_success: bool,
    pub failures: Vec<ChunkResult>,
}

impl PurgeOutcome {
    fn from_results(results: Vec<ChunkResult>) -> Self {
        let failures: Vec<ChunkResult> = results.into_iter().filter(|r| !r.success).collect();
        Self {
            overall_success: failures.is_empty(),
            failures,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    InvalidConfig,
    EmptyRequest,
}

/// What a purge call did. Purges never return errors; failures have
/// already been logged by the time this is handed back.
#[derive(Debug, Clone, PartialEq)]
pub enum PurgeStatus {
    Skipped(SkipReason),
    Finished(PurgeOutcome),
}

impl PurgeStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, PurgeStatus::Finished(outcome) if outcome.overall_success)
    }
}

pub struct PurgeService<C> {
    config: Config,
    errors: Vec<String>,
    client: C,
}

impl<C: PurgeApiClient + Sync> PurgeService<C> {
    pub fn new(config: Config, client: C) -> Self {
        let errors = config::validate(&config);
        Self {
            config,
            errors,
            client,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn skip_reason(&self) -> Option<SkipReason> {
        if !self.config.enabled {
            Some(SkipReason::Disabled)
        } else if !self.errors.is_empty() {
            Some(SkipReason::InvalidConfig)
        } else {
            None
        }
    }

    pub async fn purge_all(&self) -> PurgeStatus {
        if let Some(reason) = self.skip_reason() {
            return PurgeStatus::Skipped(reason);
        }

        let result = self.send(PurgeRequest::everything()).await;
        if result.success {
            info!(target: "cf_purge", "Purged everything from cache");
        } else {
            error!(target: "cf_purge", "Unable to purge everything from cache");
        }

        PurgeStatus::Finished(PurgeOutcome::from_results(vec![result]))
    }

    pub async fn purge_by_url(&self, urls: &[String]) -> PurgeStatus {
        if let Some(reason) = self.skip_reason() {
            return PurgeStatus::Skipped(reason);
        }
        if urls.is_empty() {
            return PurgeStatus::Skipped(SkipReason::EmptyRequest);
        }

        let outcome = self.purge_in_chunks(urls).await;
        if outcome.overall_success {
            info!(target: "cf_purge", "Purged url/s from cache");
        } else {
            let failed = serde_json::to_string(&outcome.failures).unwrap_or_default();
            error!(
                target: "cf_purge",
                failed = failed.as_str();
                "Unable to purge url/s from cache"
            );
        }

        PurgeStatus::Finished(outcome)
    }

    // Every chunk is sent, even after a failure.
    async fn purge_in_chunks(&self, urls: &[String]) -> PurgeOutcome {
        let mut results = Vec::with_capacity(urls.len().div_ceil(CHUNK_SIZE));
        for chunk in urls.chunks(CHUNK_SIZE) {
            let mut result = self.send(PurgeRequest::files(chunk.to_vec())).await;
            if !result.success {
                result.urls = chunk.to_vec();
            }
            results.push(result);
        }
        PurgeOutcome::from_results(results)
    }

    async fn send(&self, request: PurgeRequest) -> ChunkResult {
        let success = match self.client.purge_cache(&self.config.zone_id, &request).await {
            Ok(response) => response.success,
            Err(e) => {
                debug!(target: "cf_purge", "Purge request failed: {:#}", e);
                false
            }
        };
        ChunkResult {
            success,
            urls: Vec::new(),
        }
    }
}
