use super::models::*;
use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PurgeApiClient {
    async fn purge_cache(&self, zone_id: &str, request: &PurgeRequest) -> Result<PurgeResponse>;
}
