use serde::{Deserialize, Serialize};

/// Body of a `purge_cache` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PurgeRequest {
    Everything { purge_everything: bool },
    Files { files: Vec<String> },
}

impl PurgeRequest {
    pub fn everything() -> Self {
        PurgeRequest::Everything {
            purge_everything: true,
        }
    }

    pub fn files(files: Vec<String>) -> Self {
        PurgeRequest::Files { files }
    }
}

// Only `success` is relied on; the rest is kept for diagnostics and may be
// missing or null depending on the outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub messages: Option<Vec<serde_json::Value>>,
}

pub type PurgeResponse = ApiResponse<serde_json::Value>;
