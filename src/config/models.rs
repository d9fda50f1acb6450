use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

// Settings as stored by the host, keys kept as-is so existing exports load unchanged.
// Missing keys fall back to empty values and are reported by validation instead of the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "cloudflare_enable")]
    pub enabled: bool,

    #[serde(rename = "cloudflare_purge_email")]
    pub email: String,

    #[serde(rename = "cloudflare_purge_api_key")]
    pub api_key: String,

    #[serde(rename = "cloudflare_purge_zone_id")]
    pub zone_id: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();
        let mut file = File::open(config_file)
            .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

        Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_file.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document is a config with every setting missing.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
