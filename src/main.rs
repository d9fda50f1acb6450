mod api;
mod config;
mod purge;

#[cfg(test)]
mod tests;

use anyhow::Result;
use api::CloudflareClient;
use clap::{Parser, Subcommand};
use config::Config;
use log::info;
use purge::{PurgeService, PurgeStatus, SkipReason};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cfpurge", about = "Purge content from the Cloudflare cache")]
struct Args {
    /// Settings file (YAML)
    #[arg(long, short, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Purges everything from the Cloudflare cache
    #[command(alias = "cf-purge-all")]
    PurgeAll,

    /// Purges the given absolute URLs from the Cloudflare cache
    #[command(alias = "cf-purge-url")]
    PurgeUrl {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let client = CloudflareClient::new(config.email.clone(), config.api_key.clone());
    let service = PurgeService::new(config, client);

    let status = match args.command {
        Command::PurgeAll => service.purge_all().await,
        Command::PurgeUrl { urls } => {
            info!("Purging {} url/s from zone {}", urls.len(), service.config().zone_id);
            service.purge_by_url(&urls).await
        }
    };

    if status.is_success() {
        return Ok(());
    }

    match status {
        PurgeStatus::Finished(outcome) => Err(anyhow::anyhow!(
            "{} purge request/s failed",
            outcome.failures.len()
        )),
        PurgeStatus::Skipped(SkipReason::Disabled) => {
            Err(anyhow::anyhow!("Cloudflare purging is not enabled"))
        }
        PurgeStatus::Skipped(SkipReason::InvalidConfig) => Err(anyhow::anyhow!(
            "Invalid configuration: {}",
            service.errors().join(", ")
        )),
        PurgeStatus::Skipped(SkipReason::EmptyRequest) => Ok(()),
    }
}
