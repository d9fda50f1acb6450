pub mod client;
pub mod cloudflare;
pub mod models;

pub use client::PurgeApiClient;
pub use cloudflare::CloudflareClient;
pub use models::PurgeRequest;
