use anyhow::{Context, Result};
use std::time::Duration;

/// Shared reqwest client for the recipe and weather APIs.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(format!(
            "fridgechef/{} (kitchen assistant)",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .context("Failed to build HTTP client")
}
