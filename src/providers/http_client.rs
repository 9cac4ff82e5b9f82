use reqwest::Client;
use std::time::Duration;

/// Timeout for the weather/news data providers.
pub const DATA_PROVIDER_TIMEOUT_SECS: u64 = 10;
/// Timeout for the AI completion provider.
pub const AI_PROVIDER_TIMEOUT_SECS: u64 = 30;

pub fn build_provider_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|_| Client::new())
}
