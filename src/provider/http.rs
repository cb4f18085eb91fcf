//! Shared HTTP client construction policy for providers.
//!
//! Centralizes timeout, compression, and User-Agent defaults so every
//! provider issues requests the same way.

use std::time::Duration;

use reqwest::Client;

use super::ProviderError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/fierce/jobclient";

/// Single shared User-Agent for all providers (no per-provider name in the
/// header; provider names appear only in logs).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("jobclient/{version} (+{PROJECT_UA_URL})")
}

/// Builds a provider HTTP client using shared project policy.
///
/// `provider_name` is used only in error messages, not in the User-Agent.
///
/// # Errors
///
/// Returns [`ProviderError::Client`] when client construction fails.
pub(crate) fn build_provider_http_client(
    provider_name: &'static str,
) -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .user_agent(default_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| ProviderError::client(provider_name, &error.to_string()))
}
