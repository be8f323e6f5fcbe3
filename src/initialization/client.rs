//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::ClientConfig;

/// Initializes the HTTP client used for all API requests.
///
/// Creates a `reqwest::Client` configured with the User-Agent and timeout
/// from `config`. Authorization is attached per request, not here, so one
/// client can serve both authenticated and anonymous calls.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
