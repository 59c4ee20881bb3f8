//! HTTP client construction for GitHub API interactions

use reqwest::blocking::Client;
use std::time::Duration;

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent for gitfolio requests
pub const USER_AGENT: &str = "gitfolio";

/// Builds an HTTP client with appropriate settings for the GitHub API
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Builds an HTTP client with the default timeout
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_default_client() -> Result<Client, reqwest::Error> {
    build_client(DEFAULT_TIMEOUT)
}
