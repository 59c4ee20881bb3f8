//! Download functionality for the remote asset host

use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User agent for asset host requests
pub const USER_AGENT: &str = "gitfolio";

/// Builds an HTTP client for the asset host
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_asset_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Downloads from URL to memory
///
/// # Errors
///
/// Returns error if:
/// - HTTP request fails
/// - Response status is not success
/// - I/O error during download
pub fn download_to_memory(client: &Client, url: &Url) -> Result<Vec<u8>, DownloadError> {
    let mut response = client.get(url.as_str()).send()?;

    if let Err(err) = response.error_for_status_ref() {
        return Err(DownloadError::HttpError {
            url: url.clone(),
            source: err,
        });
    }

    let mut buffer = Vec::new();
    response.read_to_end(&mut buffer)?;

    Ok(buffer)
}

/// Download error types
#[derive(Debug, Error)]
pub enum DownloadError {
    /// HTTP error during download
    #[error("HTTP error downloading {url}: {source}")]
    HttpError {
        /// URL that failed
        url: Url,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// I/O error during download
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// URL construction error
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::time::Duration;

    #[test]
    fn test_download_to_memory_success() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/site/index.html")
            .with_status(200)
            .with_body("<html></html>")
            .create();

        let client = build_asset_client(Duration::from_secs(5)).unwrap();
        let url = Url::parse(&format!("{}/site/index.html", server.url())).unwrap();
        let bytes = download_to_memory(&client, &url).unwrap();

        mock.assert();
        assert_eq!(bytes, b"<html></html>");
    }

    #[test]
    fn test_download_to_memory_non_ok_status() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/site/missing.css")
            .with_status(404)
            .create();

        let client = build_asset_client(Duration::from_secs(5)).unwrap();
        let url = Url::parse(&format!("{}/site/missing.css", server.url())).unwrap();
        let result = download_to_memory(&client, &url);

        assert!(matches!(result, Err(DownloadError::HttpError { .. })));
    }

    #[test]
    fn test_download_to_memory_connection_refused() {
        // Port 9 (discard) is not listening locally
        let client = build_asset_client(Duration::from_secs(1)).unwrap();
        let url = Url::parse("http://127.0.0.1:9/never").unwrap();
        let result = download_to_memory(&client, &url);
        assert!(result.is_err());
    }
}
