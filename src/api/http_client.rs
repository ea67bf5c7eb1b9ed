use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use super::client::ClientConfig;
use crate::error::{OsuError, Result};

/// Name of the header carrying the API version.
pub const API_VERSION_HEADER: &str = "x-api-version";

/// Create the HTTP client used for API requests
///
/// Every request carries the API version header and the user agent. The
/// bearer token is set per request since providers may rotate it.
pub fn create_client(config: &ClientConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    let version = HeaderValue::from_str(&config.api_version)
        .map_err(|e| OsuError::Config(format!("Invalid API version '{}': {}", config.api_version, e)))?;
    headers.insert(API_VERSION_HEADER, version);

    let client = base_builder(Duration::from_secs(config.timeout), &config.user_agent)
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Create the HTTP client used for OAuth token requests
pub fn create_auth_client(timeout: Duration, user_agent: &str) -> Result<Client> {
    Ok(base_builder(timeout, user_agent).build()?)
}

fn base_builder(timeout: Duration, user_agent: &str) -> ClientBuilder {
    ClientBuilder::new()
        // Connection pool settings
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(timeout)
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .user_agent(user_agent)
        .use_rustls_tls()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = create_client(&ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_api_version_is_rejected() {
        let config = ClientConfig {
            api_version: "2022\n0705".to_string(),
            ..ClientConfig::default()
        };

        let err = create_client(&config).unwrap_err();
        assert!(matches!(err, OsuError::Config(_)));
    }
}
