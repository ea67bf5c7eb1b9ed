//! Access token providers.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use super::http_client::create_auth_client;
use crate::error::{OsuError, Result};

/// Token endpoint of the osu! OAuth server.
pub const TOKEN_URL: &str = "https://osu.ppy.sh/oauth/token";

/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Source of bearer tokens for API requests.
///
/// The client asks for a token before every request and adds no locking of
/// its own, so implementations must be safe to call concurrently.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self, cancel: &CancellationToken) -> Result<String>;
}

/// Always returns the same token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self, _cancel: &CancellationToken) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
    error_description: Option<String>,
}

#[derive(Debug)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Requests tokens with the OAuth2 client credentials grant.
///
/// The token is cached and only requested again shortly before it expires.
/// Concurrent callers wait for a single refresh.
pub struct ClientCredentialsProvider {
    client_id: String,
    client_secret: String,
    token_url: String,
    http: Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ClientCredentialsProvider {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let user_agent = format!("osu-api/{}", env!("CARGO_PKG_VERSION"));
        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: TOKEN_URL.to_string(),
            http: create_auth_client(Duration::from_secs(30), &user_agent)?,
            cached: Mutex::new(None),
        })
    }

    /// Use a different token endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    async fn request_token(&self) -> Result<CachedToken> {
        debug!("Requesting a client credentials token from {}", self.token_url);

        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("scope", "public"),
        ];
        let response = self
            .http
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| OsuError::Credential(format!("Failed to send the token request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OsuError::Credential(format!("Failed to read the token response: {}", e)))?;
        let parsed: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| OsuError::Credential(format!("Failed to parse the token response: {}", e)))?;

        if !status.is_success() {
            warn!("Token request failed with status {}", status);
            return Err(OsuError::Credential(format!(
                "{}: {}",
                status.as_u16(),
                parsed.error_description.unwrap_or_default()
            )));
        }

        match (parsed.access_token, parsed.expires_in) {
            (Some(token), Some(expires_in)) => Ok(CachedToken {
                token,
                expires_at: Instant::now() + Duration::from_secs(expires_in),
            }),
            _ => Err(OsuError::Credential(
                "The access token or expiration is missing, but no error was reported".to_string(),
            )),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsProvider {
    async fn access_token(&self, cancel: &CancellationToken) -> Result<String> {
        let mut cached = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            guard = self.cached.lock() => guard,
        };

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() + EXPIRY_MARGIN {
                return Ok(token.token.clone());
            }
        }

        let fresh = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            fresh = self.request_token() => fresh?,
        };
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticTokenProvider::new("abc");
        let token = provider.access_token(&CancellationToken::new()).await.unwrap();
        assert_eq!(token, "abc");
    }

    #[tokio::test]
    async fn test_client_credentials_honours_cancellation() {
        let provider = ClientCredentialsProvider::new("1", "secret")
            .unwrap()
            .with_token_url("http://127.0.0.1:9/oauth/token");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = provider.access_token(&cancel).await.unwrap_err();
        assert!(matches!(err, OsuError::Cancelled));
    }
}
