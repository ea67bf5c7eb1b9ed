//! Authorization code flow for acting on behalf of a user.

use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::form_urlencoded::byte_serialize;

use super::auth::TOKEN_URL;
use super::http_client::create_auth_client;
use crate::error::{OsuError, Result};

/// Authorization page of the osu! OAuth server.
pub const AUTHORIZE_URL: &str = "https://osu.ppy.sh/oauth/authorize";

/// Tokens returned by a successful code exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeExchangeResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct RawExchangeResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
    error_description: Option<String>,
}

pub struct OAuthClient {
    client_id: String,
    client_secret: String,
    redirect_url: String,
    token_url: String,
    http: Client,
}

impl OAuthClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Result<Self> {
        let user_agent = format!("osu-api/{}", env!("CARGO_PKG_VERSION"));
        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
            token_url: TOKEN_URL.to_string(),
            http: create_auth_client(Duration::from_secs(30), &user_agent)?,
        })
    }

    /// Use a different token endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// URL of the page where the user grants the requested scopes. `state` is
    /// echoed back to the redirect URL.
    pub fn build_redirect_url(&self, state: &str, scopes: &[&str]) -> String {
        let scope = scopes.join(" ");
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("scope", scope.as_str()),
            ("response_type", "code"),
            ("state", state),
        ];

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, byte_serialize(value.as_bytes()).collect::<String>()))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", AUTHORIZE_URL, query)
    }

    /// Exchange an authorization code for an access and refresh token.
    pub async fn exchange_code(&self, code: &str, cancel: &CancellationToken) -> Result<CodeExchangeResponse> {
        debug!("Exchanging an authorization code at {}", self.token_url);

        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
        ];
        let request = self.http.post(&self.token_url).form(&form).send();

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            response = request => response.map_err(|e| {
                OsuError::Credential(format!("Failed to send the token exchange request: {}", e))
            })?,
        };

        let status = response.status();
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            body = response.text() => body.map_err(|e| {
                OsuError::Credential(format!("Failed to read the code exchange response: {}", e))
            })?,
        };

        let raw: RawExchangeResponse = serde_json::from_str(&body)
            .map_err(|e| OsuError::Credential(format!("Failed to parse the code exchange response: {}", e)))?;

        if !status.is_success() {
            warn!("Code exchange failed with status {}", status);
            return Err(OsuError::Credential(format!(
                "{}: {}",
                status.as_u16(),
                raw.error_description.unwrap_or_default()
            )));
        }

        match (raw.access_token, raw.refresh_token, raw.expires_in) {
            (Some(access_token), Some(refresh_token), Some(expires_in)) => Ok(CodeExchangeResponse {
                access_token,
                refresh_token,
                expires_in,
            }),
            _ => Err(OsuError::Credential(
                "The access token or expiration is missing, but no error was reported".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_redirect_url() {
        let client = OAuthClient::new("123", "secret", "http://localhost:8080/callback").unwrap();
        let url = client.build_redirect_url("xyz", &["public", "identify"]);

        assert_eq!(
            url,
            "https://osu.ppy.sh/oauth/authorize?client_id=123\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcallback\
             &scope=public+identify&response_type=code&state=xyz"
        );
    }

    #[test]
    fn test_redirect_url_without_scopes() {
        let client = OAuthClient::new("1", "s", "http://x").unwrap();
        assert!(client.build_redirect_url("", &[]).contains("&scope=&"));
    }
}
