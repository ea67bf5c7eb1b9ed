use log::{debug, error, warn};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::auth::{AccessTokenProvider, StaticTokenProvider};
use super::errors::ApiError;
use super::http_client::create_client;
use super::query::{build_request_url, QueryBuilder};
use super::result::ApiResult;
use crate::error::{OsuError, Result};
use crate::metrics::{RequestRecorder, RequestTimer};

/// Base URL of the osu! API v2.
pub const API_BASE_URL: &str = "https://osu.ppy.sh/api/v2/";

/// API version sent with every request.
pub const API_VERSION: &str = "20220705";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are resolved against
    pub base_url: String,
    /// Value of the `x-api-version` header
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            api_version: API_VERSION.to_string(),
            timeout: 30,
            user_agent: format!("osu-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Statuses whose body is handed to the response parser. Anything else is
/// treated as a transport failure.
fn is_parsed_status(status: u16) -> bool {
    matches!(status, 200 | 403 | 404 | 422)
}

/// Client for the osu! API v2
///
/// Endpoint methods live in [`crate::api::endpoints`]. All of them share the
/// request pipeline below: fetch a token, send, log, triage the status, parse.
pub struct OsuClient {
    http: Client,
    base_url: Url,
    token_provider: Arc<dyn AccessTokenProvider>,
    recorder: Option<Arc<dyn RequestRecorder>>,
}

impl OsuClient {
    /// Client with the default configuration.
    pub fn new(token_provider: impl AccessTokenProvider + 'static) -> Result<Self> {
        Self::builder().token_provider(token_provider).build()
    }

    /// Client authenticating with a fixed bearer token.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(StaticTokenProvider::new(token))
    }

    pub fn builder() -> OsuClientBuilder {
        OsuClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryBuilder,
        selector: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<T>> {
        let response = self.send(Method::GET, path, &query, None, cancel).await?;
        self.parse(response, selector, cancel).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryBuilder,
        body: &Value,
        selector: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<T>> {
        let response = self.send(Method::POST, path, &query, Some(body), cancel).await?;
        self.parse(response, selector, cancel).await
    }

    /// Send a request and return the raw response, for endpoints that do not
    /// answer with JSON. The status has already been triaged.
    pub(crate) async fn get_raw(
        &self,
        path: &str,
        query: QueryBuilder,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        self.send(Method::GET, path, &query, None, cancel).await
    }

    pub(crate) async fn read_bytes(response: Response, cancel: &CancellationToken) -> Result<Vec<u8>> {
        let bytes = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            bytes = response.bytes() => bytes?,
        };
        Ok(bytes.to_vec())
    }

    fn request_url(&self, path: &str, query: &QueryBuilder) -> Result<Url> {
        Ok(self.base_url.join(&build_request_url(path, query))?)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryBuilder,
        body: Option<&Value>,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        let url = self.request_url(path, query)?;

        let token = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            token = self.token_provider.access_token(cancel) => token?,
        };

        let mut request = self.http.request(method, url.clone()).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let mut timer = RequestTimer::start(url.to_string(), self.recorder.clone());
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            response = request.send() => response.map_err(|e| {
                error!("Failed to send the API request: {}", e);
                OsuError::Transport(e)
            })?,
        };
        let status = response.status().as_u16();
        timer.set_status(status);
        drop(timer);

        if !is_parsed_status(status) {
            warn!("API responded with an unexpected status code {} for {}", status, url);
            return Err(OsuError::UnexpectedStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(
        &self,
        response: Response,
        selector: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<T>> {
        let status = response.status().as_u16();
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(OsuError::Cancelled),
            body = response.text() => body?,
        };

        parse_body(status, &body, selector).map_err(|e| {
            error!("{}", e);
            e
        })
    }
}

/// Turn a triaged response body into an [`ApiResult`].
///
/// Non-200 answers are always failures classified from the `error` field.
/// A 200 answer is a failure only if it carries a non-null `error`.
/// Otherwise the selector picks a top-level key (the whole document is used
/// when the key is missing) and the result is decoded as `T`.
pub(crate) fn parse_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
    selector: Option<&str>,
) -> Result<ApiResult<T>> {
    let mut json: Value = serde_json::from_str(body).map_err(OsuError::decode::<T>)?;
    let message = error_message(&json);

    if status != 200 || message.is_some() {
        debug!("API reported an error (status {}): {:?}", status, message);
        return Ok(ApiResult::failure(ApiError::from_message(message.as_deref())));
    }

    if let Some(key) = selector {
        if let Some(selected) = json.get_mut(key) {
            json = selected.take();
        }
    }

    if json.is_null() {
        return Ok(ApiResult::success(None));
    }

    let value = serde_json::from_value::<T>(json).map_err(OsuError::decode::<T>)?;
    Ok(ApiResult::success(Some(value)))
}

/// Text of a non-null top-level `error` field. Non-string values are kept in
/// their JSON form so they still count as an error.
fn error_message(json: &Value) -> Option<String> {
    match json.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Builder for [`OsuClient`]
#[derive(Default)]
pub struct OsuClientBuilder {
    config: ClientConfig,
    token_provider: Option<Arc<dyn AccessTokenProvider>>,
    recorder: Option<Arc<dyn RequestRecorder>>,
}

impl OsuClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout = seconds;
        self
    }

    pub fn token_provider(mut self, provider: impl AccessTokenProvider + 'static) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    pub fn shared_token_provider(mut self, provider: Arc<dyn AccessTokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Receive a [`RequestRecord`](crate::metrics::RequestRecord) for every request.
    pub fn recorder(mut self, recorder: Arc<dyn RequestRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn build(self) -> Result<OsuClient> {
        let token_provider = self.token_provider.ok_or_else(|| {
            OsuError::Config("An access token provider is required to create a client".to_string())
        })?;

        let mut base = self.config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        Ok(OsuClient {
            http: create_client(&self.config)?,
            base_url,
            token_provider,
            recorder: self.recorder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ApiErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_triage() {
        for status in [200, 403, 404, 422] {
            assert!(is_parsed_status(status), "{}", status);
        }
        for status in [201, 204, 301, 400, 401, 429, 500, 502, 503] {
            assert!(!is_parsed_status(status), "{}", status);
        }
    }

    #[test]
    fn test_success_is_decoded() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Named {
            id: u32,
            username: String,
        }

        let result = parse_body::<Named>(200, r#"{"id":5,"username":"foo"}"#, None).unwrap();
        assert!(result.is_success());
        assert_eq!(
            result.into_value(),
            Some(Named {
                id: 5,
                username: "foo".to_string()
            })
        );
    }

    #[test]
    fn test_non_200_is_failure() {
        let result = parse_body::<Value>(404, r#"{"error": "Specified Build couldn't be found."}"#, None).unwrap();
        assert_eq!(result.error().unwrap().kind(), ApiErrorKind::BuildNotFound);

        let result = parse_body::<Value>(404, r#"{"error": null}"#, None).unwrap();
        assert_eq!(result.error().unwrap().kind(), ApiErrorKind::Null);

        let result = parse_body::<Value>(403, "[]", None).unwrap();
        assert_eq!(result.error().unwrap().kind(), ApiErrorKind::Null);
    }

    #[test]
    fn test_error_payload_on_200_is_failure() {
        let result = parse_body::<Value>(200, r#"{"error": "nope"}"#, None).unwrap();
        assert_eq!(result.error().unwrap().kind(), ApiErrorKind::Unknown);

        let result = parse_body::<Value>(200, r#"{"error": null, "id": 1}"#, None).unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn test_non_string_error_payload_is_failure() {
        let result = parse_body::<Value>(200, r#"{"error": {"code": 1}}"#, None).unwrap();
        assert!(result.is_failure());
        assert_eq!(result.error().unwrap().kind(), ApiErrorKind::Unknown);
        assert_eq!(result.error().unwrap().message(), Some(r#"{"code":1}"#));

        let result = parse_body::<Value>(404, r#"{"error": 42}"#, None).unwrap();
        assert_eq!(result.error().unwrap().kind(), ApiErrorKind::Unknown);
        assert_eq!(result.error().unwrap().message(), Some("42"));

        let result = parse_body::<Value>(200, r#"{"error": false}"#, None).unwrap();
        assert!(result.is_failure());
    }

    #[test]
    fn test_selector() {
        let result = parse_body::<Vec<u32>>(200, r#"{"users": [1, 2], "cursor": null}"#, Some("users")).unwrap();
        assert_eq!(result.into_value(), Some(vec![1, 2]));

        let result = parse_body::<Vec<u32>>(200, "[3]", Some("users")).unwrap();
        assert_eq!(result.into_value(), Some(vec![3]));
    }

    #[test]
    fn test_null_is_empty_success() {
        let result = parse_body::<u32>(200, "null", None).unwrap();
        assert_eq!(result, ApiResult::success(None));

        let result = parse_body::<u32>(200, r#"{"attributes": null}"#, Some("attributes")).unwrap();
        assert_eq!(result, ApiResult::success(None));
    }

    #[test]
    fn test_decode_failures() {
        let err = parse_body::<u32>(200, "not json", None).unwrap_err();
        assert!(matches!(err, OsuError::Decode { .. }));

        let err = parse_body::<u32>(404, "<html></html>", None).unwrap_err();
        assert!(matches!(err, OsuError::Decode { .. }));

        let err = parse_body::<u32>(200, r#"{"id": 1}"#, None).unwrap_err();
        assert!(err.to_string().contains("u32"));
    }

    #[test]
    fn test_builder_requires_token_provider() {
        let err = OsuClient::builder().build().err().unwrap();
        assert!(matches!(err, OsuError::Config(_)));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = OsuClient::builder()
            .base_url("http://localhost:1234/api/v2")
            .token_provider(StaticTokenProvider::new("t"))
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:1234/api/v2/");

        let url = client
            .request_url("users/2/", &QueryBuilder::new().param::<u32>("limit", None))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/api/v2/users/2");

        let url = client.request_url("users/@who%3F%23me", &QueryBuilder::new()).unwrap();
        assert_eq!(url.path(), "/api/v2/users/@who%3F%23me");
        assert_eq!(url.query(), None);
    }
}
