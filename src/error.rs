use thiserror::Error;

/// Errors that abort a call instead of being delivered through an
/// [`ApiResult`](crate::api::ApiResult).
///
/// Domain failures reported by the API (unknown user, missing beatmap, ...)
/// never show up here; they are classified into an
/// [`ApiError`](crate::api::ApiError) and returned as a failed result.
#[derive(Debug, Error)]
pub enum OsuError {
    #[error("Failed to send the API request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API responded with an unexpected status code {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Failed to parse the API response into a {target} object: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to retrieve an access token: {0}")]
    Credential(String),

    #[error("The request was cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl OsuError {
    pub(crate) fn decode<T: ?Sized>(source: serde_json::Error) -> Self {
        Self::Decode {
            target: std::any::type_name::<T>(),
            source,
        }
    }

    /// Whether the error comes from the transport layer (connectivity or an
    /// unexpected status code) rather than from the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::UnexpectedStatus { .. })
    }

    /// Get user-friendly hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Transport(_) => Some("Check your internet connection and try again.".to_string()),
            Self::UnexpectedStatus { status: 401, .. } => {
                Some("The access token was rejected. Check 'osu config get auth.client_id'.".to_string())
            }
            Self::UnexpectedStatus { status: 429, .. } => {
                Some("You've made too many requests. Please wait a moment.".to_string())
            }
            Self::UnexpectedStatus { status, .. } if *status >= 500 => {
                Some("The osu! API is having trouble. Try again later.".to_string())
            }
            Self::Decode { .. } => Some(
                "The API answered with an unexpected shape. Run with --verbose for details.".to_string(),
            ),
            Self::Credential(_) => Some(
                "Configure credentials with 'osu config set auth.client_id <ID>' and \
                 'osu config set auth.client_secret <SECRET>'."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OsuError>;
