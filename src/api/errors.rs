use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Kind of a domain error reported by the osu! API.
///
/// The kind is looked up from the error message the API sends back. Endpoints
/// that cannot tell "not found" apart from "no error reported" replace
/// [`ApiErrorKind::Null`] with a context-specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApiErrorKind {
    /// There is no error message.
    Null,
    /// The error message has no mapping.
    Unknown,
    BeatmapNotFound,
    BeatmapSetNotFound,
    BeatmapPackNotFound,
    UserNotFound,
    /// Some endpoints report a missing user and a missing score identically.
    UserOrScoreNotFound,
    BuildNotFound,
    CommentNotFound,
    NewsPostNotFound,
    /// The wiki page or the requested locale could not be found.
    WikiPageNotFound,
    /// One of the mods is not valid for the ruleset of the request.
    InvalidMod,
    ForumNotFound,
    MatchNotFound,
    ScoreNotFound,
    SpotlightNotFound,
    InvalidRulesetForSpotlight,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Literal API error messages and the kind each one maps to. Matching is
/// exact and case-sensitive.
static ERROR_MESSAGE_MAPPINGS: Lazy<HashMap<&'static str, ApiErrorKind>> = Lazy::new(|| {
    HashMap::from([
        ("Specified beatmap difficulty couldn't be found.", ApiErrorKind::BeatmapNotFound),
        ("Specified beatmap couldn't be found.", ApiErrorKind::BeatmapSetNotFound),
        ("Specified BeatmapPack couldn't be found.", ApiErrorKind::BeatmapPackNotFound),
        ("Specified Build couldn't be found.", ApiErrorKind::BuildNotFound),
        ("Specified Comment couldn't be found.", ApiErrorKind::CommentNotFound),
        ("Specified Forum\\Forum couldn't be found.", ApiErrorKind::ForumNotFound),
        ("Specified LegacyMatch\\LegacyMatch couldn't be found.", ApiErrorKind::MatchNotFound),
        ("Specified Solo\\Score couldn't be found.", ApiErrorKind::ScoreNotFound),
        ("Specified Spotlight couldn't be found.", ApiErrorKind::SpotlightNotFound),
        ("ruleset osu isn't available for the specified spotlight", ApiErrorKind::InvalidRulesetForSpotlight),
        ("ruleset taiko isn't available for the specified spotlight", ApiErrorKind::InvalidRulesetForSpotlight),
        ("ruleset fruits isn't available for the specified spotlight", ApiErrorKind::InvalidRulesetForSpotlight),
        ("ruleset mania isn't available for the specified spotlight", ApiErrorKind::InvalidRulesetForSpotlight),
    ])
});

/// Message the API sends for a missing score; replay downloads report it
/// without a JSON body.
pub(crate) const SCORE_NOT_FOUND_MESSAGE: &str = "Specified Solo\\Score couldn't be found.";

/// A domain error returned by the osu! API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    /// Classify a raw error message.
    ///
    /// `None` yields [`ApiErrorKind::Null`], a mapped message its kind and
    /// anything else [`ApiErrorKind::Unknown`].
    pub fn from_message(message: Option<&str>) -> Self {
        match message {
            None => Self::new(ApiErrorKind::Null, None),
            Some(message) => {
                let kind = ERROR_MESSAGE_MAPPINGS
                    .get(message)
                    .copied()
                    .unwrap_or(ApiErrorKind::Unknown);
                Self::new(kind, Some(message.to_string()))
            }
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace a `Null` kind with `fallback`. Any other kind is kept.
    pub(crate) fn with_fallback(mut self, fallback: ApiErrorKind) -> Self {
        if self.kind == ApiErrorKind::Null {
            self.kind = fallback;
        }
        self
    }

    /// Reclassify errors whose message starts with `prefix`. Used for
    /// messages that embed request data and can't live in the lookup table.
    pub(crate) fn with_prefix_kind(mut self, prefix: &str, kind: ApiErrorKind) -> Self {
        if self.message.as_deref().is_some_and(|m| m.starts_with(prefix)) {
            self.kind = kind;
        }
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.kind, self.message.as_deref().unwrap_or(""))
    }
}

impl std::error::Error for ApiError {}
