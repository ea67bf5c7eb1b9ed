//! Typed client for the osu! API v2.

pub mod auth;
pub mod client;
pub mod deserializers;
pub mod endpoints;
pub mod enums;
pub mod errors;
pub mod http_client;
pub mod models;
pub mod oauth;
pub mod polymorphic;
pub mod query;
pub mod result;

pub use auth::{AccessTokenProvider, ClientCredentialsProvider, StaticTokenProvider};
pub use client::{ClientConfig, OsuClient, OsuClientBuilder, API_BASE_URL, API_VERSION};
pub use endpoints::{CommentsOptions, UserKey, UserScoresOptions};
pub use enums::{
    BeatmapPackType, BeatmapType, BeatmapsetEventApproval, CommentSortType, CommentableType, EventSortType, EventType,
    ForumTopicType, Grade, MatchEventType, MatchScoringType, MatchSortType, MatchTeamType, RankedStatus, Ruleset,
    SpotlightType, UserScoreType, WireName,
};
pub use errors::{ApiError, ApiErrorKind};
pub use oauth::OAuthClient;
pub use query::{QueryBuilder, QueryValue};
pub use result::ApiResult;
