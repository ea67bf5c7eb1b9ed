use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::{BeatmapType, Ruleset, UserScoreType, WireName};
use crate::api::errors::ApiErrorKind;
use crate::api::models::{BeatmapPlaycount, BeatmapSetExtended, Event, KudosuHistoryEntry, Score, User, UserExtended};
use crate::api::query::{escape, QueryBuilder, QueryValue};
use crate::api::result::ApiResult;
use crate::error::Result;

/// Identifies a user by id or by username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    Id(u32),
    Username(String),
}

impl UserKey {
    fn path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Username(name) => format!("@{}", escape(name)),
        }
    }
}

impl From<u32> for UserKey {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UserKey {
    fn from(name: &str) -> Self {
        Self::Username(name.to_string())
    }
}

impl From<String> for UserKey {
    fn from(name: String) -> Self {
        Self::Username(name)
    }
}

impl std::str::FromStr for UserKey {
    type Err = std::convert::Infallible;

    /// Numbers are ids, anything else (optionally prefixed with `@`) a username.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Username(s.strip_prefix('@').unwrap_or(s).to_string()),
        })
    }
}

/// Filters for [`OsuClient::get_user_scores`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserScoresOptions {
    /// Only return scores set on osu!stable
    pub legacy_only: bool,
    /// Include failed scores (recent scores only)
    pub include_fails: bool,
    pub ruleset: Option<Ruleset>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl OsuClient {
    pub async fn get_kudosu_history(
        &self,
        user_id: u32,
        limit: Option<u32>,
        offset: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<KudosuHistoryEntry>>> {
        let query = QueryBuilder::new().param("limit", limit).param("offset", offset);
        Ok(self
            .get(&format!("users/{}/kudosu", user_id), query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserNotFound))
    }

    pub async fn get_user_scores(
        &self,
        user_id: u32,
        score_type: UserScoreType,
        options: &UserScoresOptions,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<Score>>> {
        let query = QueryBuilder::new()
            .param("legacy_only", Some(options.legacy_only))
            .param("include_fails", Some(options.include_fails))
            .param("mode", options.ruleset)
            .param("limit", options.limit)
            .param("offset", options.offset);
        let path = format!("users/{}/scores/{}", user_id, score_type.wire_name());
        Ok(self
            .get(&path, query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserNotFound))
    }

    pub async fn get_user_most_played(
        &self,
        user_id: u32,
        limit: Option<u32>,
        offset: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<BeatmapPlaycount>>> {
        let query = QueryBuilder::new().param("limit", limit).param("offset", offset);
        Ok(self
            .get(&format!("users/{}/beatmapsets/most_played", user_id), query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserNotFound))
    }

    pub async fn get_user_beatmaps(
        &self,
        user_id: u32,
        beatmap_type: BeatmapType,
        limit: Option<u32>,
        offset: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<BeatmapSetExtended>>> {
        let query = QueryBuilder::new().param("limit", limit).param("offset", offset);
        let path = format!("users/{}/beatmapsets/{}", user_id, beatmap_type.wire_name());
        Ok(self
            .get(&path, query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserNotFound))
    }

    pub async fn get_recent_activity(
        &self,
        user_id: u32,
        limit: Option<u32>,
        offset: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<Event>>> {
        let query = QueryBuilder::new().param("limit", limit).param("offset", offset);
        Ok(self
            .get(&format!("users/{}/recent_activity", user_id), query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserNotFound))
    }

    /// Full profile of a user. Without a ruleset the user's default one is used.
    pub async fn get_user(
        &self,
        user: impl Into<UserKey>,
        ruleset: Option<Ruleset>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<UserExtended>> {
        let path = format!(
            "users/{}/{}",
            user.into().path_segment(),
            ruleset.map(Ruleset::wire_name).unwrap_or_default()
        );
        Ok(self
            .get(&path, QueryBuilder::new(), None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserNotFound))
    }

    pub async fn get_users(
        &self,
        ids: &[u32],
        include_variant_statistics: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<User>>> {
        let query = QueryBuilder::new()
            .params("ids[]", ids.iter().copied())
            .param("include_variant_statistics", include_variant_statistics);
        self.get("users", query, Some("users"), cancel).await
    }

    /// Look users up by id or by `@username`.
    pub async fn lookup_users<V, I>(
        &self,
        ids: I,
        exclude_bots: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<User>>>
    where
        V: Into<QueryValue>,
        I: IntoIterator<Item = V>,
    {
        let query = QueryBuilder::new()
            .params("ids[]", ids)
            .param("exclude_bots", exclude_bots);
        self.get("users/lookup", query, Some("users"), cancel).await
    }
}
