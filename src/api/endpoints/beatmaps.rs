use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::{Ruleset, WireName};
use crate::api::errors::ApiErrorKind;
use crate::api::models::{BeatmapExtended, DifficultyAttributes, Score, UserBeatmapScore};
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

/// The API answers invalid mods with a message naming the mods, which can't
/// be mapped through the message table.
const INVALID_MOD_PREFIX: &str = "invalid mod for ruleset: ";

fn score_query(legacy_only: bool, ruleset: Option<Ruleset>) -> QueryBuilder {
    QueryBuilder::new()
        .param("legacy_only", Some(legacy_only))
        .param("mode", ruleset)
}

impl OsuClient {
    pub async fn lookup_beatmap_checksum(
        &self,
        checksum: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<BeatmapExtended>> {
        let query = QueryBuilder::new().param("checksum", Some(checksum));
        Ok(self
            .get("beatmaps/lookup", query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::BeatmapNotFound))
    }

    pub async fn lookup_beatmap_filename(
        &self,
        filename: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<BeatmapExtended>> {
        let query = QueryBuilder::new().param("filename", Some(filename));
        Ok(self
            .get("beatmaps/lookup", query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::BeatmapNotFound))
    }

    /// Best score of a user on a beatmap. The API does not say whether the
    /// user or the score is missing.
    pub async fn get_user_beatmap_score(
        &self,
        beatmap_id: u32,
        user_id: u32,
        legacy_only: bool,
        ruleset: Option<Ruleset>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<UserBeatmapScore>> {
        let path = format!("beatmaps/{}/scores/users/{}", beatmap_id, user_id);
        Ok(self
            .get(&path, score_query(legacy_only, ruleset), None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserOrScoreNotFound))
    }

    pub async fn get_user_beatmap_scores(
        &self,
        beatmap_id: u32,
        user_id: u32,
        legacy_only: bool,
        ruleset: Option<Ruleset>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<Score>>> {
        let path = format!("beatmaps/{}/scores/users/{}/all", beatmap_id, user_id);
        Ok(self
            .get(&path, score_query(legacy_only, ruleset), Some("scores"), cancel)
            .await?
            .with_error_fallback(ApiErrorKind::UserOrScoreNotFound))
    }

    /// Top scores of a beatmap
    pub async fn get_beatmap_scores(
        &self,
        beatmap_id: u32,
        legacy_only: bool,
        ruleset: Option<Ruleset>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<Score>>> {
        let path = format!("beatmaps/{}/scores", beatmap_id);
        self.get(&path, score_query(legacy_only, ruleset), Some("scores"), cancel)
            .await
    }

    pub async fn get_beatmaps(
        &self,
        ids: &[u32],
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<BeatmapExtended>>> {
        let query = QueryBuilder::new().params("ids[]", ids.iter().copied());
        self.get("beatmaps", query, Some("beatmaps"), cancel).await
    }

    pub async fn get_beatmap(
        &self,
        beatmap_id: u32,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<BeatmapExtended>> {
        self.get(&format!("beatmaps/{}", beatmap_id), QueryBuilder::new(), None, cancel)
            .await
    }

    /// Difficulty attributes of a beatmap in a ruleset with the given mod
    /// acronyms applied.
    pub async fn get_difficulty_attributes(
        &self,
        beatmap_id: u32,
        ruleset: Ruleset,
        mods: &[&str],
        cancel: &CancellationToken,
    ) -> Result<ApiResult<DifficultyAttributes>> {
        let query = QueryBuilder::new().params("mods[]", mods.iter().copied());
        let body = json!({ "ruleset": ruleset.wire_name() });
        let path = format!("beatmaps/{}/attributes", beatmap_id);

        Ok(self
            .post(&path, query, &body, Some("attributes"), cancel)
            .await?
            .with_prefix_kind(INVALID_MOD_PREFIX, ApiErrorKind::InvalidMod))
    }
}
