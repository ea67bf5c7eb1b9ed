use log::debug;
use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::{Ruleset, WireName};
use crate::api::errors::{ApiError, ApiErrorKind, SCORE_NOT_FOUND_MESSAGE};
use crate::api::models::{Score, ScoresBundle};
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    /// Recently submitted scores across all users
    pub async fn get_scores(
        &self,
        ruleset: Option<Ruleset>,
        cursor: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<ScoresBundle>> {
        let query = QueryBuilder::new()
            .param("ruleset", ruleset)
            .param("cursor_string", cursor);
        self.get("scores", query, None, cancel).await
    }

    pub async fn get_score(&self, score_id: u64, cancel: &CancellationToken) -> Result<ApiResult<Score>> {
        self.get(&format!("scores/{}", score_id), QueryBuilder::new(), None, cancel)
            .await
    }

    /// A score by its legacy id, which is only unique within a ruleset
    pub async fn get_legacy_score(
        &self,
        score_id: u64,
        ruleset: Ruleset,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Score>> {
        let path = format!("scores/{}/{}", ruleset.wire_name(), score_id);
        self.get(&path, QueryBuilder::new(), None, cancel).await
    }

    /// Raw replay file of a score.
    ///
    /// The download endpoint does not answer with JSON, so every error answer
    /// is reported as a missing score.
    pub async fn get_replay(&self, score_id: u64, cancel: &CancellationToken) -> Result<ApiResult<Vec<u8>>> {
        let path = format!("scores/{}/download", score_id);
        let response = self.get_raw(&path, QueryBuilder::new(), cancel).await?;

        if response.status().as_u16() != 200 {
            debug!("Replay download for score {} answered {}", score_id, response.status());
            return Ok(ApiResult::failure(ApiError::new(
                ApiErrorKind::ScoreNotFound,
                Some(SCORE_NOT_FOUND_MESSAGE.to_string()),
            )));
        }

        let bytes = Self::read_bytes(response, cancel).await?;
        Ok(ApiResult::success(Some(bytes)))
    }
}
