use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::MatchSortType;
use crate::api::errors::ApiErrorKind;
use crate::api::models::{MatchBundle, MatchesBundle};
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    pub async fn get_matches(
        &self,
        limit: Option<u32>,
        sort: Option<MatchSortType>,
        cursor: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<MatchesBundle>> {
        let query = QueryBuilder::new()
            .param("limit", limit)
            .param("sort", sort)
            .param("cursor_string", cursor);
        self.get("matches", query, None, cancel).await
    }

    /// A match and a page of its events. `before` and `after` are event ids.
    pub async fn get_match(
        &self,
        match_id: u64,
        before: Option<u64>,
        after: Option<u64>,
        limit: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<MatchBundle>> {
        let query = QueryBuilder::new()
            .param("before", before)
            .param("after", after)
            .param("limit", limit);
        Ok(self
            .get(&format!("matches/{}", match_id), query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::MatchNotFound))
    }
}
