use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::errors::ApiErrorKind;
use crate::api::models::{NewsPost, NewsPostsBundle};
use crate::api::query::{escape, QueryBuilder};
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    pub async fn get_news_posts(
        &self,
        limit: Option<u32>,
        year: Option<i32>,
        cursor: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<NewsPostsBundle>> {
        let query = QueryBuilder::new()
            .param("limit", limit)
            .param("year", year)
            .param("cursor_string", cursor);
        self.get("news", query, None, cancel).await
    }

    pub async fn get_news_post(&self, slug: &str, cancel: &CancellationToken) -> Result<ApiResult<NewsPost>> {
        Ok(self
            .get(&format!("news/{}", escape(slug)), QueryBuilder::new(), None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::NewsPostNotFound))
    }

    pub async fn get_news_post_by_id(&self, id: u32, cancel: &CancellationToken) -> Result<ApiResult<NewsPost>> {
        let query = QueryBuilder::new().param("key", Some("id"));
        Ok(self
            .get(&format!("news/{}", id), query, None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::NewsPostNotFound))
    }
}
