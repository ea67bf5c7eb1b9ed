use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::errors::ApiErrorKind;
use crate::api::models::{Forum, ForumBundle};
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    /// Top level forums with their subforums
    pub async fn get_forum_listing(&self, cancel: &CancellationToken) -> Result<ApiResult<Vec<Forum>>> {
        self.get("forums", QueryBuilder::new(), Some("forums"), cancel).await
    }

    pub async fn get_forum(&self, forum_id: u32, cancel: &CancellationToken) -> Result<ApiResult<ForumBundle>> {
        Ok(self
            .get(&format!("forums/{}", forum_id), QueryBuilder::new(), None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::ForumNotFound))
    }
}
