use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::models::DiscussionPost;
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    /// Posts of beatmapset discussions, optionally limited to one discussion
    /// or one author.
    pub async fn get_discussion_posts(
        &self,
        discussion_id: Option<u64>,
        user_id: Option<u32>,
        limit: Option<u32>,
        page: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<DiscussionPost>>> {
        let query = QueryBuilder::new()
            .param("beatmapset_discussion_id", discussion_id)
            .param("user", user_id)
            .param("limit", limit)
            .param("page", page);
        self.get("beatmapsets/discussions/posts", query, Some("posts"), cancel)
            .await
    }
}
