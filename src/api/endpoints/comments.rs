use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::{CommentSortType, CommentableType};
use crate::api::errors::ApiErrorKind;
use crate::api::models::{CommentsBundle, CommentsCursor};
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

/// Filters for [`OsuClient::get_comments`]. Without a commentable the most
/// recent comments of the whole site are listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentsOptions {
    /// Only comments with an id greater than this
    pub after: Option<u32>,
    pub commentable_type: Option<CommentableType>,
    pub commentable_id: Option<u32>,
    /// Only replies to this comment. `0` lists top level comments.
    pub parent_id: Option<u32>,
    pub sort: Option<CommentSortType>,
    pub cursor: Option<CommentsCursor>,
}

impl OsuClient {
    pub async fn get_comments(
        &self,
        options: &CommentsOptions,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<CommentsBundle>> {
        let cursor = options.cursor.as_ref();
        let query = QueryBuilder::new()
            .param("cursor[id]", cursor.map(|c| c.id))
            .param("cursor[created_at]", cursor.map(|c| c.created_at))
            .param("after", options.after)
            .param("commentable_type", options.commentable_type)
            .param("commentable_id", options.commentable_id)
            .param("parent_id", options.parent_id)
            .param("sort", options.sort);
        self.get("comments", query, None, cancel).await
    }

    /// A comment together with its replies and parents
    pub async fn get_comment(&self, comment_id: u32, cancel: &CancellationToken) -> Result<ApiResult<CommentsBundle>> {
        Ok(self
            .get(&format!("comments/{}", comment_id), QueryBuilder::new(), None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::CommentNotFound))
    }
}
