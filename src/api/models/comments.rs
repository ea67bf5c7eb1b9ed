use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;
use crate::api::deserializers::null_as_default;
use crate::api::enums::{CommentSortType, CommentableType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub commentable_id: u32,
    pub commentable_type: CommentableType,
    /// Markdown source. `None` for deleted comments.
    pub message: Option<String>,
    pub message_html: Option<String>,
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub replies_count: u32,
    #[serde(default)]
    pub votes_count: u32,
    /// `None` for comments imported from the old site
    pub user_id: Option<u32>,
    /// Author name of an imported comment
    pub legacy_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub edited_at: Option<DateTime<Utc>>,
    pub edited_by_id: Option<u32>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by_id: Option<u32>,
}

/// Title and link of the object a thread belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentableMeta {
    pub id: Option<u32>,
    pub title: String,
    #[serde(rename = "type")]
    pub commentable_type: Option<CommentableType>,
    pub url: Option<String>,
}

/// Position in a comment listing. Pass the `cursor` of one page to get the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentsCursor {
    pub id: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentsBundle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
    /// Parents and replies of `comments` that are needed to render them
    #[serde(default, deserialize_with = "null_as_default")]
    pub included_comments: Vec<Comment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pinned_comments: Vec<Comment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commentable_meta: Vec<CommentableMeta>,
    #[serde(default)]
    pub has_more: bool,
    pub has_more_id: Option<u32>,
    /// Ids of the comments the authenticated user voted for
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_votes: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    pub sort: Option<CommentSortType>,
    pub top_level_count: Option<u32>,
    pub total: Option<u32>,
    pub cursor: Option<CommentsCursor>,
}
