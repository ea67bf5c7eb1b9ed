use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::deserializers::null_as_default;
use crate::api::enums::ForumTopicType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forum {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subforums: Vec<Forum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub id: u32,
    pub forum_id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub topic_type: ForumTopicType,
    pub user_id: u32,
    pub first_post_id: u32,
    pub last_post_id: u32,
    #[serde(default)]
    pub post_count: u32,
    #[serde(default)]
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A forum with the first page of its topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumBundle {
    pub forum: Forum,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<ForumTopic>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pinned_topics: Vec<ForumTopic>,
}
