use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::polymorphic::{self, TypeMapping};

/// Fields shared by user and system posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionPostBase {
    pub id: u64,
    pub beatmapset_discussion_id: u64,
    pub user_id: u32,
    /// Whether the post was generated by the system
    pub system: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub last_editor_id: Option<u32>,
}

/// A post written by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDiscussionPost {
    #[serde(flatten)]
    pub base: DiscussionPostBase,
    pub message: String,
}

/// A post generated when the discussion state changes, e.g. when it is resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDiscussionPost {
    #[serde(flatten)]
    pub base: DiscussionPostBase,
    pub message: SystemMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMessage {
    /// e.g. `resolved`
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiscussionPost {
    User(UserDiscussionPost),
    System(SystemDiscussionPost),
}

impl DiscussionPost {
    pub fn base(&self) -> &DiscussionPostBase {
        match self {
            Self::User(post) => &post.base,
            Self::System(post) => &post.base,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::System(_))
    }
}

impl TypeMapping for DiscussionPost {
    type Base = DiscussionPostBase;
    /// The `system` flag
    type Variant = bool;

    fn variant_of(base: &DiscussionPostBase) -> bool {
        base.system
    }

    fn decode_variant(system: bool, raw: Value) -> serde_json::Result<Self> {
        if system {
            Ok(Self::System(serde_json::from_value(raw)?))
        } else {
            Ok(Self::User(serde_json::from_value(raw)?))
        }
    }
}

impl<'de> Deserialize<'de> for DiscussionPost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        polymorphic::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(system: bool, message: Value) -> Value {
        json!({
            "id": 1,
            "beatmapset_discussion_id": 2,
            "user_id": 3,
            "system": system,
            "created_at": "2023-05-06T07:08:09+00:00",
            "updated_at": null,
            "message": message
        })
    }

    #[test]
    fn test_user_post() {
        let post: DiscussionPost = serde_json::from_value(post(false, json!("nice map"))).unwrap();
        let DiscussionPost::User(user) = &post else {
            panic!("expected a user post");
        };
        assert_eq!(user.message, "nice map");
        assert!(!post.is_system());
        assert_eq!(post.base().beatmapset_discussion_id, 2);
    }

    #[test]
    fn test_system_post() {
        let post: DiscussionPost =
            serde_json::from_value(post(true, json!({"type": "resolved", "value": true}))).unwrap();
        let DiscussionPost::System(system) = &post else {
            panic!("expected a system post");
        };
        assert_eq!(system.message.kind, "resolved");
        assert_eq!(system.message.value, json!(true));
    }

    #[test]
    fn test_message_shape_must_match_flag() {
        assert!(serde_json::from_value::<DiscussionPost>(post(true, json!("text"))).is_err());
        assert!(serde_json::from_value::<DiscussionPost>(post(false, json!({"type": "x", "value": 1}))).is_err());
    }
}
