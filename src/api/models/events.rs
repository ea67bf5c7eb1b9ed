//! Events shown in the "Recent" section of a profile and in the global feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::enums::{BeatmapsetEventApproval, EventType, Grade, Ruleset};
use crate::api::polymorphic::{self, TypeMapping};

/// Fields shared by every event. `type` selects the concrete [`Event`] variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBase {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUser {
    pub username: String,
    pub url: String,
    /// Only set on username change events
    #[serde(rename = "previousUsername", default, skip_serializing_if = "Option::is_none")]
    pub previous_username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBeatmap {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBeatmapset {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAchievement {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub grouping: String,
    pub description: Option<String>,
    pub icon_url: String,
    pub mode: Option<Ruleset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub achievement: EventAchievement,
    pub user: EventUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapPlaycountEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub beatmap: EventBeatmap,
    /// Play count milestone that was reached
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapsetApproveEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub approval: BeatmapsetEventApproval,
    pub beatmapset: EventBeatmapset,
    pub user: EventUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapsetDeleteEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub beatmapset: EventBeatmapset,
}

/// Shape of the revive, update and upload events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapsetUserEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub beatmapset: EventBeatmapset,
    pub user: EventUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(rename = "scoreRank")]
    pub score_rank: Grade,
    /// Leaderboard position
    pub rank: u32,
    pub mode: Ruleset,
    pub beatmap: EventBeatmap,
    pub user: EventUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankLostEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub mode: Ruleset,
    pub beatmap: EventBeatmap,
    pub user: EventUser,
}

/// Shape of the username change and supporter events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub user: EventUser,
}

/// An event, resolved to its concrete shape by its `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Event {
    Achievement(AchievementEvent),
    BeatmapPlaycount(BeatmapPlaycountEvent),
    BeatmapsetApprove(BeatmapsetApproveEvent),
    BeatmapsetDelete(BeatmapsetDeleteEvent),
    BeatmapsetRevive(BeatmapsetUserEvent),
    BeatmapsetUpdate(BeatmapsetUserEvent),
    BeatmapsetUpload(BeatmapsetUserEvent),
    Rank(RankEvent),
    RankLost(RankLostEvent),
    UsernameChange(UserEvent),
    UserSupportAgain(UserEvent),
    UserSupportFirst(UserEvent),
    UserSupportGift(UserEvent),
}

impl Event {
    pub fn base(&self) -> &EventBase {
        match self {
            Self::Achievement(e) => &e.base,
            Self::BeatmapPlaycount(e) => &e.base,
            Self::BeatmapsetApprove(e) => &e.base,
            Self::BeatmapsetDelete(e) => &e.base,
            Self::BeatmapsetRevive(e) | Self::BeatmapsetUpdate(e) | Self::BeatmapsetUpload(e) => &e.base,
            Self::Rank(e) => &e.base,
            Self::RankLost(e) => &e.base,
            Self::UsernameChange(e)
            | Self::UserSupportAgain(e)
            | Self::UserSupportFirst(e)
            | Self::UserSupportGift(e) => &e.base,
        }
    }

    pub fn id(&self) -> u64 {
        self.base().id
    }

    pub fn event_type(&self) -> EventType {
        self.base().event_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base().created_at
    }

    /// The user the event is about, if the event names one.
    pub fn user(&self) -> Option<&EventUser> {
        match self {
            Self::Achievement(e) => Some(&e.user),
            Self::BeatmapPlaycount(_) | Self::BeatmapsetDelete(_) => None,
            Self::BeatmapsetApprove(e) => Some(&e.user),
            Self::BeatmapsetRevive(e) | Self::BeatmapsetUpdate(e) | Self::BeatmapsetUpload(e) => Some(&e.user),
            Self::Rank(e) => Some(&e.user),
            Self::RankLost(e) => Some(&e.user),
            Self::UsernameChange(e)
            | Self::UserSupportAgain(e)
            | Self::UserSupportFirst(e)
            | Self::UserSupportGift(e) => Some(&e.user),
        }
    }
}

impl TypeMapping for Event {
    type Base = EventBase;
    type Variant = EventType;

    fn variant_of(base: &EventBase) -> EventType {
        base.event_type
    }

    fn decode_variant(variant: EventType, raw: Value) -> serde_json::Result<Self> {
        use serde_json::from_value;

        Ok(match variant {
            EventType::Achievement => Self::Achievement(from_value(raw)?),
            EventType::BeatmapPlaycount => Self::BeatmapPlaycount(from_value(raw)?),
            EventType::BeatmapsetApprove => Self::BeatmapsetApprove(from_value(raw)?),
            EventType::BeatmapsetDelete => Self::BeatmapsetDelete(from_value(raw)?),
            EventType::BeatmapsetRevive => Self::BeatmapsetRevive(from_value(raw)?),
            EventType::BeatmapsetUpdate => Self::BeatmapsetUpdate(from_value(raw)?),
            EventType::BeatmapsetUpload => Self::BeatmapsetUpload(from_value(raw)?),
            EventType::Rank => Self::Rank(from_value(raw)?),
            EventType::RankLost => Self::RankLost(from_value(raw)?),
            EventType::UsernameChange => Self::UsernameChange(from_value(raw)?),
            EventType::UserSupportAgain => Self::UserSupportAgain(from_value(raw)?),
            EventType::UserSupportFirst => Self::UserSupportFirst(from_value(raw)?),
            EventType::UserSupportGift => Self::UserSupportGift(from_value(raw)?),
        })
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        polymorphic::deserialize(deserializer)
    }
}

/// A page of the global event feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsBundle {
    pub events: Vec<Event>,
    pub cursor_string: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user() -> Value {
        json!({"username": "peppy", "url": "/u/2"})
    }

    #[test]
    fn test_rank_event() {
        let event: Event = serde_json::from_value(json!({
            "id": 10,
            "created_at": "2024-01-02T03:04:05+00:00",
            "type": "rank",
            "scoreRank": "S",
            "rank": 1,
            "mode": "fruits",
            "beatmap": {"title": "Song [Hard]", "url": "/b/1"},
            "user": user()
        }))
        .unwrap();

        match &event {
            Event::Rank(rank) => {
                assert_eq!(rank.score_rank, Grade::S);
                assert_eq!(rank.mode, Ruleset::Catch);
                assert_eq!(rank.rank, 1);
            }
            other => panic!("expected a rank event, got {:?}", other),
        }
        assert_eq!(event.id(), 10);
        assert_eq!(event.event_type(), EventType::Rank);
        assert_eq!(event.user().unwrap().username, "peppy");
    }

    #[test]
    fn test_username_change_event() {
        let event: Event = serde_json::from_value(json!({
            "id": 11,
            "created_at": "2024-01-02T03:04:05Z",
            "type": "usernameChange",
            "user": {"username": "new", "url": "/u/3", "previousUsername": "old"}
        }))
        .unwrap();

        let Event::UsernameChange(change) = event else {
            panic!("expected a username change event");
        };
        assert_eq!(change.user.previous_username.as_deref(), Some("old"));
    }

    #[test]
    fn test_shared_shapes_keep_their_variant() {
        let event: Event = serde_json::from_value(json!({
            "id": 12,
            "created_at": "2024-01-02T03:04:05Z",
            "type": "beatmapsetRevive",
            "beatmapset": {"title": "Set", "url": "/s/1"},
            "user": user()
        }))
        .unwrap();

        assert!(matches!(event, Event::BeatmapsetRevive(_)));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let result = serde_json::from_value::<Event>(json!({
            "id": 13,
            "created_at": "2024-01-02T03:04:05Z",
            "type": "somethingNew",
            "user": user()
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_variant_field_is_an_error() {
        let result = serde_json::from_value::<Event>(json!({
            "id": 14,
            "created_at": "2024-01-02T03:04:05Z",
            "type": "beatmapPlaycount",
            "beatmap": {"title": "t", "url": "u"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_with_type() {
        let event: Event = serde_json::from_value(json!({
            "id": 15,
            "created_at": "2024-01-02T03:04:05Z",
            "type": "userSupportGift",
            "user": user()
        }))
        .unwrap();

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "userSupportGift");
        assert_eq!(value["user"]["username"], "peppy");
    }
}
