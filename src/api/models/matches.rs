use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::beatmaps::Beatmap;
use super::users::User;
use crate::api::deserializers::null_as_default;
use crate::api::enums::{Grade, MatchEventType, MatchScoringType, MatchTeamType, Ruleset};

/// A multiplayer match of the old client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: u64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    /// `None` while the match is still open
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchesBundle {
    pub matches: Vec<Match>,
    pub cursor_string: Option<String>,
}

/// A match with a page of its events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBundle {
    #[serde(rename = "match")]
    pub match_info: Match,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<MatchEvent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    pub first_event_id: u64,
    pub latest_event_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: u64,
    pub detail: MatchEventDetail,
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<u32>,
    /// Only set for events of type `other`
    pub game: Option<MatchGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEventDetail {
    #[serde(rename = "type")]
    pub event_type: MatchEventType,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGame {
    pub id: u64,
    pub beatmap_id: u32,
    /// `None` if the beatmap was deleted
    pub beatmap: Option<Beatmap>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub mode: Ruleset,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mods: Vec<String>,
    pub scoring_type: MatchScoringType,
    pub team_type: MatchTeamType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: Vec<MatchScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub user_id: u32,
    pub accuracy: f64,
    pub max_combo: u32,
    pub mode: Ruleset,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mods: Vec<String>,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub perfect: bool,
    pub rank: Grade,
    pub score: u64,
    pub created_at: DateTime<Utc>,
    pub statistics: MatchScoreStatistics,
    pub slot: Option<MatchSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScoreStatistics {
    #[serde(default)]
    pub count_300: u32,
    #[serde(default)]
    pub count_100: u32,
    #[serde(default)]
    pub count_50: u32,
    #[serde(default)]
    pub count_geki: u32,
    #[serde(default)]
    pub count_katu: u32,
    #[serde(default)]
    pub count_miss: u32,
}

/// Slot and team of a player in a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSlot {
    pub slot: u32,
    pub team: u32,
    #[serde(default)]
    pub pass: bool,
}
