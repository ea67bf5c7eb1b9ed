use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::deserializers::null_as_default;
use crate::api::enums::Ruleset;

/// A user as embedded in most responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub avatar_url: String,
    pub country_code: String,
    pub default_group: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_supporter: bool,
    pub last_visit: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pm_friends_only: bool,
    /// Colour of the username, as a hex code
    pub profile_colour: Option<String>,
    /// Only present when requested with `include_variant_statistics` or in rankings
    pub statistics: Option<UserStatistics>,
    /// Present on full profiles and in the kudosu ranking
    pub kudosu: Option<Kudosu>,
}

/// A user with the full profile, as returned by `users/{user}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserExtended {
    #[serde(flatten)]
    pub user: User,
    pub join_date: Option<DateTime<Utc>>,
    pub playmode: Option<Ruleset>,
    pub playstyle: Option<Vec<String>>,
    pub post_count: Option<u32>,
    pub title: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub discord: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub interests: Option<String>,
    pub follower_count: Option<u32>,
    pub support_level: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub previous_usernames: Vec<String>,
    pub scores_best_count: Option<u32>,
    pub scores_first_count: Option<u32>,
    pub scores_recent_count: Option<u32>,
    pub ranked_beatmapset_count: Option<u32>,
    pub loved_beatmapset_count: Option<u32>,
    pub graveyard_beatmapset_count: Option<u32>,
    pub rank_highest: Option<RankHighest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kudosu {
    pub available: i32,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankHighest {
    pub rank: u32,
    pub updated_at: DateTime<Utc>,
}

/// Ruleset statistics of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    #[serde(default)]
    pub pp: f64,
    pub global_rank: Option<u32>,
    pub country_rank: Option<u32>,
    #[serde(default)]
    pub hit_accuracy: f64,
    #[serde(default)]
    pub play_count: u32,
    /// Play time in seconds
    pub play_time: Option<u64>,
    #[serde(default)]
    pub ranked_score: u64,
    #[serde(default)]
    pub total_score: u64,
    #[serde(default)]
    pub total_hits: u64,
    #[serde(default)]
    pub maximum_combo: u32,
    #[serde(default)]
    pub is_ranked: bool,
    pub level: Option<UserLevel>,
    pub grade_counts: Option<GradeCounts>,
    /// Set in rankings, where the statistics wrap the user instead
    pub user: Option<Box<User>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLevel {
    pub current: u32,
    pub progress: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCounts {
    pub ss: u32,
    pub ssh: u32,
    pub s: u32,
    pub sh: u32,
    pub a: u32,
}

/// Entry of a user's kudosu history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KudosuHistoryEntry {
    pub id: u64,
    /// e.g. `give`, `vote.give`, `recalculate.reset`
    pub action: String,
    pub amount: i32,
    /// Object type the exchange is attached to
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub giver: Option<KudosuGiver>,
    pub post: KudosuPost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KudosuGiver {
    pub url: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KudosuPost {
    /// `None` if the post has been deleted
    pub url: Option<String>,
    pub title: String,
}
