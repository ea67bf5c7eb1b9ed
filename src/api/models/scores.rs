use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::beatmaps::{Beatmap, BeatmapSet};
use super::users::User;
use crate::api::deserializers::mod_list;
use crate::api::enums::Grade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: u64,
    pub user_id: u32,
    pub beatmap_id: Option<u32>,
    pub ruleset_id: u32,
    /// Accuracy in the range `0..=1`
    pub accuracy: f64,
    pub max_combo: u32,
    #[serde(default, deserialize_with = "mod_list")]
    pub mods: Vec<Mod>,
    pub rank: Grade,
    pub pp: Option<f64>,
    #[serde(default)]
    pub passed: bool,
    pub total_score: u64,
    pub legacy_score_id: Option<u64>,
    pub legacy_total_score: Option<u64>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: DateTime<Utc>,
    #[serde(default)]
    pub has_replay: bool,
    #[serde(default)]
    pub statistics: ScoreStatistics,
    pub weight: Option<PpWeight>,
    pub user: Option<User>,
    pub beatmap: Option<Beatmap>,
    pub beatmapset: Option<BeatmapSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mod {
    pub acronym: String,
    /// Mod-specific settings such as `speed_change`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Hit result counts. Absent judgements count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreStatistics {
    pub perfect: u32,
    pub great: u32,
    pub good: u32,
    pub ok: u32,
    pub meh: u32,
    pub miss: u32,
    pub large_tick_hit: u32,
    pub large_tick_miss: u32,
    pub small_tick_hit: u32,
    pub small_tick_miss: u32,
    pub slider_tail_hit: u32,
}

/// Weighting of a score in the user's total pp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PpWeight {
    pub percentage: f64,
    pub pp: f64,
}

/// A user's best score on a beatmap and its leaderboard position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBeatmapScore {
    pub position: u32,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoresBundle {
    pub scores: Vec<Score>,
    pub cursor_string: Option<String>,
}
