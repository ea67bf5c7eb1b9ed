use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::beatmaps::BeatmapSet;
use super::users::UserStatistics;
use crate::api::enums::SpotlightType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spotlight {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub spotlight_type: SpotlightType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub mode_specific: bool,
    /// Only set when the spotlight is part of a ranking response
    pub participant_count: Option<u32>,
}

/// Ranking of a spotlight for one ruleset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotlightRanking {
    pub beatmapsets: Vec<BeatmapSet>,
    pub ranking: Vec<UserStatistics>,
    pub spotlight: Spotlight,
}
