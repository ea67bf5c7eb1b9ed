use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::deserializers::null_as_default;
use crate::api::enums::{RankedStatus, Ruleset};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    pub id: u32,
    pub beatmapset_id: u32,
    pub difficulty_rating: f64,
    pub mode: Ruleset,
    pub status: RankedStatus,
    /// Length in seconds
    pub total_length: u32,
    /// Creator of the difficulty
    pub user_id: u32,
    /// Difficulty name
    pub version: String,
    pub checksum: Option<String>,
    pub max_combo: Option<u32>,
}

/// A beatmap with its full metadata, as returned by `beatmaps/{beatmap}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapExtended {
    #[serde(flatten)]
    pub beatmap: Beatmap,
    pub accuracy: f64,
    pub ar: f64,
    pub bpm: Option<f64>,
    pub cs: f64,
    pub drain: f64,
    #[serde(default)]
    pub convert: bool,
    #[serde(default)]
    pub count_circles: u32,
    #[serde(default)]
    pub count_sliders: u32,
    #[serde(default)]
    pub count_spinners: u32,
    #[serde(default)]
    pub hit_length: u32,
    #[serde(default)]
    pub passcount: u32,
    #[serde(default)]
    pub playcount: u32,
    pub last_updated: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub beatmapset: Option<BeatmapSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapSet {
    pub id: u32,
    pub artist: String,
    pub artist_unicode: String,
    pub title: String,
    pub title_unicode: String,
    pub creator: String,
    pub user_id: u32,
    pub status: RankedStatus,
    #[serde(default)]
    pub favourite_count: u32,
    #[serde(default)]
    pub play_count: u32,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub source: String,
    pub preview_url: Option<String>,
    pub covers: Option<BeatmapSetCovers>,
}

/// A beatmapset with its difficulties, as returned by `beatmapsets/{beatmapset}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapSetExtended {
    #[serde(flatten)]
    pub beatmapset: BeatmapSet,
    pub bpm: Option<f64>,
    #[serde(default)]
    pub tags: String,
    pub ranked_date: Option<DateTime<Utc>>,
    pub submitted_date: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub beatmaps: Vec<BeatmapExtended>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatmapSetCovers {
    pub cover: String,
    pub card: String,
    pub list: String,
    pub slimcover: String,
}

/// A beatmap and how often a user played it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapPlaycount {
    pub beatmap_id: u32,
    pub count: u32,
    pub beatmap: Option<Beatmap>,
    pub beatmapset: Option<BeatmapSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapPack {
    /// Identifier of the pack, e.g. `S1234`
    pub tag: String,
    pub name: String,
    pub author: String,
    pub date: Option<DateTime<Utc>>,
    pub url: String,
    /// Whether difficulty reduction mods may be used to clear the pack
    #[serde(default)]
    pub no_diff_reduction: bool,
    pub ruleset_id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub beatmapsets: Vec<BeatmapSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapPacksBundle {
    pub beatmap_packs: Vec<BeatmapPack>,
    /// Cursor for the next page, `None` on the last page
    pub cursor_string: Option<String>,
}

/// Difficulty attributes of a beatmap. Fields besides `star_rating` and
/// `max_combo` depend on the ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyAttributes {
    pub star_rating: f64,
    pub max_combo: u32,
    // osu!
    pub aim_difficulty: Option<f64>,
    pub speed_difficulty: Option<f64>,
    pub speed_note_count: Option<f64>,
    pub slider_factor: Option<f64>,
    pub approach_rate: Option<f64>,
    pub overall_difficulty: Option<f64>,
    // osu!taiko
    pub stamina_difficulty: Option<f64>,
    pub rhythm_difficulty: Option<f64>,
    pub colour_difficulty: Option<f64>,
    pub great_hit_window: Option<f64>,
}
