use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;
use crate::api::deserializers::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalBackground {
    pub url: String,
    /// Artist of the background
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalBackgroundsBundle {
    /// End of the current season
    pub ends_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backgrounds: Vec<SeasonalBackground>,
}
