use serde::{Deserialize, Serialize};

use crate::api::deserializers::null_as_default;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPage {
    /// Locales the page is available in
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_locales: Vec<String>,
    /// `markdown_page` or `main_page`
    pub layout: String,
    pub locale: String,
    pub markdown: Option<String>,
    /// Path of the page, e.g. `Beatmap_ranking_procedure`
    pub path: String,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub title: String,
}
