use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::deserializers::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub edit_url: String,
    pub first_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// HTML body. Only present when fetching a single post.
    pub content: Option<String>,
    /// First paragraph without HTML markup. Only present in listings.
    pub preview: Option<String>,
    pub navigation: Option<NewsNavigation>,
}

/// Neighbouring posts of a single news post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsNavigation {
    pub newer: Option<Box<NewsPost>>,
    pub older: Option<Box<NewsPost>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSidebar {
    pub current_year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub news_posts: Vec<NewsPost>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPostsBundle {
    pub news_posts: Vec<NewsPost>,
    pub news_sidebar: Option<NewsSidebar>,
    pub cursor_string: Option<String>,
}
