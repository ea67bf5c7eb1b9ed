use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::errors::ApiErrorKind;
use crate::api::models::WikiPage;
use crate::api::query::{escape, QueryBuilder};
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    /// A wiki page, e.g. locale `en` and path `Beatmap_ranking_procedure`
    pub async fn get_wiki_page(
        &self,
        locale: &str,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<WikiPage>> {
        Ok(self
            .get(&wiki_path(locale, path), QueryBuilder::new(), None, cancel)
            .await?
            .with_error_fallback(ApiErrorKind::WikiPageNotFound))
    }
}

/// Nested pages keep their `/` separators, every segment is escaped.
fn wiki_path(locale: &str, path: &str) -> String {
    let segments: Vec<String> = path.split('/').map(escape).collect();
    format!("wiki/{}/{}", escape(locale), segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_path_escapes_segments() {
        assert_eq!(wiki_path("en", "People/The_Team"), "wiki/en/People/The_Team");
        assert_eq!(wiki_path("en", "FAQ?#top"), "wiki/en/FAQ%3F%23top");
        assert_eq!(wiki_path("en", "Game mode/osu!"), "wiki/en/Game%20mode/osu%21");
    }
}
