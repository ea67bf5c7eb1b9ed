use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::{Ruleset, WireName};
use crate::api::models::{Spotlight, SpotlightRanking, User};
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    pub async fn get_kudosu_ranking(
        &self,
        page: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<Vec<User>>> {
        let query = QueryBuilder::new().param("page", page);
        self.get("rankings/kudosu", query, Some("ranking"), cancel).await
    }

    pub async fn get_spotlights(&self, cancel: &CancellationToken) -> Result<ApiResult<Vec<Spotlight>>> {
        self.get("spotlights", QueryBuilder::new(), Some("spotlights"), cancel)
            .await
    }

    /// Ranking of a spotlight. Without an id the latest spotlight is used.
    pub async fn get_spotlight_ranking(
        &self,
        ruleset: Ruleset,
        spotlight_id: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SpotlightRanking>> {
        let query = QueryBuilder::new().param("spotlight", spotlight_id);
        let path = format!("rankings/{}/charts", ruleset.wire_name());
        self.get(&path, query, None, cancel).await
    }
}
